//! Deployment runner for HelloMeta
//!
//! Takes the first signer, resolves the `HelloMeta` blueprint and deploys it with
//! an unlock time one week from now, owned by that signer. Every step runs after
//! the previous one completes; the first failure ends the run.

use std::io::Write;

use crate::clock::Clock;
use crate::context::{ConstructorArgs, DeployContext};
use crate::errors::Error;

/// Registered name of the deployed blueprint
pub const BLUEPRINT_NAME: &str = "HelloMeta";

/// Seconds between deployment and unlock (7 days)
pub const UNLOCK_DELAY_SECS: u64 = 60 * 60 * 24 * 7;

/// Outcome of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deployment<A> {
    pub signer: A,
    pub unlock_time: u64,
    pub address: A,
}

/// Deploys HelloMeta, writing the two operator lines to `out`.
pub fn run<C, K, W>(context: &C, clock: &K, out: &mut W) -> Result<Deployment<C::Address>, Error>
where
    C: DeployContext,
    K: Clock,
    W: Write,
{
    let signer = context
        .signers()?
        .into_iter()
        .next()
        .ok_or(Error::NoSigner)?;
    writeln!(out, "Deploying contracts with the account: {}", signer.to_string())?;

    let blueprint = context.resolve(BLUEPRINT_NAME)?;

    let unlock_time = unlock_time(clock)?;
    tracing::debug!(unlock_time, "computed unlock time");

    let address = context.deploy(
        &blueprint,
        ConstructorArgs {
            unlock_time,
            owner: signer.clone(),
        },
    )?;
    // Recorded before printing so the address survives a broken output sink
    tracing::info!(address = %address.to_string(), "{BLUEPRINT_NAME} deployed");
    writeln!(out, "{BLUEPRINT_NAME} address: {}", address.to_string())?;

    Ok(Deployment {
        signer,
        unlock_time,
        address,
    })
}

/// Runs a deployment and maps the outcome to a process exit status.
///
/// Returns 0 on success. On failure the error is written to `err` and 1 is returned.
pub fn run_to_exit_status<C, K, W, E>(context: &C, clock: &K, out: &mut W, err: &mut E) -> u8
where
    C: DeployContext,
    K: Clock,
    W: Write,
    E: Write,
{
    match run(context, clock, out) {
        Ok(_) => 0,
        Err(error) => {
            tracing::error!(kind = ?error.kind(), "deployment run failed");
            // Nothing left to report to if stderr itself is gone
            let _ = writeln!(err, "Error: {error}");
            1
        }
    }
}

/// Current time, floored to whole seconds, plus the unlock delay.
pub fn unlock_time<K: Clock>(clock: &K) -> Result<u64, Error> {
    let now = clock.now().timestamp();
    let now = u64::try_from(now).map_err(|_| Error::Clock(now))?;
    Ok(now + UNLOCK_DELAY_SECS)
}
