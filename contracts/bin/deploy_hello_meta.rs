//! Livenet deployment script for HelloMeta
//!
//! Deploys HelloMeta owned by the livenet caller, unlocking one week from now.
//! Node address, chain name and secret key are read by the livenet environment
//! (`ODRA_CASPER_LIVENET_*` variables or a `.env` file).
//!
//! Run with: cargo run --bin deploy_hello_meta --features livenet --release

use std::io;
use std::process::ExitCode;

use clap::Parser;
use hello_meta::clock::SystemClock;
use hello_meta::context::{catch_panic, OdraContext, DEFAULT_DEPLOY_GAS};
use hello_meta::errors::Error;
use hello_meta::runner;
use tracing_subscriber::EnvFilter;

/// Deploy HelloMeta to a Casper network
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Gas attached to the deployment, in motes
    #[arg(long, env = "HELLO_META_DEPLOY_GAS", default_value_t = DEFAULT_DEPLOY_GAS)]
    gas: u64,

    /// Log filter for diagnostics written to stderr
    #[arg(long = "log-level", env = "HELLO_META_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);
    tracing::debug!("Parsed CLI options: {:?}", args);

    // Load the Casper livenet environment; it panics on missing configuration
    let env = match catch_panic(odra_casper_livenet_env::env) {
        Ok(env) => env,
        Err(message) => {
            eprintln!("Error: {}", Error::Environment(message));
            return ExitCode::FAILURE;
        }
    };

    let context = OdraContext::new(env).with_gas(args.gas);
    let status = runner::run_to_exit_status(
        &context,
        &SystemClock,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(status)
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
