//! Capabilities a deployment run needs from its execution environment
//!
//! `DeployContext` is the seam between the runner and whatever chain it talks to.
//! `OdraContext` implements it over an Odra `HostEnv`, which is the Casper livenet
//! environment in production and the Odra VM under `odra-test`.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};

use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv};
use odra::prelude::{Address, Addressable};

use crate::errors::Error;
use crate::hello_meta::{HelloMeta, HelloMetaHostRef, HelloMetaInitArgs};

/// Gas attached to a deployment when none is configured (200 CSPR)
pub const DEFAULT_DEPLOY_GAS: u64 = 200_000_000_000;

/// Constructor inputs of a deployed blueprint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructorArgs<A> {
    /// Unix timestamp, in seconds.
    pub unlock_time: u64,
    pub owner: A,
}

/// Signer enumeration, blueprint resolution and deploy-and-await.
pub trait DeployContext {
    type Address: Clone + ToString;
    type Blueprint;

    /// Signing identities available to the run, in the environment's order.
    fn signers(&self) -> Result<Vec<Self::Address>, Error>;

    /// Looks up a deployable blueprint by its registered name.
    fn resolve(&self, name: &str) -> Result<Self::Blueprint, Error>;

    /// Submits the deployment and waits for it to be confirmed.
    fn deploy(
        &self,
        blueprint: &Self::Blueprint,
        args: ConstructorArgs<Self::Address>,
    ) -> Result<Self::Address, Error>;
}

/// Blueprints compiled into this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blueprint {
    HelloMeta,
}

impl Blueprint {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "HelloMeta" => Some(Blueprint::HelloMeta),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Blueprint::HelloMeta => "HelloMeta",
        }
    }
}

/// `DeployContext` backed by an Odra host environment.
pub struct OdraContext {
    env: HostEnv,
    gas: u64,
    deployed: RefCell<Vec<HelloMetaHostRef>>,
}

impl OdraContext {
    pub fn new(env: HostEnv) -> Self {
        Self {
            env,
            gas: DEFAULT_DEPLOY_GAS,
            deployed: RefCell::new(Vec::new()),
        }
    }

    pub fn with_gas(mut self, gas: u64) -> Self {
        self.gas = gas;
        self
    }

    pub fn env(&self) -> &HostEnv {
        &self.env
    }

    pub fn gas(&self) -> u64 {
        self.gas
    }

    /// Calls `f` with the handle of a HelloMeta this context deployed at `address`.
    ///
    /// Handles are kept from deployment since not every backend can load a
    /// contract back by address.
    pub fn with_hello_meta<R>(
        &self,
        address: Address,
        f: impl FnOnce(&HelloMetaHostRef) -> R,
    ) -> Option<R> {
        let deployed = self.deployed.borrow();
        deployed
            .iter()
            .find(|hello_meta| hello_meta.address() == address)
            .map(f)
    }
}

impl DeployContext for OdraContext {
    type Address = Address;
    type Blueprint = Blueprint;

    /// The environment signs with a single account: its current caller.
    fn signers(&self) -> Result<Vec<Address>, Error> {
        let caller = catch_panic(|| self.env.caller()).map_err(Error::Environment)?;
        Ok(vec![caller])
    }

    fn resolve(&self, name: &str) -> Result<Blueprint, Error> {
        Blueprint::from_name(name).ok_or_else(|| Error::UnknownBlueprint(name.to_string()))
    }

    fn deploy(&self, blueprint: &Blueprint, args: ConstructorArgs<Address>) -> Result<Address, Error> {
        tracing::debug!(
            blueprint = blueprint.name(),
            gas = self.gas,
            unlock_time = args.unlock_time,
            "submitting deployment"
        );

        let address = match blueprint {
            Blueprint::HelloMeta => {
                let init_args = HelloMetaInitArgs {
                    unlock_time: U256::from(args.unlock_time),
                    owner: args.owner,
                };
                // The livenet client panics on transport failures
                let hello_meta = catch_panic(|| {
                    self.env.set_gas(self.gas);
                    HelloMeta::try_deploy(&self.env, init_args)
                })
                .map_err(Error::Deployment)?
                .map_err(|err| Error::Deployment(format!("{err:?}")))?;
                let address = hello_meta.address();
                self.deployed.borrow_mut().push(hello_meta);
                address
            }
        };

        tracing::info!(blueprint = blueprint.name(), address = %address.to_string(), "deployment confirmed");
        Ok(address)
    }
}

/// Runs `f`, turning a panic into its message.
pub fn catch_panic<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        if let Some(message) = payload.downcast_ref::<&str>() {
            message.to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "environment panicked".to_string()
        }
    })
}
