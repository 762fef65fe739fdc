//! Error definitions for HelloMeta

use odra::prelude::*;

/// HelloMeta contract errors
#[odra::odra_error]
pub enum HelloMetaError {
    /// Unlock time is not later than the current block time
    UnlockTimeNotInFuture = 1,
}

#[cfg(not(target_arch = "wasm32"))]
pub use host::{Error, ErrorKind};

#[cfg(not(target_arch = "wasm32"))]
mod host {
    /// Failure class of a deployment run.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum ErrorKind {
        /// The execution environment could not provide what the run needs.
        Environment,
        /// The requested blueprint is not registered.
        Resolution,
        /// The deployment transaction failed or could not be confirmed.
        Deployment,
    }

    /// Errors surfaced by a deployment run.
    #[derive(Debug, thiserror::Error)]
    pub enum Error {
        #[error("no signer available in the execution environment")]
        NoSigner,
        #[error("execution environment error: {0}")]
        Environment(String),
        #[error("clock reports a time before the unix epoch: {0}")]
        Clock(i64),
        #[error("failed to write deployment output: {0}")]
        Output(#[from] std::io::Error),
        #[error("no blueprint registered under the name {0:?}")]
        UnknownBlueprint(String),
        #[error("deployment failed: {0}")]
        Deployment(String),
    }

    impl Error {
        pub fn kind(&self) -> ErrorKind {
            match self {
                Error::NoSigner | Error::Environment(_) | Error::Clock(_) | Error::Output(_) => {
                    ErrorKind::Environment
                }
                Error::UnknownBlueprint(_) => ErrorKind::Resolution,
                Error::Deployment(_) => ErrorKind::Deployment,
            }
        }
    }
}
