//! HelloMeta - time-locked contract owned by its deployer
//!
//! Holds the unlock timestamp (unix seconds) and the owner it was constructed with.

use odra::prelude::*;
use odra::casper_types::U256;

use crate::errors::HelloMetaError;
use crate::events::HelloMetaCreated;

/// HelloMeta - records when it unlocks and who owns it
#[odra::module]
pub struct HelloMeta {
    unlock_time: Var<U256>,
    owner: Var<Address>,
}

#[odra::module]
impl HelloMeta {
    /// Initialize with an unlock time in the future and an owner
    pub fn init(&mut self, unlock_time: U256, owner: Address) {
        // Block time is in milliseconds
        let now = U256::from(self.env().get_block_time() / 1000);
        if unlock_time <= now {
            self.env().revert(HelloMetaError::UnlockTimeNotInFuture);
        }

        self.unlock_time.set(unlock_time);
        self.owner.set(owner);

        self.env().emit_event(HelloMetaCreated { unlock_time, owner });
    }

    pub fn unlock_time(&self) -> U256 {
        self.unlock_time.get_or_default()
    }

    pub fn owner(&self) -> Option<Address> {
        self.owner.get()
    }
}
