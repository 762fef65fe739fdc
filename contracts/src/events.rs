//! Events for HelloMeta (CEP-88 compliant)

use odra::prelude::*;
use odra::casper_types::U256;

/// Emitted once, when HelloMeta is initialized
#[odra::event]
pub struct HelloMetaCreated {
    pub unlock_time: U256,
    pub owner: Address,
}
