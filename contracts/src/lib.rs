//! HelloMeta - a time-locked contract and the runner that deploys it
//!
//! This crate provides:
//! - The `HelloMeta` contract, constructed with an unlock time and an owner
//! - A deployment runner that deploys it for the first available signer,
//!   unlocking one week after the run

#![cfg_attr(target_arch = "wasm32", no_std)]

extern crate alloc;

pub mod errors;
pub mod events;
pub mod hello_meta;

#[cfg(not(target_arch = "wasm32"))]
pub mod clock;
#[cfg(not(target_arch = "wasm32"))]
pub mod context;
#[cfg(not(target_arch = "wasm32"))]
pub mod runner;

pub use errors::*;
pub use events::*;
pub use hello_meta::HelloMeta;

// Re-export generated types only when not building for wasm32 target
#[cfg(not(target_arch = "wasm32"))]
pub use hello_meta::{HelloMetaHostRef, HelloMetaInitArgs};
