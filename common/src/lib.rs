//! Shared low-level primitives for the board crates.
//!
//! - [`arch`]: global interrupt masking for the running core
//! - [`sync`]: interrupt-safe locking

#![cfg_attr(not(test), no_std)]

pub mod arch;
pub mod sync;
