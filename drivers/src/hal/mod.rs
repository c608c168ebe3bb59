//! Hardware Abstraction Layer (HAL) - Collaborator Contracts
//!
//! The board core never touches vendor configuration or peripheral
//! internals directly. It goes through the traits in this module, which the
//! target platform (register drivers, generated configuration code) and the
//! test doubles implement.
//!
//! # Available Interfaces
//!
//! - [`gpio`]: pin initialisation, drive mode and data path
//! - [`rng`]: true random number engine
//! - [`system`]: clock/system configuration and early device setup
//! - [`serial`]: debug console used for standard output retargeting
//! - [`power`]: low-power mode entry

pub mod gpio;
pub mod power;
pub mod rng;
pub mod serial;
pub mod system;
