//! Cypress PSoC 6 (CY8C6xx7) platform.

pub mod gpio;
pub mod pinmap;

pub use gpio::Psoc6Gpio;
