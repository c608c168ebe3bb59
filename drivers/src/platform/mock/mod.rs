//! Recording doubles for the hardware contracts.
//!
//! Each mock remembers what it was asked to do and can be told to fail, so
//! tests can check call order and failure handling without hardware. They
//! do not allocate and build in `no_std` crates that enable the `mock`
//! feature.

mod gpio;
mod power;
mod serial;
mod system;
mod trng;

pub use gpio::{MockGpio, PinState};
pub use power::MockPower;
pub use serial::MockConsole;
pub use system::{MockSystem, SystemCall};
pub use trng::MockTrng;
