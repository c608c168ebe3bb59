//! System configuration contract.
//!
//! Wraps the generated clock and device configuration. None of these steps
//! is implemented in this crate; the target supplies them.

use crate::error::HwStatus;

/// Early system bring-up steps.
pub trait SystemControl {
    /// Low-level system and clock initialisation.
    ///
    /// Runs before anything else, right after memory initialisation.
    fn init_clocks(&mut self);

    /// Bring up the inter-core mailbox to the secure partition.
    fn init_secure_mailbox(&mut self);

    /// Apply the full generated device configuration (pins, clocks,
    /// peripherals).
    fn configure_device(&mut self);

    /// Apply the generated system configuration before board peripherals
    /// come up.
    fn apply_system_config(&mut self) -> Result<(), HwStatus>;

    /// Enable interrupts globally on the running core.
    fn enable_interrupts(&mut self) {
        common::arch::enable_interrupts();
    }
}
