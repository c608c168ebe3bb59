//! Interrupt control for the running core.
//!
//! Cortex-M targets mask through PRIMASK; every other target (host builds,
//! tests) gets a software flag so code above this layer stays portable.

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "arm", target_os = "none"))] {
        pub mod arm;
        pub use arm::CortexMIrq as CurrentIrq;
    } else {
        pub mod host;
        pub use host::HostIrq as CurrentIrq;
    }
}

use crate::sync::IrqControl;

/// Enable interrupts globally on this core.
#[inline(always)]
pub fn enable_interrupts() {
    CurrentIrq::enable();
}

/// Disable interrupts globally on this core.
///
/// Returns `true` if they were enabled before the call.
#[inline(always)]
pub fn disable_interrupts() -> bool {
    CurrentIrq::disable()
}
