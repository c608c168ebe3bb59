use core::sync::atomic::{AtomicBool, Ordering};

use crate::sync::irq::IrqControl;

/// Interrupts start masked, as on reset.
static IRQ_ENABLED: AtomicBool = AtomicBool::new(false);

/// Software interrupt mask for hosted builds.
pub struct HostIrq;

impl HostIrq {
    /// Current state of the software mask.
    pub fn enabled() -> bool {
        IRQ_ENABLED.load(Ordering::Acquire)
    }
}

impl IrqControl for HostIrq {
    type State = bool;

    fn disable() -> bool {
        IRQ_ENABLED.swap(false, Ordering::AcqRel)
    }

    fn restore(prev_enabled: bool) {
        if prev_enabled {
            Self::enable();
        }
    }

    fn enable() {
        IRQ_ENABLED.store(true, Ordering::Release);
    }
}
