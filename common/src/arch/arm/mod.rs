use crate::sync::irq::IrqControl;

const PRIMASK_PM_BIT: u32 = 1 << 0;

pub struct CortexMIrq;

/// Interrupt control for ARMv6-M / ARMv7-M cores (Cortex-M0+, Cortex-M4).
///
/// Masking goes through PRIMASK rather than the CPSR I bit:
///
/// - `mrs {0}, primask`: read the current mask
/// - `cpsid i`: set PRIMASK, masking every configurable-priority exception
/// - `cpsie i`: clear PRIMASK
///
/// The `State` is `true` when interrupts were enabled before `disable()`.
impl IrqControl for CortexMIrq {
    type State = bool;

    #[inline(always)]
    fn disable() -> bool {
        let primask: u32;
        unsafe {
            core::arch::asm!(
                "mrs {0}, primask",
                "cpsid i",
                out(reg) primask,
                options(nomem, nostack, preserves_flags)
            );
        }
        primask & PRIMASK_PM_BIT == 0
    }

    #[inline(always)]
    fn restore(prev_enabled: bool) {
        if prev_enabled {
            Self::enable();
        }
    }

    #[inline(always)]
    fn enable() {
        unsafe {
            core::arch::asm!("cpsie i", options(nomem, nostack, preserves_flags));
        }
    }
}
