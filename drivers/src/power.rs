//! Sleep manager.
//!
//! Decides what the idle path does when nothing is runnable:
//!
//! 1. an installed idle hook replaces sleeping altogether,
//! 2. otherwise a held deep-sleep lock limits the core to sleep,
//! 3. otherwise the core enters deep sleep.
//!
//! State is shared with interrupt handlers, so it sits behind an
//! [`IrqSpinLock`].

use common::arch::CurrentIrq;
use common::sync::IrqSpinLock;

use crate::hal::power::PowerControl;

/// Idle-time callback.
pub type IdleHook = fn();

/// What one pass through [`SleepManager::idle`] did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IdleAction {
    /// Ran the idle hook; the core stayed active.
    Hook,
    /// Entered sleep.
    Sleep,
    /// Entered deep sleep.
    DeepSleep,
}

#[derive(Debug)]
struct SleepState {
    deep_sleep_locks: u16,
    idle_hook: Option<IdleHook>,
}

pub struct SleepManager {
    state: IrqSpinLock<SleepState, CurrentIrq>,
}

impl SleepManager {
    pub const fn new() -> Self {
        Self {
            state: IrqSpinLock::new(SleepState {
                deep_sleep_locks: 0,
                idle_hook: None,
            }),
        }
    }

    /// Forbid deep sleep until a matching [`unlock_deep_sleep`](Self::unlock_deep_sleep).
    pub fn lock_deep_sleep(&self) {
        self.state.with(|s| {
            if s.deep_sleep_locks == u16::MAX {
                log::warn!("power: deep-sleep lock count saturated");
            } else {
                s.deep_sleep_locks += 1;
            }
        });
    }

    pub fn unlock_deep_sleep(&self) {
        self.state.with(|s| {
            if s.deep_sleep_locks == 0 {
                log::warn!("power: deep-sleep unlock without lock");
            } else {
                s.deep_sleep_locks -= 1;
            }
        });
    }

    pub fn deep_sleep_locked(&self) -> bool {
        self.state.with(|s| s.deep_sleep_locks > 0)
    }

    /// Install (or with `None`, remove) the idle hook.
    pub fn attach_idle_hook(&self, hook: Option<IdleHook>) {
        self.state.with(|s| s.idle_hook = hook);
    }

    pub fn idle_hook(&self) -> Option<IdleHook> {
        self.state.with(|s| s.idle_hook)
    }

    /// One pass of the idle loop.
    pub fn idle<P: PowerControl>(&self, power: &mut P) -> IdleAction {
        let (hook, locked) = self.state.with(|s| (s.idle_hook, s.deep_sleep_locks > 0));

        // Hook runs outside the critical section
        if let Some(hook) = hook {
            hook();
            IdleAction::Hook
        } else if locked {
            power.sleep();
            IdleAction::Sleep
        } else {
            power.deep_sleep();
            IdleAction::DeepSleep
        }
    }
}

impl Default for SleepManager {
    fn default() -> Self {
        Self::new()
    }
}
