//! Power-idle policy.
//!
//! Picks, once per boot, how the idle path behaves. The choice is a build
//! setting and is never revisited at runtime.

use drivers::power::SleepManager;

/// Idle behaviour selected at build time.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum IdleMode {
    /// Busy-spin in idle: lowest wake-up latency, highest power.
    Active = 0,
    /// Sleep in idle, never deep sleep.
    Sleep = 1,
    /// Deepest available low-power state.
    #[default]
    DeepSleep = 2,
}

impl IdleMode {
    /// Decode a raw configuration value. Unknown values mean deep sleep.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => IdleMode::Active,
            1 => IdleMode::Sleep,
            _ => IdleMode::DeepSleep,
        }
    }
}

/// Idle hook that keeps the core awake.
fn active_idle_hook() {}

/// Apply `mode` to the sleep manager.
pub fn apply_idle_policy(mode: IdleMode, power: &SleepManager) {
    match mode {
        IdleMode::Active => power.attach_idle_hook(Some(active_idle_hook)),
        IdleMode::Sleep => power.lock_deep_sleep(),
        IdleMode::DeepSleep => {}
    }
    log::info!("idle policy: {:?}", mode);
}
