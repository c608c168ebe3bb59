//! Low-power mode contract.

/// Low-power mode entry for the running core.
pub trait PowerControl {
    /// Enter sleep; peripherals and fast clocks keep running.
    fn sleep(&mut self);

    /// Enter deep sleep; only low-frequency domains stay alive.
    fn deep_sleep(&mut self);
}
