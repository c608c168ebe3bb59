//! GPIO driver contract.

use crate::error::HwStatus;
use crate::pinmap::PinName;

/// Pin direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Input buffer enabled, output driver per drive mode.
    Input,
    /// Output only; the input buffer is disabled.
    Output,
    /// Input buffer and output driver both enabled.
    Bidirectional,
}

/// Electrical drive mode of a pin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DriveMode {
    /// Digital high impedance.
    None,
    /// Analog; digital input buffer off.
    Analog,
    /// Resistive pull-up.
    PullUp,
    /// Resistive pull-down.
    PullDown,
    /// Open drain, drives low.
    OpenDrainDriveLow,
    /// Open drain, drives high.
    OpenDrainDriveHigh,
    /// Strong push-pull.
    Strong,
    /// Resistive pull-up and pull-down.
    PullUpDown,
}

/// GPIO driver.
///
/// Implemented by the platform's port driver. Every method takes a pin
/// that the caller has already validated as connected.
pub trait GpioDriver {
    /// Configure `pin` and set its output latch to `initial`.
    fn init(
        &mut self,
        pin: PinName,
        direction: Direction,
        drive: DriveMode,
        initial: bool,
    ) -> Result<(), HwStatus>;

    /// Change direction and drive mode of an initialised pin.
    fn configure(
        &mut self,
        pin: PinName,
        direction: Direction,
        drive: DriveMode,
    ) -> Result<(), HwStatus>;

    /// Set the output latch.
    fn write(&mut self, pin: PinName, value: bool);

    /// Read the input buffer.
    fn read(&self, pin: PinName) -> bool;
}
