//! GPIO binding layer.
//!
//! Binds logical pins to GPIO hardware through the resource manager and the
//! platform [`GpioDriver`]. Two initialisation paths exist:
//!
//! - [`GpioBinder::bind`]: generic pin objects. A bad pin or a driver that
//!   refuses the pin is a board defect and goes through the [`FatalPolicy`].
//! - [`GpioBinder::init_pin`]: board LEDs and buttons. Failures come back
//!   as ordinary errors so bring-up can fold them together.

use crate::error::{Error, Fault, FatalPolicy, HwStatus, Result};
use crate::hal::gpio::{Direction, DriveMode, GpioDriver};
use crate::hwmgr::ResourceTracker;
use crate::pinmap::{PinName, ResourceDescriptor};

/// A pin bound to its GPIO resource.
///
/// Owned by whoever bound it; there is no unbind.
#[derive(Debug, PartialEq, Eq)]
pub struct GpioObject {
    pin: PinName,
    resource: ResourceDescriptor,
    direction: Direction,
    drive: DriveMode,
}

impl GpioObject {
    pub fn pin(&self) -> PinName {
        self.pin
    }

    pub fn resource(&self) -> ResourceDescriptor {
        self.resource
    }

    /// Direction the pin was initialised with.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn drive(&self) -> DriveMode {
        self.drive
    }
}

/// Binds pins against one GPIO driver and resource manager.
pub struct GpioBinder<'a, G: GpioDriver> {
    driver: &'a mut G,
    hwmgr: &'a mut ResourceTracker,
    policy: FatalPolicy,
}

impl<'a, G: GpioDriver> GpioBinder<'a, G> {
    pub fn new(driver: &'a mut G, hwmgr: &'a mut ResourceTracker, policy: FatalPolicy) -> Self {
        Self {
            driver,
            hwmgr,
            policy,
        }
    }

    /// Bind `pin` as an analog input with the output latch low.
    ///
    /// The pin always starts out as an input regardless of how the caller
    /// will use it; [`set_drive_mode`](Self::set_drive_mode) finishes the
    /// configuration.
    pub fn bind(&mut self, pin: PinName) -> Result<GpioObject> {
        if !pin.is_connected() {
            return Err(self.policy.escalate(Fault::UnconnectedPin));
        }
        self.claim(pin, Direction::Input, DriveMode::Analog, false)
            .map_err(|status| self.policy.escalate(Fault::GpioInit { pin, status }))
    }

    /// Initialise `pin` with an explicit configuration.
    pub fn init_pin(
        &mut self,
        pin: PinName,
        direction: Direction,
        drive: DriveMode,
        initial: bool,
    ) -> Result<GpioObject> {
        if !pin.is_connected() {
            return Err(Error::BadArgument);
        }
        self.claim(pin, direction, drive, initial)
            .map_err(Error::HardwareFailure)
    }

    fn claim(
        &mut self,
        pin: PinName,
        direction: Direction,
        drive: DriveMode,
        initial: bool,
    ) -> core::result::Result<GpioObject, HwStatus> {
        let resource = ResourceDescriptor::gpio(pin);
        self.hwmgr.reserve(&resource)?;

        if let Err(status) = self.driver.init(pin, direction, drive, initial) {
            self.hwmgr.free(&resource);
            return Err(status);
        }

        log::debug!("gpio: {} bound as {:?}/{:?}", pin, direction, drive);
        Ok(GpioObject {
            pin,
            resource,
            direction,
            drive,
        })
    }

    /// Change the drive mode of a bound pin.
    ///
    /// Applied with the direction the pin was bound with, which keeps the
    /// input buffer enabled for input-bound pins. A driver refusal is fatal.
    pub fn set_drive_mode(&mut self, obj: &mut GpioObject, mode: DriveMode) -> Result<()> {
        match self.driver.configure(obj.pin, obj.direction, mode) {
            Ok(()) => {
                obj.drive = mode;
                Ok(())
            }
            Err(status) => Err(self.policy.escalate(Fault::DriveMode {
                pin: obj.pin,
                status,
            })),
        }
    }

    /// Accepted and ignored.
    ///
    /// The requested direction is not forwarded to hardware: the input
    /// buffer has to stay enabled even on output pins, so every pin keeps
    /// the direction it was bound with.
    pub fn set_direction(&mut self, obj: &GpioObject, direction: Direction) -> Result<()> {
        log::trace!("gpio: {} direction {:?} not applied", obj.pin, direction);
        Ok(())
    }

    pub fn write(&mut self, obj: &GpioObject, value: bool) {
        self.driver.write(obj.pin, value);
    }

    pub fn read(&self, obj: &GpioObject) -> bool {
        self.driver.read(obj.pin)
    }
}

/// Legacy set-pin entry point.
///
/// Performs no hardware access and always returns an empty mask.
pub fn gpio_set(_pin: PinName) -> u32 {
    0
}
