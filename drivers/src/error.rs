//! Status and error types shared by every driver in this crate.
//!
//! Hardware collaborators report a raw [`HwStatus`]. The driver layer turns
//! it into an [`Error`], which carries one of three failure kinds:
//!
//! - [`Error::BadArgument`]: caller error, nothing was touched
//! - [`Error::HardwareFailure`]: the peripheral reported a non-success status
//! - [`Error::Fatal`]: a board defect; escalated through [`FatalPolicy`]
//!
//! A lookup that finds nothing is not an error and is reported as `None`.

use core::fmt;

use crate::pinmap::PinName;

/// Result type for driver operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Raw status reported by a hardware collaborator.
///
/// Laid out as `module << 16 | code`. A collaborator only hands one out on
/// failure; success is `Ok(..)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HwStatus(u32);

impl HwStatus {
    pub const MODULE_HWMGR: u16 = 0x0001;
    pub const MODULE_GPIO: u16 = 0x0002;
    pub const MODULE_TRNG: u16 = 0x0003;
    pub const MODULE_UART: u16 = 0x0004;
    pub const MODULE_SYSTEM: u16 = 0x0005;

    /// Resource already reserved.
    pub const HWMGR_IN_USE: Self = Self::new(Self::MODULE_HWMGR, 0x01);
    /// Resource outside the tracked range.
    pub const HWMGR_INVALID: Self = Self::new(Self::MODULE_HWMGR, 0x02);
    /// Reservation attempted before the manager was initialised.
    pub const HWMGR_UNINITIALIZED: Self = Self::new(Self::MODULE_HWMGR, 0x03);
    /// Pin does not exist on this device.
    pub const GPIO_BAD_PIN: Self = Self::new(Self::MODULE_GPIO, 0x01);

    pub const fn new(module: u16, code: u16) -> Self {
        Self(((module as u32) << 16) | code as u32)
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn module(self) -> u16 {
        (self.0 >> 16) as u16
    }

    pub const fn code(self) -> u16 {
        self.0 as u16
    }
}

impl fmt::Display for HwStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {:#06x}:{:#06x}", self.module(), self.code())
    }
}

/// Board defects that are not meant to be recovered from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Fault {
    /// A binding operation was handed the "not connected" pin.
    UnconnectedPin,
    /// The GPIO driver refused to initialise a pin during binding.
    GpioInit { pin: PinName, status: HwStatus },
    /// The GPIO driver refused a drive-mode change.
    DriveMode { pin: PinName, status: HwStatus },
    /// On-board LEDs or buttons failed to come up.
    Indicators { failed: u8 },
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::UnconnectedPin => write!(f, "binding requested for NC pin"),
            Fault::GpioInit { pin, status } => {
                write!(f, "GPIO init failed on {}: {}", pin, status)
            }
            Fault::DriveMode { pin, status } => {
                write!(f, "drive mode change failed on {}: {}", pin, status)
            }
            Fault::Indicators { failed } => {
                write!(f, "{} board LED/button step(s) failed", failed)
            }
        }
    }
}

/// Driver errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Absent or invalid handle, pin or destination.
    BadArgument,
    /// The underlying peripheral reported failure.
    HardwareFailure(HwStatus),
    /// A fatal fault that the active [`FatalPolicy`] chose to report.
    Fatal(Fault),
}

impl Error {
    /// Ordering used when several failures are folded into one result.
    pub const fn severity(&self) -> u8 {
        match self {
            Error::BadArgument => 1,
            Error::HardwareFailure(_) => 2,
            Error::Fatal(_) => 3,
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Error::Fatal(_))
    }
}

impl From<HwStatus> for Error {
    fn from(status: HwStatus) -> Self {
        Error::HardwareFailure(status)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadArgument => write!(f, "bad argument"),
            Error::HardwareFailure(status) => write!(f, "hardware failure ({})", status),
            Error::Fatal(fault) => write!(f, "fatal: {}", fault),
        }
    }
}

/// What to do when a [`Fault`] is raised.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FatalPolicy {
    /// Log and panic. On target the panic handler parks the core.
    #[default]
    Halt,
    /// Log and hand the fault back as [`Error::Fatal`].
    Report,
}

impl FatalPolicy {
    /// Apply the policy to `fault`.
    ///
    /// Returns only under [`FatalPolicy::Report`].
    #[track_caller]
    pub fn escalate(self, fault: Fault) -> Error {
        log::error!("{}", fault);
        match self {
            FatalPolicy::Halt => panic!("{}", fault),
            FatalPolicy::Report => Error::Fatal(fault),
        }
    }
}
