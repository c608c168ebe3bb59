//! Board Driver Subsystem
//!
//! Pin resolution, pin binding and entropy for the board support layer,
//! written against contracts so the same code runs on target and in hosted
//! tests.
//!
//! # Module Organization
//!
//! - [`hal`]: contracts for external collaborators (GPIO, TRNG, system
//!   configuration, console, low-power entry)
//! - [`pinmap`]: logical pins, resource descriptors and table lookup
//! - [`hwmgr`]: hardware resource reservation
//! - [`gpio`]: binding logical pins to GPIO hardware
//! - [`trng`]: 32-bit random words from the hardware TRNG
//! - [`power`]: deep-sleep locking and idle dispatch
//! - [`platform`]: concrete drivers and test doubles
//!
//! # Usage Example
//!
//! ```no_run
//! use drivers::error::FatalPolicy;
//! use drivers::gpio::GpioBinder;
//! use drivers::hal::gpio::DriveMode;
//! use drivers::hwmgr::ResourceTracker;
//! use drivers::pinmap::PinName;
//! use drivers::platform::psoc6::Psoc6Gpio;
//!
//! let mut gpio = unsafe { Psoc6Gpio::new() };
//! let mut hwmgr = ResourceTracker::new();
//! hwmgr.init();
//!
//! let mut binder = GpioBinder::new(&mut gpio, &mut hwmgr, FatalPolicy::Halt);
//! let mut led = binder.bind(PinName::new(13, 7))?;
//! binder.set_drive_mode(&mut led, DriveMode::Strong)?;
//! binder.write(&led, true);
//! # Ok::<(), drivers::error::Error>(())
//! ```

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod gpio;
pub mod hal;
pub mod hwmgr;
pub mod pinmap;
pub mod platform;
pub mod power;
pub mod trng;

// Re-export commonly used types
pub use error::{Error, FatalPolicy, Fault, HwStatus};
pub use gpio::{GpioBinder, GpioObject};
pub use hal::gpio::{Direction, DriveMode, GpioDriver};
pub use pinmap::{PinMapEntry, PinName, ResourceDescriptor, ResourceKind, find_resource};
pub use power::{IdleAction, SleepManager};
