//! CY8CKIT-062 Board Support
//!
//! Board pin assignments, build-time configuration and the bring-up
//! sequence that ties the driver layer together.
//!
//! # Module Organization
//!
//! - [`pins`]: LED, button and debug UART pins
//! - [`config`]: feature-selected board configuration
//! - [`idle`]: idle power policy
//! - [`report`]: per-step bring-up outcomes
//! - [`init`]: [`Board`], the bring-up orchestrator
//!
//! # Usage Example
//!
//! ```no_run
//! use board::{Board, BoardConfig};
//! use drivers::platform::mock::{MockConsole, MockGpio, MockSystem};
//!
//! let mut board = Board::new(
//!     MockSystem::new(),
//!     MockGpio::new(),
//!     MockConsole::new(),
//!     BoardConfig::BUILD,
//! );
//! board.sdk_init();
//! board.initialize_board()?;
//! board.set_led(0, true);
//! # Ok::<(), drivers::error::Error>(())
//! ```

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod idle;
pub mod init;
pub mod pins;
pub mod report;

pub use config::{BoardConfig, CoreKind, RetargetConfig};
pub use idle::{IdleMode, apply_idle_policy};
pub use init::Board;
pub use report::{InitReport, Step, StepOutcome};
