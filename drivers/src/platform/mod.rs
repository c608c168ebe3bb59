//! Platform Drivers
//!
//! Concrete implementations of the [`crate::hal`] contracts.
//!
//! - `psoc6`: register-level GPIO port driver and the pin tables of the
//!   PSoC 6 family
//! - `mock`: recording doubles for hosted tests (feature `mock`)

cfg_if::cfg_if! {
    if #[cfg(feature = "psoc6")] {
        pub mod psoc6;
    } else if #[cfg(not(any(test, feature = "mock")))] {
        compile_error!(
            "No platform selected!\n\
            Use: cargo build --features psoc6\n\
            Or:  cargo build --features mock"
        );
    }
}

#[cfg(any(test, feature = "mock"))]
pub mod mock;
