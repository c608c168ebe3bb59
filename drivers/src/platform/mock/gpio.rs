use crate::error::HwStatus;
use crate::hal::gpio::{Direction, DriveMode, GpioDriver};
use crate::pinmap::PinName;

const PIN_SLOTS: usize = 256;

/// Last configuration seen for one pin.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PinState {
    pub direction: Direction,
    pub drive: DriveMode,
    pub latch: bool,
    /// Externally driven level; reads fall back to `latch` when unset.
    pub input: Option<bool>,
}

/// Mock GPIO driver.
#[derive(Debug)]
pub struct MockGpio {
    pins: [Option<PinState>; PIN_SLOTS],
    fail_init: Option<(PinName, HwStatus)>,
    fail_configure: Option<HwStatus>,
    init_calls: usize,
    configure_calls: usize,
}

impl MockGpio {
    pub const fn new() -> Self {
        Self {
            pins: [None; PIN_SLOTS],
            fail_init: None,
            fail_configure: None,
            init_calls: 0,
            configure_calls: 0,
        }
    }

    /// Make `init` on `pin` fail with `status`.
    pub fn fail_init_on(&mut self, pin: PinName, status: HwStatus) {
        self.fail_init = Some((pin, status));
    }

    /// Make every `configure` fail with `status`.
    pub fn fail_configure(&mut self, status: HwStatus) {
        self.fail_configure = Some(status);
    }

    /// Drive the input level of an initialised pin.
    pub fn set_input(&mut self, pin: PinName, level: bool) {
        if let Some(state) = self.pins[pin.index()].as_mut() {
            state.input = Some(level);
        }
    }

    pub fn state(&self, pin: PinName) -> Option<PinState> {
        self.pins[pin.index()]
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls
    }

    pub fn configure_calls(&self) -> usize {
        self.configure_calls
    }
}

impl Default for MockGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioDriver for MockGpio {
    fn init(
        &mut self,
        pin: PinName,
        direction: Direction,
        drive: DriveMode,
        initial: bool,
    ) -> Result<(), HwStatus> {
        self.init_calls += 1;
        if let Some((failing, status)) = self.fail_init {
            if failing == pin {
                return Err(status);
            }
        }
        self.pins[pin.index()] = Some(PinState {
            direction,
            drive,
            latch: initial,
            input: None,
        });
        Ok(())
    }

    fn configure(
        &mut self,
        pin: PinName,
        direction: Direction,
        drive: DriveMode,
    ) -> Result<(), HwStatus> {
        self.configure_calls += 1;
        if let Some(status) = self.fail_configure {
            return Err(status);
        }
        match self.pins[pin.index()].as_mut() {
            Some(state) => {
                state.direction = direction;
                state.drive = drive;
                Ok(())
            }
            None => Err(HwStatus::GPIO_BAD_PIN),
        }
    }

    fn write(&mut self, pin: PinName, value: bool) {
        if let Some(state) = self.pins[pin.index()].as_mut() {
            state.latch = value;
        }
    }

    fn read(&self, pin: PinName) -> bool {
        self.pins[pin.index()]
            .map(|state| state.input.unwrap_or(state.latch))
            .unwrap_or(false)
    }
}
