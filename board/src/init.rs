//! Board bring-up.
//!
//! Two entry points, called in this order by the startup code:
//!
//! 1. [`Board::sdk_init`]: clocks, resource manager, secure mailbox,
//!    device configuration and interrupts, idle policy
//! 2. [`Board::initialize_board`]: system configuration, LEDs, buttons,
//!    debug-output retargeting
//!
//! Each runs once per boot. Hardware is reached only through the
//! collaborators the [`Board`] was built with.

use drivers::error::{Error, Fault, Result};
use drivers::gpio::{GpioBinder, GpioObject};
use drivers::hal::gpio::{Direction, DriveMode, GpioDriver};
use drivers::hal::serial::RetargetConsole;
use drivers::hal::system::SystemControl;
use drivers::hwmgr::ResourceTracker;
use drivers::pinmap::find_resource;
use drivers::platform::psoc6::pinmap::{UART_RX, UART_TX};
use drivers::power::SleepManager;

use crate::config::{BoardConfig, RetargetConfig};
use crate::idle::apply_idle_policy;
use crate::pins::{BTN_OFF, BTN_PRESSED, LED_STATE_OFF, LED_STATE_ON};
use crate::report::{InitReport, Step};

/// LED slots held by a [`Board`].
pub const MAX_LEDS: usize = 8;
/// Button slots held by a [`Board`].
pub const MAX_BUTTONS: usize = 4;

/// The board and every collaborator bring-up talks to.
pub struct Board<S, G, C> {
    system: S,
    gpio: G,
    console: C,
    hwmgr: ResourceTracker,
    power: SleepManager,
    config: BoardConfig,
    report: InitReport,
    leds: [Option<GpioObject>; MAX_LEDS],
    buttons: [Option<GpioObject>; MAX_BUTTONS],
    sdk_done: bool,
    board_done: bool,
}

impl<S, G, C> Board<S, G, C>
where
    S: SystemControl,
    G: GpioDriver,
    C: RetargetConsole,
{
    pub fn new(system: S, gpio: G, console: C, config: BoardConfig) -> Self {
        Self {
            system,
            gpio,
            console,
            hwmgr: ResourceTracker::new(),
            power: SleepManager::new(),
            config,
            report: InitReport::new(),
            leds: [const { None }; MAX_LEDS],
            buttons: [const { None }; MAX_BUTTONS],
            sdk_done: false,
            board_done: false,
        }
    }

    /// Early SDK initialisation.
    pub fn sdk_init(&mut self) {
        if self.sdk_done {
            log::warn!("sdk_init: already done");
            return;
        }
        self.sdk_done = true;

        self.system.init_clocks();
        self.hwmgr.init();

        if self.config.secure_mailbox {
            self.system.init_secure_mailbox();
        }

        // The lowest-capability core leaves device setup and interrupt
        // enabling to the application core.
        if !self.config.core.is_lowest_capability() {
            self.system.configure_device();
            self.system.enable_interrupts();
        }

        apply_idle_policy(self.config.idle_mode, &self.power);
        log::info!("sdk_init: done on {:?}", self.config.core);
    }

    /// Bring up the board.
    ///
    /// Every step is attempted and recorded in the [`InitReport`]. If any
    /// LED or button failed, the fault goes through the configured
    /// [`FatalPolicy`](drivers::error::FatalPolicy) and retargeting is never
    /// attempted. Retargeting runs only when everything before it succeeded.
    ///
    /// Returns the most severe failure seen, or `Ok(())`.
    pub fn initialize_board(&mut self) -> Result<()> {
        if self.board_done {
            log::warn!("initialize_board: already done");
            return self.report.status();
        }
        self.board_done = true;

        let config_result = self.system.apply_system_config().map_err(Error::from);
        self.report.record(Step::SystemConfig, config_result);

        self.init_indicators();

        let failed = self.report.failures(Step::is_indicator);
        if failed > 0 {
            let failed = u8::try_from(failed).unwrap_or(u8::MAX);
            let err = self
                .config
                .fatal_policy
                .escalate(Fault::Indicators { failed });
            self.report.record(Step::IndicatorCheck, Err(err));
            return Err(err);
        }
        self.report.record(Step::IndicatorCheck, Ok(()));

        if self.report.status().is_ok() {
            if let Some(retarget) = self.config.retarget {
                let result = self.retarget(retarget);
                self.report.record(Step::Retarget, result);
            }
        }

        self.report.status()
    }

    fn init_indicators(&mut self) {
        let mut binder = GpioBinder::new(&mut self.gpio, &mut self.hwmgr, self.config.fatal_policy);

        for (i, &pin) in self.config.leds.iter().enumerate() {
            let step = Step::Led(i as u8);
            let result = match self.leds.get_mut(i) {
                Some(slot) => binder
                    .init_pin(pin, Direction::Output, DriveMode::Strong, LED_STATE_OFF)
                    .map(|led| *slot = Some(led)),
                None => Err(Error::BadArgument),
            };
            self.report.record(step, result);
        }

        for (i, &pin) in self.config.buttons.iter().enumerate() {
            let step = Step::Button(i as u8);
            let result = match self.buttons.get_mut(i) {
                Some(slot) => binder
                    .init_pin(pin, Direction::Input, DriveMode::PullUp, BTN_OFF)
                    .map(|button| *slot = Some(button)),
                None => Err(Error::BadArgument),
            };
            self.report.record(step, result);
        }
    }

    fn retarget(&mut self, retarget: RetargetConfig) -> Result<()> {
        let tx = find_resource(retarget.tx, &UART_TX).ok_or(Error::BadArgument)?;
        let rx = find_resource(retarget.rx, &UART_RX).ok_or(Error::BadArgument)?;
        if tx.resource != rx.resource {
            log::warn!("retarget: {} and {} are on different blocks", tx.pin, rx.pin);
            return Err(Error::BadArgument);
        }

        self.hwmgr.reserve(&tx.resource)?;
        if let Err(status) = self
            .console
            .init(tx.resource.block, tx, rx, retarget.serial)
        {
            self.hwmgr.free(&tx.resource);
            return Err(status.into());
        }

        log::info!("retarget: stdout on {} ({} baud)", tx.resource, retarget.serial.baud_rate);
        Ok(())
    }

    /// Drive LED `index`. Returns `false` if the LED was not brought up.
    pub fn set_led(&mut self, index: usize, on: bool) -> bool {
        match self.leds.get(index) {
            Some(Some(led)) => {
                let level = if on { LED_STATE_ON } else { LED_STATE_OFF };
                self.gpio.write(led.pin(), level);
                true
            }
            _ => false,
        }
    }

    /// `None` if the button was not brought up.
    pub fn button_pressed(&self, index: usize) -> Option<bool> {
        match self.buttons.get(index) {
            Some(Some(button)) => Some(self.gpio.read(button.pin()) == BTN_PRESSED),
            _ => None,
        }
    }

    pub fn report(&self) -> &InitReport {
        &self.report
    }

    pub fn power(&self) -> &SleepManager {
        &self.power
    }

    pub fn hwmgr(&self) -> &ResourceTracker {
        &self.hwmgr
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    pub fn console(&self) -> &C {
        &self.console
    }
}
