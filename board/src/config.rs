//! Build-time board configuration.
//!
//! Cargo features pick the values of [`BoardConfig::BUILD`]:
//!
//! - `idle-active` / `idle-sleep`: idle behaviour (deep sleep otherwise)
//! - `cm0p`: build for the Cortex-M0+ core
//! - `spm-mailbox`: bring up the secure partition mailbox
//! - `retarget`: retarget standard output onto the KitProg UART

use drivers::error::FatalPolicy;
use drivers::hal::serial::SerialConfig;
use drivers::pinmap::PinName;

use crate::idle::IdleMode;
use crate::pins;

/// CPU core the image runs on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoreKind {
    /// Cortex-M0+: secure/system core.
    Cm0Plus,
    /// Cortex-M4: application core.
    Cm4,
}

impl CoreKind {
    /// The lowest-capability core leaves device setup to the other core.
    pub const fn is_lowest_capability(self) -> bool {
        matches!(self, CoreKind::Cm0Plus)
    }
}

/// Standard output retargeting.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RetargetConfig {
    pub tx: PinName,
    pub rx: PinName,
    pub serial: SerialConfig,
}

impl RetargetConfig {
    /// KitProg bridge UART at 115200 8N1.
    pub const KITPROG: Self = Self {
        tx: pins::DEBUG_UART_TX,
        rx: pins::DEBUG_UART_RX,
        serial: SerialConfig::new_8n1(115200),
    };
}

cfg_if::cfg_if! {
    if #[cfg(feature = "idle-active")] {
        const IDLE_MODE: IdleMode = IdleMode::Active;
    } else if #[cfg(feature = "idle-sleep")] {
        const IDLE_MODE: IdleMode = IdleMode::Sleep;
    } else {
        const IDLE_MODE: IdleMode = IdleMode::DeepSleep;
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "cm0p")] {
        const CORE: CoreKind = CoreKind::Cm0Plus;
    } else {
        const CORE: CoreKind = CoreKind::Cm4;
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "retarget")] {
        const RETARGET: Option<RetargetConfig> = Some(RetargetConfig::KITPROG);
    } else {
        const RETARGET: Option<RetargetConfig> = None;
    }
}

// Ensure only one idle mode is selected
#[cfg(all(feature = "idle-active", feature = "idle-sleep"))]
compile_error!("Multiple idle modes selected! Choose only one: idle-active OR idle-sleep");

/// Everything bring-up needs to know about the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub leds: &'static [PinName],
    pub buttons: &'static [PinName],
    pub retarget: Option<RetargetConfig>,
    pub core: CoreKind,
    pub secure_mailbox: bool,
    pub idle_mode: IdleMode,
    pub fatal_policy: FatalPolicy,
}

impl BoardConfig {
    /// Configuration selected by the enabled Cargo features.
    pub const BUILD: Self = Self {
        leds: &pins::LEDS,
        buttons: &pins::BUTTONS,
        retarget: RETARGET,
        core: CORE,
        secure_mailbox: cfg!(feature = "spm-mailbox"),
        idle_mode: IDLE_MODE,
        fatal_policy: FatalPolicy::Halt,
    };

    /// Minimal configuration: application core, no retargeting, no
    /// mailbox, deep sleep in idle, halt on faults.
    pub const fn new(leds: &'static [PinName], buttons: &'static [PinName]) -> Self {
        Self {
            leds,
            buttons,
            retarget: None,
            core: CoreKind::Cm4,
            secure_mailbox: false,
            idle_mode: IdleMode::DeepSleep,
            fatal_policy: FatalPolicy::Halt,
        }
    }

    pub const fn with_retarget(mut self, retarget: RetargetConfig) -> Self {
        self.retarget = Some(retarget);
        self
    }

    pub const fn with_core(mut self, core: CoreKind) -> Self {
        self.core = core;
        self
    }

    pub const fn with_secure_mailbox(mut self, enabled: bool) -> Self {
        self.secure_mailbox = enabled;
        self
    }

    pub const fn with_idle_mode(mut self, mode: IdleMode) -> Self {
        self.idle_mode = mode;
        self
    }

    pub const fn with_fatal_policy(mut self, policy: FatalPolicy) -> Self {
        self.fatal_policy = policy;
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::BUILD
    }
}
