use crate::error::HwStatus;
use crate::hal::serial::{RetargetConsole, SerialConfig};
use crate::pinmap::{PinMapEntry, PinName};

/// Mock retarget console.
#[derive(Debug, Default)]
pub struct MockConsole {
    failure: Option<HwStatus>,
    inits: usize,
    last: Option<(u8, PinName, PinName, SerialConfig)>,
}

impl MockConsole {
    pub const fn new() -> Self {
        Self {
            failure: None,
            inits: 0,
            last: None,
        }
    }

    pub const fn failing(status: HwStatus) -> Self {
        Self {
            failure: Some(status),
            inits: 0,
            last: None,
        }
    }

    pub fn inits(&self) -> usize {
        self.inits
    }

    /// `(block, tx, rx, config)` of the last init.
    pub fn last(&self) -> Option<(u8, PinName, PinName, SerialConfig)> {
        self.last
    }
}

impl RetargetConsole for MockConsole {
    fn init(
        &mut self,
        block: u8,
        tx: &PinMapEntry,
        rx: &PinMapEntry,
        config: SerialConfig,
    ) -> Result<(), HwStatus> {
        self.inits += 1;
        self.last = Some((block, tx.pin, rx.pin, config));
        match self.failure {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }
}
