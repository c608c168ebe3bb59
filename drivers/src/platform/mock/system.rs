use crate::error::HwStatus;
use crate::hal::system::SystemControl;

const LOG_CAPACITY: usize = 16;

/// One recorded [`SystemControl`] call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SystemCall {
    InitClocks,
    InitSecureMailbox,
    ConfigureDevice,
    EnableInterrupts,
    ApplySystemConfig,
}

/// Mock system configuration; records calls in order.
#[derive(Debug)]
pub struct MockSystem {
    log: [Option<SystemCall>; LOG_CAPACITY],
    len: usize,
    config_failure: Option<HwStatus>,
}

impl MockSystem {
    pub const fn new() -> Self {
        Self {
            log: [None; LOG_CAPACITY],
            len: 0,
            config_failure: None,
        }
    }

    /// Make `apply_system_config` fail with `status`.
    pub fn fail_system_config(&mut self, status: HwStatus) {
        self.config_failure = Some(status);
    }

    /// Recorded calls, oldest first.
    pub fn calls(&self) -> impl Iterator<Item = SystemCall> + '_ {
        self.log[..self.len].iter().flatten().copied()
    }

    pub fn count(&self, call: SystemCall) -> usize {
        self.calls().filter(|c| *c == call).count()
    }

    fn record(&mut self, call: SystemCall) {
        if self.len < LOG_CAPACITY {
            self.log[self.len] = Some(call);
            self.len += 1;
        }
    }
}

impl Default for MockSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemControl for MockSystem {
    fn init_clocks(&mut self) {
        self.record(SystemCall::InitClocks);
    }

    fn init_secure_mailbox(&mut self) {
        self.record(SystemCall::InitSecureMailbox);
    }

    fn configure_device(&mut self) {
        self.record(SystemCall::ConfigureDevice);
    }

    fn apply_system_config(&mut self) -> Result<(), HwStatus> {
        self.record(SystemCall::ApplySystemConfig);
        match self.config_failure {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }

    fn enable_interrupts(&mut self) {
        self.record(SystemCall::EnableInterrupts);
    }
}
