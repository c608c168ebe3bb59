use crate::hal::power::PowerControl;

/// Mock low-power controller; counts mode entries.
#[derive(Debug, Default)]
pub struct MockPower {
    sleeps: usize,
    deep_sleeps: usize,
}

impl MockPower {
    pub const fn new() -> Self {
        Self {
            sleeps: 0,
            deep_sleeps: 0,
        }
    }

    pub fn sleeps(&self) -> usize {
        self.sleeps
    }

    pub fn deep_sleeps(&self) -> usize {
        self.deep_sleeps
    }
}

impl PowerControl for MockPower {
    fn sleep(&mut self) {
        self.sleeps += 1;
    }

    fn deep_sleep(&mut self) {
        self.deep_sleeps += 1;
    }
}
