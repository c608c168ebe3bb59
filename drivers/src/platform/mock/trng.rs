use crate::error::HwStatus;
use crate::hal::rng::TrngEngine;

/// Mock TRNG engine.
///
/// Returns an incrementing word starting at the seed value, and fails every
/// call after the first `ok_calls` when a failure status is set.
#[derive(Debug)]
pub struct MockTrng {
    next: u32,
    ok_calls: usize,
    failure: Option<HwStatus>,
    calls: usize,
    last_args: Option<(u32, u32, u32)>,
}

impl MockTrng {
    pub const fn succeeding(first: u32) -> Self {
        Self {
            next: first,
            ok_calls: usize::MAX,
            failure: None,
            calls: 0,
            last_args: None,
        }
    }

    pub const fn failing(status: HwStatus) -> Self {
        Self::failing_after(0, 0, status)
    }

    pub const fn failing_after(ok_calls: usize, first: u32, status: HwStatus) -> Self {
        Self {
            next: first,
            ok_calls,
            failure: Some(status),
            calls: 0,
            last_args: None,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    /// `(garo_poly, firo_poly, bits)` of the last call.
    pub fn last_args(&self) -> Option<(u32, u32, u32)> {
        self.last_args
    }
}

impl TrngEngine for MockTrng {
    fn generate(&mut self, garo_poly: u32, firo_poly: u32, bits: u32) -> Result<u32, HwStatus> {
        self.calls += 1;
        self.last_args = Some((garo_poly, firo_poly, bits));
        match self.failure {
            Some(status) if self.calls > self.ok_calls => Err(status),
            _ => {
                let value = self.next;
                self.next = self.next.wrapping_add(1);
                Ok(value)
            }
        }
    }
}
