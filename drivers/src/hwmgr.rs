//! Hardware resource manager.
//!
//! Tracks which blocks and channels are claimed so two drivers cannot bind
//! the same hardware. One bit per resource, grouped by [`ResourceKind`].

use crate::error::HwStatus;
use crate::pinmap::{ResourceDescriptor, ResourceKind};

const WORDS_PER_KIND: usize = 4;
const BITS_PER_KIND: usize = WORDS_PER_KIND * 32;

/// Channels per block for each resource kind.
const fn channels_per_block(kind: ResourceKind) -> usize {
    match kind {
        ResourceKind::Gpio => 8,
        ResourceKind::Tcpwm => 32,
        ResourceKind::Scb | ResourceKind::Crypto => 1,
    }
}

fn bit_index(res: &ResourceDescriptor) -> Result<usize, HwStatus> {
    let per_block = channels_per_block(res.kind);
    let channel = res.channel as usize;
    if channel >= per_block {
        return Err(HwStatus::HWMGR_INVALID);
    }
    let bit = res.block as usize * per_block + channel;
    if bit < BITS_PER_KIND {
        Ok(bit)
    } else {
        Err(HwStatus::HWMGR_INVALID)
    }
}

/// Reservation bitmap for every hardware resource on the device.
#[derive(Debug)]
pub struct ResourceTracker {
    used: [[u32; WORDS_PER_KIND]; ResourceKind::COUNT],
    initialized: bool,
}

impl ResourceTracker {
    pub const fn new() -> Self {
        Self {
            used: [[0; WORDS_PER_KIND]; ResourceKind::COUNT],
            initialized: false,
        }
    }

    /// Clear every reservation and accept new ones.
    pub fn init(&mut self) {
        self.used = [[0; WORDS_PER_KIND]; ResourceKind::COUNT];
        self.initialized = true;
        log::debug!("hwmgr: initialised");
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Claim `res`.
    pub fn reserve(&mut self, res: &ResourceDescriptor) -> Result<(), HwStatus> {
        if !self.initialized {
            return Err(HwStatus::HWMGR_UNINITIALIZED);
        }
        let bit = bit_index(res)?;
        let word = &mut self.used[res.kind.index()][bit / 32];
        let mask = 1u32 << (bit % 32);
        if *word & mask != 0 {
            return Err(HwStatus::HWMGR_IN_USE);
        }
        *word |= mask;
        Ok(())
    }

    /// Release `res`. Releasing a free resource is a no-op.
    pub fn free(&mut self, res: &ResourceDescriptor) {
        if let Ok(bit) = bit_index(res) {
            self.used[res.kind.index()][bit / 32] &= !(1u32 << (bit % 32));
        }
    }

    pub fn is_reserved(&self, res: &ResourceDescriptor) -> bool {
        match bit_index(res) {
            Ok(bit) => self.used[res.kind.index()][bit / 32] & (1u32 << (bit % 32)) != 0,
            Err(_) => false,
        }
    }
}

impl Default for ResourceTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pinmap::PinName;

    #[test]
    fn reserve_requires_init() {
        let mut hwmgr = ResourceTracker::new();
        let res = ResourceDescriptor::gpio(PinName::new(0, 3));
        assert_eq!(hwmgr.reserve(&res), Err(HwStatus::HWMGR_UNINITIALIZED));
        hwmgr.init();
        assert_eq!(hwmgr.reserve(&res), Ok(()));
    }

    #[test]
    fn double_reserve_is_rejected_until_freed() {
        let mut hwmgr = ResourceTracker::new();
        hwmgr.init();
        let res = ResourceDescriptor::gpio(PinName::new(13, 7));
        hwmgr.reserve(&res).unwrap();
        assert!(hwmgr.is_reserved(&res));
        assert_eq!(hwmgr.reserve(&res), Err(HwStatus::HWMGR_IN_USE));
        hwmgr.free(&res);
        assert!(!hwmgr.is_reserved(&res));
        assert_eq!(hwmgr.reserve(&res), Ok(()));
    }

    #[test]
    fn kinds_do_not_alias() {
        let mut hwmgr = ResourceTracker::new();
        hwmgr.init();
        let gpio = ResourceDescriptor::new(ResourceKind::Gpio, 0, 0);
        let scb = ResourceDescriptor::new(ResourceKind::Scb, 0, 0);
        hwmgr.reserve(&gpio).unwrap();
        assert!(!hwmgr.is_reserved(&scb));
        hwmgr.reserve(&scb).unwrap();
    }

    #[test]
    fn out_of_range_resource_is_invalid() {
        let mut hwmgr = ResourceTracker::new();
        hwmgr.init();
        let bad_channel = ResourceDescriptor::new(ResourceKind::Scb, 0, 1);
        let bad_block = ResourceDescriptor::new(ResourceKind::Tcpwm, 4, 0);
        assert_eq!(hwmgr.reserve(&bad_channel), Err(HwStatus::HWMGR_INVALID));
        assert_eq!(hwmgr.reserve(&bad_block), Err(HwStatus::HWMGR_INVALID));
    }

    #[test]
    fn init_clears_reservations() {
        let mut hwmgr = ResourceTracker::new();
        hwmgr.init();
        let res = ResourceDescriptor::new(ResourceKind::Crypto, 0, 0);
        hwmgr.reserve(&res).unwrap();
        hwmgr.init();
        assert!(!hwmgr.is_reserved(&res));
    }
}
