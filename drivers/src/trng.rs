//! Entropy source adapter.
//!
//! Turns one run of the hardware TRNG into a 32-bit random word. The
//! adapter keeps no state between calls and never retries: a hardware
//! failure goes straight back to the caller.

use crate::error::{Error, Result};
use crate::hal::rng::TrngEngine;

/// Galois ring oscillator initial polynomial.
pub const GARO31_INITSTATE: u32 = 0x04c1_1db7;
/// Fibonacci ring oscillator initial polynomial.
pub const FIRO31_INITSTATE: u32 = 0x04c1_1db7;
/// Bits produced per run.
pub const TRNG_BITS: u32 = 32;

/// Produce one random word from `handle`.
///
/// A missing handle is a bad argument and no hardware is touched.
pub fn generate<T: TrngEngine>(handle: Option<&mut T>) -> Result<u32> {
    let engine = handle.ok_or(Error::BadArgument)?;
    engine
        .generate(GARO31_INITSTATE, FIRO31_INITSTATE, TRNG_BITS)
        .map_err(|status| {
            log::warn!("trng: {}", status);
            Error::HardwareFailure(status)
        })
}

/// Like [`generate`], writing the word into `out`.
///
/// Both `handle` and `out` must be present. `out` is left untouched on
/// failure.
pub fn generate_into<T: TrngEngine>(handle: Option<&mut T>, out: Option<&mut u32>) -> Result<()> {
    let (Some(engine), Some(out)) = (handle, out) else {
        return Err(Error::BadArgument);
    };
    *out = generate(Some(engine))?;
    Ok(())
}

/// Fill `buf` with random bytes, one hardware word per four bytes.
///
/// Returns the number of bytes written, which is `buf.len()` on success.
/// Stops at the first hardware failure.
pub fn fill_bytes<T: TrngEngine>(handle: Option<&mut T>, buf: &mut [u8]) -> Result<usize> {
    let engine = handle.ok_or(Error::BadArgument)?;
    for chunk in buf.chunks_mut(4) {
        let word = generate(Some(&mut *engine))?.to_le_bytes();
        chunk.copy_from_slice(&word[..chunk.len()]);
    }
    Ok(buf.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HwStatus;
    use crate::platform::mock::MockTrng;

    const FAIL: HwStatus = HwStatus::new(HwStatus::MODULE_TRNG, 0x01);

    #[test]
    fn absent_handle_is_bad_argument() {
        assert_eq!(generate::<MockTrng>(None), Err(Error::BadArgument));
    }

    #[test]
    fn absent_destination_skips_hardware() {
        let mut trng = MockTrng::succeeding(7);
        assert_eq!(generate_into(Some(&mut trng), None), Err(Error::BadArgument));
        assert_eq!(trng.calls(), 0);

        let mut out = 0;
        assert_eq!(
            generate_into::<MockTrng>(None, Some(&mut out)),
            Err(Error::BadArgument)
        );
    }

    #[test]
    fn success_returns_value_with_fixed_parameters() {
        let mut trng = MockTrng::succeeding(0xDEAD_BEEF);
        assert_eq!(generate(Some(&mut trng)), Ok(0xDEAD_BEEF));
        assert_eq!(
            trng.last_args(),
            Some((GARO31_INITSTATE, FIRO31_INITSTATE, TRNG_BITS))
        );

        let mut out = 0;
        generate_into(Some(&mut trng), Some(&mut out)).unwrap();
        assert_eq!(out, 0xDEAD_BEF0);
    }

    #[test]
    fn hardware_failure_is_reported_once() {
        let mut trng = MockTrng::failing(FAIL);
        assert_eq!(generate(Some(&mut trng)), Err(Error::HardwareFailure(FAIL)));
        assert_eq!(trng.calls(), 1);

        let mut out = 5;
        assert!(generate_into(Some(&mut trng), Some(&mut out)).is_err());
        assert_eq!(out, 5);
    }

    #[test]
    fn fill_bytes_covers_partial_words() {
        let mut trng = MockTrng::succeeding(0x0403_0201);
        let mut buf = [0u8; 6];
        assert_eq!(fill_bytes(Some(&mut trng), &mut buf), Ok(6));
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04, 0x02, 0x02]);
        assert_eq!(trng.calls(), 2);
    }

    #[test]
    fn fill_bytes_stops_on_failure() {
        let mut trng = MockTrng::failing_after(1, 0xFFFF_FFFF, FAIL);
        let mut buf = [0u8; 12];
        assert_eq!(
            fill_bytes(Some(&mut trng), &mut buf),
            Err(Error::HardwareFailure(FAIL))
        );
        assert_eq!(trng.calls(), 2);
        assert_eq!(&buf[..4], &[0xFF; 4]);
    }

    #[test]
    fn fill_bytes_empty_buffer_is_noop() {
        let mut trng = MockTrng::succeeding(1);
        assert_eq!(fill_bytes(Some(&mut trng), &mut []), Ok(0));
        assert_eq!(trng.calls(), 0);
    }
}
