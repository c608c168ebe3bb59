//! True random number generator contract.

use crate::error::HwStatus;

/// Hardware TRNG engine.
///
/// Each implementor is one independent hardware instance. Nothing here
/// locks, so one instance must not be driven from two contexts at once.
pub trait TrngEngine {
    /// Run the ring-oscillator generator once.
    ///
    /// - `garo_poly`: Galois ring oscillator feedback polynomial
    /// - `firo_poly`: Fibonacci ring oscillator feedback polynomial
    /// - `bits`: number of output bits, at most 32
    fn generate(&mut self, garo_poly: u32, firo_poly: u32, bits: u32) -> Result<u32, HwStatus>;
}
