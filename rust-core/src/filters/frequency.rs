//! Bin-index to frequency mapping

use crate::error::{Result, SpectralError};

/// Frequency in Hz associated with bin `k` of a length-`n` spectrum sampled
/// at `sampling_frequency`.
///
/// Bins up to and including `n/2` carry the non-negative frequencies from 0
/// to Nyquist; bins above `n/2` carry the aliased negative frequencies of
/// the standard FFT ordering. Holds for odd `n` as well.
pub fn bin_frequency(k: usize, n: usize, sampling_frequency: f64) -> Result<f64> {
    if n == 0 {
        return Err(SpectralError::InvalidArgument(
            "zero-length spectrum".into(),
        ));
    }
    if k >= n {
        return Err(SpectralError::InvalidArgument(format!(
            "bin {} out of range for length {}",
            k, n
        )));
    }
    if sampling_frequency <= 0.0 {
        return Err(SpectralError::InvalidArgument(format!(
            "non-positive sampling frequency {}",
            sampling_frequency
        )));
    }

    if k <= n / 2 {
        Ok(k as f64 * sampling_frequency / n as f64)
    } else {
        Ok((k as f64 - n as f64) * sampling_frequency / n as f64)
    }
}
