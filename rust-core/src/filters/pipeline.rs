//! Frequency-domain filtering of time-domain signals

use log::debug;

use super::design::{create_filter, FilterSpec};
use crate::error::Result;
use crate::signal::Signal;
use crate::spectrum::transform::{fft, inverse_fft};

/// Filter a signal through an ideal frequency-domain mask.
///
/// The signal is zero-padded to the next power of two, transformed forward,
/// multiplied element-wise by the mask of [`create_filter`], transformed
/// back and cropped to its original length. Only the real component of each
/// output sample is kept; for a real-valued input and a real, conjugate-
/// symmetric mask the residual imaginary parts are numerically zero.
pub fn apply_filter(signal: &Signal, sampling_frequency: f64, spec: &FilterSpec) -> Result<Signal> {
    let n = signal.len();
    let padded_len = n.next_power_of_two();
    if padded_len != n {
        debug!("zero-padding signal of length {} to {}", n, padded_len);
    }

    let padded = signal.zero_padded(padded_len);
    let mask = create_filter(padded_len, sampling_frequency, spec)?;

    let mut spectrum = fft(&padded)?;
    for k in 0..padded_len {
        let shaped = mask.get(k) * spectrum.get(k);
        spectrum.set(k, shaped);
    }
    let filtered = inverse_fft(&spectrum)?;

    let mut result = Signal::zeros(n);
    for i in 0..n {
        result.set_real(i, filtered.get(i).re);
    }
    Ok(result)
}

/// [`apply_filter`] over raw real-valued channel samples.
pub fn filter_channel(
    samples: &[f64],
    sampling_frequency: f64,
    spec: &FilterSpec,
) -> Result<Vec<f64>> {
    let filtered = apply_filter(&Signal::from_real(samples), sampling_frequency, spec)?;
    Ok(filtered.iter().map(|value| value.re).collect())
}
