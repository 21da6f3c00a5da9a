//! Channel-level power-spectrum analysis
//!
//! Glues the transform and power-spectrum stages together for a single
//! channel of raw real-valued samples, the way a waveform-serving caller
//! consumes them.

use log::debug;

use super::power::power_spectrum;
use super::transform::fft;
use crate::error::Result;
use crate::signal::Signal;

/// One bin of a channel's power spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumPoint {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Normalized power at that frequency.
    pub value: f64,
}

/// Power spectrum of one channel of raw samples.
///
/// The samples are zero-padded to the next power of two and transformed with
/// the FFT; only the first `N/2 + 1` bins are returned, since the upper half
/// of a real signal's spectrum mirrors the lower half. Frequencies are
/// `i · Fs / N` for the padded length N.
pub fn analyze_channel(samples: &[f64], sampling_frequency: f64) -> Result<Vec<SpectrumPoint>> {
    let padded_len = samples.len().next_power_of_two();
    if padded_len != samples.len() {
        debug!(
            "zero-padding channel of {} samples to {}",
            samples.len(),
            padded_len
        );
    }

    let signal = Signal::from_real(samples).zero_padded(padded_len);
    let spectrum = fft(&signal)?;
    let power = power_spectrum(&spectrum, sampling_frequency)?;

    let n = power.len();
    Ok(power
        .into_iter()
        .take(n / 2 + 1)
        .enumerate()
        .map(|(i, value)| SpectrumPoint {
            frequency: sampling_frequency / n as f64 * i as f64,
            value,
        })
        .collect())
}
