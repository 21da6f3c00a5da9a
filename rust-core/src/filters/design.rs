//! Ideal brick-wall filter design
//!
//! Samples an ideal low-pass, high-pass or band-pass filter into a
//! frequency-domain mask of exact 0/1 gains.

use super::frequency::bin_frequency;
use crate::error::Result;
use crate::signal::Signal;

/// Cutoff selection for an ideal filter; `None` disables that side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterSpec {
    /// High-pass cutoff in Hz; frequencies below it are rejected.
    pub highpass_cutoff: Option<f64>,
    /// Low-pass cutoff in Hz; frequencies above it are rejected.
    pub lowpass_cutoff: Option<f64>,
}

impl FilterSpec {
    /// No filtering at all: unit gain everywhere.
    pub fn passthrough() -> Self {
        Self::default()
    }

    pub fn low_pass(cutoff: f64) -> Self {
        Self {
            lowpass_cutoff: Some(cutoff),
            ..Self::default()
        }
    }

    pub fn high_pass(cutoff: f64) -> Self {
        Self {
            highpass_cutoff: Some(cutoff),
            ..Self::default()
        }
    }

    pub fn band_pass(highpass_cutoff: f64, lowpass_cutoff: f64) -> Self {
        Self {
            highpass_cutoff: Some(highpass_cutoff),
            lowpass_cutoff: Some(lowpass_cutoff),
        }
    }
}

/// Sample an ideal filter into a length-`n` frequency-domain mask.
///
/// Gains are exactly 0 or 1, decided on the absolute value of each bin's
/// frequency. Band-pass edges are inclusive on both sides; single-sided
/// cutoffs are strict. With both cutoffs set and
/// `highpass_cutoff > lowpass_cutoff` the pass-band is empty and the whole
/// mask is zero (not an error).
pub fn create_filter(n: usize, sampling_frequency: f64, spec: &FilterSpec) -> Result<Signal> {
    let mut mask = Signal::zeros(n);

    match (spec.highpass_cutoff, spec.lowpass_cutoff) {
        (None, None) => {
            for k in 0..n {
                mask.set_real(k, 1.0);
            }
        }
        (Some(highpass), Some(lowpass)) => {
            if highpass <= lowpass {
                for k in 0..n {
                    let f = bin_frequency(k, n, sampling_frequency)?.abs();
                    mask.set_real(k, if highpass <= f && f <= lowpass { 1.0 } else { 0.0 });
                }
            }
            // highpass > lowpass: empty pass-band, mask stays all zero
        }
        (Some(highpass), None) => {
            for k in 0..n {
                let f = bin_frequency(k, n, sampling_frequency)?.abs();
                mask.set_real(k, if f > highpass { 1.0 } else { 0.0 });
            }
        }
        (None, Some(lowpass)) => {
            for k in 0..n {
                let f = bin_frequency(k, n, sampling_frequency)?.abs();
                mask.set_real(k, if f < lowpass { 1.0 } else { 0.0 });
            }
        }
    }

    Ok(mask)
}
