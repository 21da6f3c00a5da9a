//! Normalized power spectrum

use crate::error::{Result, SpectralError};
use crate::signal::Signal;

/// Power spectrum of a Fourier spectrum, normalized by `1 / (Fs · N)`.
///
/// `value[k] = (Re[k]² + Im[k]²) / (Fs · N)`. The full length is returned;
/// callers interested only in the non-redundant half of a real signal's
/// spectrum take the first `N/2 + 1` entries themselves.
pub fn power_spectrum(spectrum: &Signal, sampling_frequency: f64) -> Result<Vec<f64>> {
    let n = spectrum.len();
    if n == 0 {
        return Err(SpectralError::InvalidArgument(
            "power spectrum of an empty spectrum".into(),
        ));
    }
    if sampling_frequency <= 0.0 {
        return Err(SpectralError::InvalidArgument(format!(
            "non-positive sampling frequency {}",
            sampling_frequency
        )));
    }

    let scale = 1.0 / (sampling_frequency * n as f64);
    Ok(spectrum.iter().map(|value| scale * value.norm_sqr()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::transform::{dft, fft};

    #[test]
    fn test_rejects_bad_arguments() {
        assert!(matches!(
            power_spectrum(&Signal::zeros(0), 100.0),
            Err(SpectralError::InvalidArgument(_))
        ));
        assert!(matches!(
            power_spectrum(&Signal::zeros(4), 0.0),
            Err(SpectralError::InvalidArgument(_))
        ));
        assert!(matches!(
            power_spectrum(&Signal::zeros(4), -10.0),
            Err(SpectralError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_known_spectrum() {
        // DFT of [5, 13] is [18, -8]; with Fs = 2 the normalization is 1/4
        let spectrum = dft(&Signal::from_real(&[5.0, 13.0]));
        let power = power_spectrum(&spectrum, 2.0).unwrap();
        assert_eq!(power.len(), 2);
        assert!((power[0] - 81.0).abs() < 1e-7);
        assert!((power[1] - 16.0).abs() < 1e-7);
    }

    #[test]
    fn test_dc_normalization() {
        let n = 8usize;
        let fs = 4.0;
        let spectrum = fft(&Signal::from_real(&vec![3.0; n])).unwrap();
        let power = power_spectrum(&spectrum, fs).unwrap();

        // X[0] = 3·N, so power[0] = (3·N)² / (Fs·N)
        let expected = (3.0 * n as f64).powi(2) / (fs * n as f64);
        assert!((power[0] - expected).abs() < 1e-7);
        for &value in &power[1..] {
            assert!(value.abs() < 1e-7);
        }
    }

    #[test]
    fn test_real_signal_mirror_symmetry() {
        let samples: Vec<f64> = (0..16).map(|i| (i as f64 * 0.9).sin()).collect();
        let spectrum = fft(&Signal::from_real(&samples)).unwrap();
        let power = power_spectrum(&spectrum, 16.0).unwrap();
        for k in 1..16 {
            assert!((power[k] - power[16 - k]).abs() < 1e-9);
        }
    }
}
