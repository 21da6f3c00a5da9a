//! Fourier transforms and power spectra

pub mod analysis;
pub mod metrics;
pub mod power;
pub mod transform;

pub use analysis::{analyze_channel, SpectrumPoint};
pub use metrics::ReadCounter;
pub use power::power_spectrum;
pub use transform::{dft, dft_counted, fft, fft_counted, inverse_fft, inverse_fft_counted};
