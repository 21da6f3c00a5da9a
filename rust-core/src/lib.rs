//! Spectral signal-processing engine
//!
//! Complex signal vectors with a quadratic reference DFT, a recursive
//! radix-2 FFT/IFFT pair, ideal brick-wall frequency-domain filters and
//! normalized power spectra. Designed to sit underneath a waveform-serving
//! layer: every entry point is a pure function over its inputs, so
//! concurrent invocations need no coordination.

pub mod error;
pub mod filters;
pub mod signal;
pub mod spectrum;

pub use error::{Result, SpectralError};
pub use filters::{apply_filter, bin_frequency, create_filter, filter_channel, FilterSpec};
pub use signal::Signal;
pub use spectrum::{
    analyze_channel, dft, fft, inverse_fft, power_spectrum, ReadCounter, SpectrumPoint,
};
