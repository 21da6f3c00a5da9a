//! Discrete and fast Fourier transforms
//!
//! `dft` is the quadratic reference implementation; `fft` and `inverse_fft`
//! are recursive radix-2 Cooley–Tukey and require power-of-two lengths.

use std::f64::consts::PI;

use num_complex::Complex64;

use super::metrics::ReadCounter;
use crate::error::{Result, SpectralError};
use crate::signal::{try_div, Signal};

/// Discrete Fourier transform, `X[k] = Σ x[n] · exp(-2πi·k·n/N)`.
///
/// Defined for any length, including 0 and 1. Θ(N²).
pub fn dft(source: &Signal) -> Signal {
    dft_impl(source, None)
}

/// Same as [`dft`], recording every element read into `counter`.
pub fn dft_counted(source: &Signal, counter: &ReadCounter) -> Signal {
    dft_impl(source, Some(counter))
}

/// Fast Fourier transform, radix-2 Cooley–Tukey.
///
/// Lengths 0 and 1 return the input unchanged; any other length that is not
/// a power of two fails with [`SpectralError::InvalidLength`]. Θ(N·log N).
pub fn fft(source: &Signal) -> Result<Signal> {
    fft_impl(source, None)
}

/// Same as [`fft`], recording every element read into `counter`.
pub fn fft_counted(source: &Signal, counter: &ReadCounter) -> Result<Signal> {
    fft_impl(source, Some(counter))
}

/// Inverse fast Fourier transform.
///
/// Implemented through the forward FFT: conjugate, transform, divide by
/// `(N, 0)`, conjugate again. Same length contract as [`fft`].
pub fn inverse_fft(source: &Signal) -> Result<Signal> {
    inverse_fft_impl(source, None)
}

/// Same as [`inverse_fft`], recording every element read into `counter`.
pub fn inverse_fft_counted(source: &Signal, counter: &ReadCounter) -> Result<Signal> {
    inverse_fft_impl(source, Some(counter))
}

fn read(source: &Signal, index: usize, counter: Option<&ReadCounter>) -> Complex64 {
    if let Some(counter) = counter {
        counter.record();
    }
    source.get(index)
}

fn dft_impl(source: &Signal, counter: Option<&ReadCounter>) -> Signal {
    let n = source.len();
    let mut result = Signal::zeros(n);
    for k in 0..n {
        let mut sum = Complex64::new(0.0, 0.0);
        for m in 0..n {
            let angle = -2.0 * PI * (k as f64) * (m as f64) / (n as f64);
            sum += read(source, m, counter) * Complex64::cis(angle);
        }
        result.set(k, sum);
    }
    result
}

fn fft_impl(source: &Signal, counter: Option<&ReadCounter>) -> Result<Signal> {
    let n = source.len();
    if n <= 1 {
        return Ok(source.clone());
    }
    if !n.is_power_of_two() {
        return Err(SpectralError::InvalidLength(n));
    }

    let half = n / 2;
    let mut even = Signal::zeros(half);
    let mut odd = Signal::zeros(half);
    for m in 0..half {
        even.set(m, read(source, 2 * m, counter));
        odd.set(m, read(source, 2 * m + 1, counter));
    }

    let even = fft_impl(&even, counter)?;
    let odd = fft_impl(&odd, counter)?;

    let mut result = Signal::zeros(n);
    for k in 0..half {
        let twiddle = Complex64::cis(-2.0 * PI * (k as f64) / (n as f64));
        let butterfly = read(&odd, k, counter) * twiddle;
        let even_k = read(&even, k, counter);
        result.set(k, even_k + butterfly);
        result.set(k + half, even_k - butterfly);
    }
    Ok(result)
}

fn inverse_fft_impl(source: &Signal, counter: Option<&ReadCounter>) -> Result<Signal> {
    let n = source.len();

    let mut conjugated = Signal::zeros(n);
    for i in 0..n {
        let value = read(source, i, counter).conj();
        conjugated.set(i, value);
    }

    let mut result = fft_impl(&conjugated, counter)?;

    let scale = Complex64::new(n as f64, 0.0);
    for i in 0..n {
        let value = try_div(read(&result, i, counter), scale)?;
        result.set(i, value);
    }
    for i in 0..n {
        let value = read(&result, i, counter).conj();
        result.set(i, value);
    }
    Ok(result)
}
