//! Checked operations on top of `num_complex::Complex64`
//!
//! Addition, subtraction, multiplication, conjugation, modulus and
//! `exp(i·θ)` (`Complex64::cis`) are total and come straight from
//! `num-complex`. Division is the one partial operation: dividing by zero
//! must surface as an error, not as a silent NaN.

use num_complex::Complex64;

use crate::error::{Result, SpectralError};

/// Complex division `(a · conj(b)) / |b|²`.
///
/// Fails with [`SpectralError::DivisionByZero`] when both components of the
/// denominator are zero.
pub fn try_div(numerator: Complex64, denominator: Complex64) -> Result<Complex64> {
    let norm_sqr = denominator.norm_sqr();
    if norm_sqr == 0.0 {
        return Err(SpectralError::DivisionByZero);
    }
    Ok(numerator * denominator.conj() / norm_sqr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero() {
        let zero = Complex64::new(0.0, 0.0);
        assert_eq!(
            try_div(Complex64::new(1.0, -2.0), zero),
            Err(SpectralError::DivisionByZero)
        );
        assert_eq!(try_div(zero, zero), Err(SpectralError::DivisionByZero));
    }

    #[test]
    fn test_divide_inverts_multiply() {
        let a = Complex64::new(3.5, -1.25);
        let b = Complex64::new(-0.75, 2.0);
        let quotient = try_div(a * b, b).unwrap();
        assert!((quotient - a).norm() < 1e-12);
    }

    #[test]
    fn test_divide_by_real() {
        let quotient = try_div(Complex64::new(10.0, -6.0), Complex64::new(2.0, 0.0)).unwrap();
        assert!((quotient - Complex64::new(5.0, -3.0)).norm() < 1e-12);
    }
}
