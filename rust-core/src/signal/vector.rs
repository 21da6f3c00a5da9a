//! Fixed-length vectors of complex samples
//!
//! `Signal` is the unit of data flow between every stage of the engine: raw
//! channel samples come in as a signal, transforms map signals to signals,
//! filter masks are signals.

use num_complex::Complex64;

/// An ordered, fixed-length sequence of complex samples.
///
/// The length is fixed at construction and every index is always populated,
/// with zero as the default value.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    values: Vec<Complex64>,
}

impl Signal {
    /// Create an all-zero signal of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![Complex64::new(0.0, 0.0); len],
        }
    }

    /// Create a signal from real-valued samples (imaginary parts zero).
    pub fn from_real(samples: &[f64]) -> Self {
        Self {
            values: samples.iter().map(|&r| Complex64::new(r, 0.0)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Complex64 {
        self.values[index]
    }

    pub fn set(&mut self, index: usize, value: Complex64) {
        self.values[index] = value;
    }

    /// Store a real number at `index` (imaginary part zero).
    pub fn set_real(&mut self, index: usize, value: f64) {
        self.values[index] = Complex64::new(value, 0.0);
    }

    /// Copy of this signal extended with trailing zeros to `len`.
    ///
    /// `len` must be at least the current length.
    pub fn zero_padded(&self, len: usize) -> Signal {
        assert!(len >= self.values.len());
        let mut padded = self.values.clone();
        padded.resize(len, Complex64::new(0.0, 0.0));
        Signal { values: padded }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Complex64> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.values
    }
}

impl From<Vec<Complex64>> for Signal {
    fn from(values: Vec<Complex64>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_default() {
        let signal = Signal::zeros(4);
        assert_eq!(signal.len(), 4);
        for value in signal.iter() {
            assert_eq!(*value, Complex64::new(0.0, 0.0));
        }
    }

    #[test]
    fn test_from_real() {
        let signal = Signal::from_real(&[1.5, -2.0]);
        assert_eq!(signal.get(0), Complex64::new(1.5, 0.0));
        assert_eq!(signal.get(1), Complex64::new(-2.0, 0.0));
    }

    #[test]
    fn test_zero_padded() {
        let signal = Signal::from_real(&[1.0, 2.0, 3.0]);
        let padded = signal.zero_padded(8);
        assert_eq!(padded.len(), 8);
        assert_eq!(padded.get(2), Complex64::new(3.0, 0.0));
        assert_eq!(padded.get(7), Complex64::new(0.0, 0.0));
        // padding to the same length is a plain copy
        assert_eq!(signal.zero_padded(3), signal);
    }

    #[test]
    fn test_set_real() {
        let mut signal = Signal::zeros(2);
        signal.set(0, Complex64::new(1.0, -1.0));
        signal.set_real(1, 7.0);
        assert_eq!(signal.get(0), Complex64::new(1.0, -1.0));
        assert_eq!(signal.get(1), Complex64::new(7.0, 0.0));
    }
}
