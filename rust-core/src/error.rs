//! Error taxonomy shared by the whole engine

use thiserror::Error;

/// Failure modes of the spectral engine.
///
/// Every error is local, synchronous and non-recoverable here: the caller
/// decides what to do (a web layer would typically map these to a
/// client-error response).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectralError {
    #[error("signal length {0} is not a power of two")]
    InvalidLength(usize),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("complex division by a zero denominator")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, SpectralError>;
