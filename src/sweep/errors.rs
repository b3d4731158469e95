use crate::scheme::PrimitiveError;
use std::fmt;
use thiserror::Error;

/// Timed primitive call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Encrypt => write!(f, "encryption"),
            Stage::Decrypt => write!(f, "decryption"),
        }
    }
}

/// Any failure terminates the sweep; `n` identifies the failing dimension.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("invalid parameter set at n = {n}: {source}")]
    InvalidParameterSet {
        n: usize,
        #[source]
        source: PrimitiveError,
    },

    #[error("{stage} failed at n = {n}: {source}")]
    MeasurementFailure {
        n: usize,
        stage: Stage,
        #[source]
        source: PrimitiveError,
    },
}

impl SweepError {
    /// Ring dimension of the round that failed.
    pub fn dimension(&self) -> usize {
        match self {
            SweepError::InvalidParameterSet { n, .. }
            | SweepError::MeasurementFailure { n, .. } => *n,
        }
    }
}

pub type SweepResult<T> = Result<T, SweepError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sweep needs at least one ring dimension")]
    EmptyDimensions,

    #[error("bits per coefficient must be positive")]
    ZeroBitsPerCoefficient,
}
