use thiserror::Error;

/// Failures reported by an RLWE primitive.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrimitiveError {
    #[error("ring dimension {n} is not supported (must be a power of two >= 2)")]
    UnsupportedDimension { n: usize },

    #[error("plaintext modulus {t} must be strictly less than modulus {q}")]
    PlaintextModulusTooLarge { t: u64, q: u64 },

    #[error("modulus {q} is too small")]
    InvalidModulus { q: u64 },

    #[error("plaintext modulus {t} is too small")]
    InvalidPlaintextModulus { t: u64 },

    #[error("noise standard deviation {std} must be finite and positive")]
    InvalidNoise { std: f64 },

    #[error(
        "operand mismatch: expected degree {expected_degree} mod {expected_modulus}, \
        got degree {actual_degree} mod {actual_modulus}"
    )]
    Mismatch {
        expected_degree: usize,
        actual_degree: usize,
        expected_modulus: u64,
        actual_modulus: u64,
    },
}

pub type PrimitiveResult<T> = Result<T, PrimitiveError>;
