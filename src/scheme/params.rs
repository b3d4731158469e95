use serde::{Deserialize, Serialize};

/// One sweep point: a ring dimension paired with the shared moduli and noise.
///
/// `n` is the dimension of `Z_q[x]/(x^n + 1)`. Callers are expected to keep
/// `t < q`; the primitive rejects parameter sets that do not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub n: usize,
    pub q: u64,
    pub t: u64,
    pub noise_std: f64,
}

impl ParameterSet {
    pub fn new(n: usize, q: u64, t: u64, noise_std: f64) -> Self {
        Self { n, q, t, noise_std }
    }
}
