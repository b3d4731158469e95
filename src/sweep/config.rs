use super::ConfigError;
use crate::scheme::ParameterSet;
use serde::{Deserialize, Serialize};

/// Storage width assumed for every key coefficient.
pub const DEFAULT_BITS_PER_COEFFICIENT: u64 = 8;

/// Everything a sweep needs, passed explicitly rather than read from globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Ring dimensions in sweep order.
    pub dimensions: Vec<usize>,
    pub modulus: u64,
    pub plaintext_modulus: u64,
    pub noise_std: f64,
    pub bits_per_coefficient: u64,
    /// Seeds the round RNG; `None` draws a seed from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SweepConfig {
    pub fn builder() -> SweepConfigBuilder {
        SweepConfigBuilder::new()
    }

    /// `n ∈ {128, …, 2048}`, `q = 4097`, `t = 73`, `σ = 5`.
    pub fn reference() -> Self {
        Self {
            dimensions: vec![128, 256, 512, 1024, 2048],
            modulus: 4097,
            plaintext_modulus: 73,
            noise_std: 5.0,
            bits_per_coefficient: DEFAULT_BITS_PER_COEFFICIENT,
            seed: None,
        }
    }

    /// One [`ParameterSet`] per configured dimension, in configured order.
    pub fn parameter_sets(&self) -> Vec<ParameterSet> {
        generate_parameter_sets(
            &self.dimensions,
            self.modulus,
            self.plaintext_modulus,
            self.noise_std,
        )
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::reference()
    }
}

/// Pairs each dimension with the shared moduli and noise.
///
/// Caller order is preserved and nothing is validated or adjusted here.
pub fn generate_parameter_sets(
    dimensions: &[usize],
    q: u64,
    t: u64,
    noise_std: f64,
) -> Vec<ParameterSet> {
    dimensions
        .iter()
        .map(|&n| ParameterSet::new(n, q, t, noise_std))
        .collect()
}

/// Builder for [`SweepConfig`]; unset fields fall back to the reference values.
#[derive(Debug, Default)]
pub struct SweepConfigBuilder {
    dimensions: Option<Vec<usize>>,
    modulus: Option<u64>,
    plaintext_modulus: Option<u64>,
    noise_std: Option<f64>,
    bits_per_coefficient: Option<u64>,
    seed: Option<u64>,
}

impl SweepConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimensions(mut self, dimensions: impl Into<Vec<usize>>) -> Self {
        self.dimensions = Some(dimensions.into());
        self
    }

    pub fn modulus(mut self, q: u64) -> Self {
        self.modulus = Some(q);
        self
    }

    pub fn plaintext_modulus(mut self, t: u64) -> Self {
        self.plaintext_modulus = Some(t);
        self
    }

    pub fn noise_std(mut self, std: f64) -> Self {
        self.noise_std = Some(std);
        self
    }

    pub fn bits_per_coefficient(mut self, bits: u64) -> Self {
        self.bits_per_coefficient = Some(bits);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// `t < q` is left to the primitive so that it surfaces per dimension.
    pub fn build(self) -> Result<SweepConfig, ConfigError> {
        let reference = SweepConfig::reference();
        let dimensions = self.dimensions.unwrap_or(reference.dimensions);
        if dimensions.is_empty() {
            return Err(ConfigError::EmptyDimensions);
        }
        let bits_per_coefficient = self
            .bits_per_coefficient
            .unwrap_or(reference.bits_per_coefficient);
        if bits_per_coefficient == 0 {
            return Err(ConfigError::ZeroBitsPerCoefficient);
        }

        Ok(SweepConfig {
            dimensions,
            modulus: self.modulus.unwrap_or(reference.modulus),
            plaintext_modulus: self
                .plaintext_modulus
                .unwrap_or(reference.plaintext_modulus),
            noise_std: self.noise_std.unwrap_or(reference.noise_std),
            bits_per_coefficient,
            seed: self.seed,
        })
    }
}
