use serde::{Deserialize, Serialize};

/// One sweep point's timings, key size and security figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRecord {
    pub n: usize,
    pub encrypt_time_ms: f64,
    pub decrypt_time_ms: f64,
    pub key_size_bits: u64,
    pub estimated_security_bits: u64,
}
