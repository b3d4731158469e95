use super::MeasurementRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Records in sweep order, one per dimension, never reordered or averaged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    records: Vec<MeasurementRecord>,
}

/// Parallel series handed to a chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub dimensions: Vec<usize>,
    pub security_bits: Vec<u64>,
    pub encrypt_times_ms: Vec<f64>,
    pub decrypt_times_ms: Vec<f64>,
}

impl SweepReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MeasurementRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn dimensions(&self) -> Vec<usize> {
        self.column(|r| r.n)
    }

    pub fn encrypt_times_ms(&self) -> Vec<f64> {
        self.column(|r| r.encrypt_time_ms)
    }

    pub fn decrypt_times_ms(&self) -> Vec<f64> {
        self.column(|r| r.decrypt_time_ms)
    }

    pub fn key_size_bits(&self) -> Vec<u64> {
        self.column(|r| r.key_size_bits)
    }

    pub fn security_bits(&self) -> Vec<u64> {
        self.column(|r| r.estimated_security_bits)
    }

    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            dimensions: self.dimensions(),
            security_bits: self.security_bits(),
            encrypt_times_ms: self.encrypt_times_ms(),
            decrypt_times_ms: self.decrypt_times_ms(),
        }
    }

    fn column<T>(&self, field: impl Fn(&MeasurementRecord) -> T) -> Vec<T> {
        self.records.iter().map(field).collect()
    }
}

impl From<Vec<MeasurementRecord>> for SweepReport {
    fn from(records: Vec<MeasurementRecord>) -> Self {
        Self { records }
    }
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "n\tencrypt_time_ms\tdecrypt_time_ms\tkey_size_bits\testimated_security_bits"
        )?;
        for r in &self.records {
            writeln!(
                f,
                "{}\t{:.2}\t{:.2}\t{}\t{}",
                r.n,
                r.encrypt_time_ms,
                r.decrypt_time_ms,
                r.key_size_bits,
                r.estimated_security_bits
            )?;
        }
        Ok(())
    }
}
