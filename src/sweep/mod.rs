//! Parameter-sweep evaluation of an RLWE primitive.
//!
//! A sweep turns a [`SweepConfig`] into one [`ParameterSet`] per ring
//! dimension, runs one measurement round per set in order, and collects the
//! resulting [`MeasurementRecord`]s into a [`SweepReport`]. The first failing
//! round aborts the sweep.

pub mod chart;
pub mod clock;
pub mod config;
pub mod errors;
pub mod estimate;
pub mod record;
pub mod report;
pub mod runner;

pub use chart::{ChartSink, JsonChartSink};
pub use clock::{Clock, FixedClock, WallClock};
pub use config::{SweepConfig, SweepConfigBuilder, generate_parameter_sets};
pub use errors::{ConfigError, Stage, SweepError, SweepResult};
pub use estimate::{estimated_security_bits, key_size_bits};
pub use record::MeasurementRecord;
pub use report::{ChartSeries, SweepReport};
pub use runner::MeasurementRunner;

use crate::scheme::{ParameterSet, RlwePrimitive};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Runs every configured dimension in order.
///
/// The round RNG is seeded from `config.seed`, or from the OS when unset.
pub fn run_sweep<P, C>(
    config: &SweepConfig,
    primitive: P,
    clock: C,
) -> SweepResult<SweepReport>
where
    P: RlwePrimitive,
    C: Clock,
{
    let mut rng = match config.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_os_rng(),
    };
    let runner = MeasurementRunner::new(primitive, clock, config.bits_per_coefficient);
    run_parameter_sets(&runner, &config.parameter_sets(), &mut rng)
}

/// Runs `sets` strictly one after another with a caller-supplied RNG.
pub fn run_parameter_sets<P, C, R>(
    runner: &MeasurementRunner<P, C>,
    sets: &[ParameterSet],
    rng: &mut R,
) -> SweepResult<SweepReport>
where
    P: RlwePrimitive,
    C: Clock,
    R: Rng + ?Sized,
{
    info!("starting sweep over {} parameter sets", sets.len());
    let mut report = SweepReport::new();
    for params in sets {
        report.push(runner.run_round(params, rng)?);
    }
    info!("sweep finished with {} records", report.len());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::TextbookRlwe;
    use std::time::Duration;

    #[test]
    fn seeded_sweeps_are_reproducible() {
        let config = SweepConfig::builder()
            .dimensions([16, 32, 64])
            .seed(11)
            .build()
            .unwrap();
        let clock = FixedClock(Duration::from_millis(1));
        let first = run_sweep(&config, TextbookRlwe::new(), clock).unwrap();
        let second = run_sweep(&config, TextbookRlwe::new(), clock).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.dimensions(), vec![16, 32, 64]);
    }

    #[test]
    fn first_failure_stops_the_sweep() {
        let config = SweepConfig::builder()
            .dimensions([16, 48, 64])
            .seed(1)
            .build()
            .unwrap();
        let err = run_sweep(&config, TextbookRlwe::new(), WallClock).unwrap_err();
        assert!(matches!(err, SweepError::InvalidParameterSet { n: 48, .. }));
    }
}
