use super::clock::{Clock, WallClock, as_millis_f64};
use super::estimate::{estimated_security_bits, key_size_bits};
use super::{MeasurementRecord, Stage, SweepError, SweepResult};
use crate::math::uniform_coefficients;
use crate::scheme::{ParameterSet, PrimitiveError, RlwePrimitive};
use log::debug;
use rand::Rng;

/// Executes measurement rounds against one primitive.
///
/// Every round gets its own key pair, message and ciphertext; nothing
/// carries over between rounds except the RNG stream.
#[derive(Debug, Clone)]
pub struct MeasurementRunner<P, C = WallClock> {
    primitive: P,
    clock: C,
    bits_per_coefficient: u64,
}

impl<P: RlwePrimitive> MeasurementRunner<P, WallClock> {
    pub fn with_wall_clock(primitive: P, bits_per_coefficient: u64) -> Self {
        Self::new(primitive, WallClock, bits_per_coefficient)
    }
}

impl<P, C> MeasurementRunner<P, C>
where
    P: RlwePrimitive,
    C: Clock,
{
    pub fn new(primitive: P, clock: C, bits_per_coefficient: u64) -> Self {
        Self {
            primitive,
            clock,
            bits_per_coefficient,
        }
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Runs exactly one round for `params`.
    ///
    /// Only the encrypt and decrypt calls are inside the timed brackets;
    /// key generation and message sampling are not.
    pub fn run_round<R: Rng + ?Sized>(
        &self,
        params: &ParameterSet,
        rng: &mut R,
    ) -> SweepResult<MeasurementRecord> {
        let n = params.n;
        let invalid = |source| SweepError::InvalidParameterSet { n, source };

        // Message sampling needs a non-empty range, whatever the primitive accepts.
        if params.t == 0 {
            return Err(invalid(PrimitiveError::InvalidPlaintextModulus { t: 0 }));
        }
        let keys = self.primitive.generate_keys(params, rng).map_err(invalid)?;

        let coeffs = uniform_coefficients(n, params.t, rng);
        let message = self.primitive.message_from_coeffs(&coeffs, params.t);

        let (ciphertext, encrypt_time) = self
            .clock
            .time(|| self.primitive.encrypt(&message, &keys.public, &mut *rng));
        let ciphertext = ciphertext.map_err(|source| SweepError::MeasurementFailure {
            n,
            stage: Stage::Encrypt,
            source,
        })?;

        let (decrypted, decrypt_time) = self
            .clock
            .time(|| self.primitive.decrypt(&ciphertext, &keys.secret));
        decrypted.map_err(|source| SweepError::MeasurementFailure {
            n,
            stage: Stage::Decrypt,
            source,
        })?;

        let record = MeasurementRecord {
            n,
            encrypt_time_ms: as_millis_f64(encrypt_time),
            decrypt_time_ms: as_millis_f64(decrypt_time),
            key_size_bits: key_size_bits(n, self.bits_per_coefficient),
            estimated_security_bits: estimated_security_bits(n, params.q),
        };
        debug!(
            "n = {}: encrypt {:.3} ms, decrypt {:.3} ms",
            n, record.encrypt_time_ms, record.decrypt_time_ms
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::TextbookRlwe;
    use crate::sweep::clock::FixedClock;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::time::Duration;

    #[test]
    fn fixed_clock_round_is_fully_deterministic() {
        let runner = MeasurementRunner::new(
            TextbookRlwe::new(),
            FixedClock(Duration::from_micros(250)),
            8,
        );
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let record = runner
            .run_round(&ParameterSet::new(256, 4097, 73, 5.0), &mut rng)
            .unwrap();

        assert_eq!(record.n, 256);
        assert_relative_eq!(record.encrypt_time_ms, 0.25);
        assert_relative_eq!(record.decrypt_time_ms, 0.25);
        assert_eq!(record.key_size_bits, 6144);
        assert_eq!(record.estimated_security_bits, 3072);
    }

    #[test]
    fn wall_clock_timings_are_non_negative() {
        let runner = MeasurementRunner::with_wall_clock(TextbookRlwe::new(), 8);
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let record = runner
            .run_round(&ParameterSet::new(128, 4097, 73, 5.0), &mut rng)
            .unwrap();
        assert!(record.encrypt_time_ms >= 0.0 && record.encrypt_time_ms.is_finite());
        assert!(record.decrypt_time_ms >= 0.0 && record.decrypt_time_ms.is_finite());
    }

    #[test]
    fn rejected_parameters_name_the_dimension() {
        let runner = MeasurementRunner::with_wall_clock(TextbookRlwe::new(), 8);
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let err = runner
            .run_round(&ParameterSet::new(512, 4097, 5000, 5.0), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            SweepError::InvalidParameterSet {
                n: 512,
                source: PrimitiveError::PlaintextModulusTooLarge { t: 5000, q: 4097 },
            }
        );
        assert_eq!(err.dimension(), 512);
    }
}
