use super::keys::{PublicKey, SecretKey};
use super::{KeyPair, ParameterSet, PrimitiveError, PrimitiveResult, RlwePrimitive};
use crate::Rq;
use crate::math::{gaussian_coefficients, is_prime, uniform_coefficients};
use log::warn;
use rand::Rng;

/// A two-element RLWE ciphertext `(c0, c1)` over `Z_q`.
#[derive(Debug, Clone)]
pub struct Ciphertext {
    pub c0: Rq,
    pub c1: Rq,
}

/// Textbook BGV-style RLWE over `Z_q[x]/(x^n + 1)` with plaintexts in `Z_t`.
///
/// - keygen: `a0 = -(a1·s + t·e)`
/// - encrypt: `c0 = a0·e0 + t·e2 + m`, `c1 = a1·e0 + t·e1`
/// - decrypt: `m = (c0 + c1·s) mod t`, taken from the centered lift in `Z_q`
///
/// Decryption is correct while the accumulated noise `t·(e2 + e1·s - e·e0)`
/// stays below `q/2`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextbookRlwe;

impl TextbookRlwe {
    pub fn new() -> Self {
        Self
    }

    fn validate(params: &ParameterSet) -> PrimitiveResult<()> {
        if params.n < 2 || !params.n.is_power_of_two() {
            return Err(PrimitiveError::UnsupportedDimension { n: params.n });
        }
        if params.q < 3 {
            return Err(PrimitiveError::InvalidModulus { q: params.q });
        }
        if params.t < 2 {
            return Err(PrimitiveError::InvalidPlaintextModulus { t: params.t });
        }
        if params.t >= params.q {
            return Err(PrimitiveError::PlaintextModulusTooLarge {
                t: params.t,
                q: params.q,
            });
        }
        if !(params.noise_std.is_finite() && params.noise_std > 0.0) {
            return Err(PrimitiveError::InvalidNoise {
                std: params.noise_std,
            });
        }
        if !is_prime(params.q) {
            warn!("modulus q = {} is not prime", params.q);
        }
        Ok(())
    }

    fn noise<R: Rng + ?Sized>(params: &ParameterSet, rng: &mut R) -> Rq {
        let coeffs = gaussian_coefficients(params.n, params.noise_std, params.q, rng);
        Rq { coeffs, modulus: params.q }
    }

    fn ensure_shape(poly: &Rq, degree: usize, modulus: u64) -> PrimitiveResult<()> {
        if poly.degree() != degree || poly.modulus() != modulus {
            return Err(PrimitiveError::Mismatch {
                expected_degree: degree,
                actual_degree: poly.degree(),
                expected_modulus: modulus,
                actual_modulus: poly.modulus(),
            });
        }
        Ok(())
    }
}

impl RlwePrimitive for TextbookRlwe {
    type SecretKey = SecretKey;
    type PublicKey = PublicKey;
    type Message = Rq;
    type Ciphertext = Ciphertext;

    fn generate_keys<R: Rng + ?Sized>(
        &self,
        params: &ParameterSet,
        rng: &mut R,
    ) -> PrimitiveResult<KeyPair<SecretKey, PublicKey>> {
        Self::validate(params)?;

        let s = Self::noise(params, rng);
        let mut te = Self::noise(params, rng);
        te *= params.t;
        let a1 = Rq {
            coeffs: uniform_coefficients(params.n, params.q, rng),
            modulus: params.q,
        };

        // a0 = -(a1 * s + t * e)
        let mut a1s = a1.clone();
        a1s *= &s;
        a1s += &te;
        let a0 = -a1s;

        Ok(KeyPair {
            secret: SecretKey { s, params: *params },
            public: PublicKey {
                a0,
                a1,
                params: *params,
            },
        })
    }

    fn message_from_coeffs(&self, coeffs: &[u64], modulus: u64) -> Rq {
        Rq::from_coeffs(coeffs, modulus)
    }

    fn encrypt<R: Rng + ?Sized>(
        &self,
        message: &Rq,
        public_key: &PublicKey,
        rng: &mut R,
    ) -> PrimitiveResult<Ciphertext> {
        let params = &public_key.params;
        Self::ensure_shape(message, params.n, params.t)?;

        let e0 = Self::noise(params, rng);
        let mut te1 = Self::noise(params, rng);
        te1 *= params.t;
        let mut te2 = Self::noise(params, rng);
        te2 *= params.t;

        // c0 = a0 * e0 + t * e2 + m
        let mut c0 = public_key.a0.clone();
        c0 *= &e0;
        c0 += &te2;
        c0 += &message.lift(params.q);

        // c1 = a1 * e0 + t * e1
        let mut c1 = public_key.a1.clone();
        c1 *= &e0;
        c1 += &te1;

        Ok(Ciphertext { c0, c1 })
    }

    fn decrypt(
        &self,
        ciphertext: &Ciphertext,
        secret_key: &SecretKey,
    ) -> PrimitiveResult<Rq> {
        let params = &secret_key.params;
        Self::ensure_shape(&ciphertext.c0, params.n, params.q)?;
        Self::ensure_shape(&ciphertext.c1, params.n, params.q)?;

        // m = c0 + c1 * s
        let mut m = ciphertext.c1.clone();
        m *= &secret_key.s;
        m += &ciphertext.c0;

        Ok(m.lift(params.t))
    }
}
