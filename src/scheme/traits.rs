use super::{ParameterSet, PrimitiveResult};
use rand::Rng;

/// A freshly generated key pair, owned by a single measurement round.
#[derive(Debug, Clone)]
pub struct KeyPair<S, P> {
    pub secret: S,
    pub public: P,
}

/// Capability contract for an RLWE encryption primitive.
///
/// The sweep only ever talks to the scheme through this trait, so a test
/// double with canned outputs can stand in for real cryptography.
pub trait RlwePrimitive {
    type SecretKey;
    type PublicKey;
    type Message;
    type Ciphertext;

    /// Generates keys for `params`, rejecting parameter sets the scheme
    /// cannot instantiate.
    fn generate_keys<R: Rng + ?Sized>(
        &self,
        params: &ParameterSet,
        rng: &mut R,
    ) -> PrimitiveResult<KeyPair<Self::SecretKey, Self::PublicKey>>;

    /// Ring-element constructor used to build plaintexts.
    fn message_from_coeffs(&self, coeffs: &[u64], modulus: u64) -> Self::Message;

    fn encrypt<R: Rng + ?Sized>(
        &self,
        message: &Self::Message,
        public_key: &Self::PublicKey,
        rng: &mut R,
    ) -> PrimitiveResult<Self::Ciphertext>;

    fn decrypt(
        &self,
        ciphertext: &Self::Ciphertext,
        secret_key: &Self::SecretKey,
    ) -> PrimitiveResult<Self::Message>;
}
