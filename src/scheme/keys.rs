//! Key material for [`TextbookRlwe`](super::TextbookRlwe).
//!
//! Secret key `s` is a Gaussian ring element; the public key is the pair
//! `(a0, a1)` with `a1` uniform and `a0 = -(a1·s + t·e)`, so that
//! `a0 + a1·s = -t·e`.
use super::ParameterSet;
use crate::Rq;

#[derive(Debug, Clone)]
pub struct SecretKey {
    pub s: Rq,
    pub params: ParameterSet,
}

#[derive(Debug, Clone)]
pub struct PublicKey {
    pub a0: Rq,
    pub a1: Rq,
    pub params: ParameterSet,
}
