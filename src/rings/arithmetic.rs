//! In-place arithmetic for [`Rq`].
//!
//! Operands must share degree and modulus; a mismatch is a programming
//! error and panics.
use super::Rq;
use crate::math::mul_mod;
use std::ops::{AddAssign, MulAssign, Neg};

impl Rq {
    fn assert_compatible(&self, rhs: &Rq, op: &str) {
        assert_eq!(
            self.degree(),
            rhs.degree(),
            "Rq::{op}: degree mismatch {} vs {}",
            self.degree(),
            rhs.degree()
        );
        assert_eq!(
            self.modulus, rhs.modulus,
            "Rq::{op}: modulus mismatch {} vs {}",
            self.modulus, rhs.modulus
        );
    }
}

impl AddAssign<&Rq> for Rq {
    fn add_assign(&mut self, rhs: &Rq) {
        self.assert_compatible(rhs, "add_assign");
        let q = self.modulus as u128;
        for (lhs, &r) in self.coeffs.iter_mut().zip(&rhs.coeffs) {
            *lhs = ((*lhs as u128 + r as u128) % q) as u64;
        }
    }
}

impl MulAssign<&Rq> for Rq {
    /// Schoolbook product reduced by `x^n = -1`.
    fn mul_assign(&mut self, rhs: &Rq) {
        self.assert_compatible(rhs, "mul_assign");
        let n = self.degree();
        let q = self.modulus;

        // Products are reduced below q before accumulation, so n terms of
        // each sign fit comfortably in u128.
        let mut positive = vec![0u128; n];
        let mut negative = vec![0u128; n];

        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                let product = mul_mod(a, b, q) as u128;
                let k = i + j;
                if k < n {
                    positive[k] += product;
                } else {
                    negative[k - n] += product;
                }
            }
        }

        let q_wide = q as u128;
        for (k, coeff) in self.coeffs.iter_mut().enumerate() {
            let pos = positive[k] % q_wide;
            let neg = negative[k] % q_wide;
            *coeff = ((pos + q_wide - neg) % q_wide) as u64;
        }
    }
}

impl MulAssign<u64> for Rq {
    fn mul_assign(&mut self, scalar: u64) {
        let q = self.modulus;
        for coeff in &mut self.coeffs {
            *coeff = mul_mod(*coeff, scalar, q);
        }
    }
}

impl Neg for Rq {
    type Output = Rq;

    fn neg(mut self) -> Self::Output {
        let q = self.modulus;
        for coeff in &mut self.coeffs {
            *coeff = (q - *coeff) % q;
        }
        self
    }
}

impl Neg for &Rq {
    type Output = Rq;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const Q: u64 = 4097;

    fn poly_strategy(degree: usize) -> impl Strategy<Value = Rq> {
        prop::collection::vec(0..Q, degree).prop_map(|c| Rq::from_coeffs(&c, Q))
    }

    #[test]
    fn add_assign_wraps_modulus() {
        let mut a = Rq::from_coeffs(&[4096, 1, 2, 3], Q);
        let b = Rq::from_coeffs(&[1, 4096, 2, 3], Q);
        a += &b;
        assert_eq!(a.coeffs(), &[0, 0, 4, 6]);
    }

    #[test]
    fn x_to_the_n_is_minus_one() {
        // x^3 * x = x^4 = -1 in Z_q[x]/(x^4 + 1)
        let mut a = Rq::from_coeffs(&[0, 0, 0, 1], Q);
        let x = Rq::from_coeffs(&[0, 1, 0, 0], Q);
        a *= &x;
        assert_eq!(a.centered(), vec![-1, 0, 0, 0]);
    }

    #[test]
    fn small_product_matches_hand_computation() {
        // (1 + 2x)(3 + x^3) = 3 + 6x + x^3 + 2x^4 = 1 + 6x + x^3
        let mut a = Rq::from_coeffs(&[1, 2, 0, 0], Q);
        let b = Rq::from_coeffs(&[3, 0, 0, 1], Q);
        a *= &b;
        assert_eq!(a.coeffs(), &[1, 6, 0, 1]);
    }

    #[test]
    fn large_modulus_product_does_not_overflow() {
        let q = (1u64 << 61) - 1;
        let mut a = Rq::from_coeffs(&[q - 1, q - 1], q);
        let b = a.clone();
        a *= &b;
        // (-1 - x)^2 = 1 + 2x + x^2 = 2x in the ring with n = 2
        assert_eq!(a.coeffs(), &[0, 2]);
    }

    #[test]
    fn scalar_and_negation() {
        let mut a = Rq::from_coeffs(&[1, 0, 2, 4096], Q);
        a *= 73u64;
        assert_eq!(a.centered(), vec![73, 0, 146, -73]);
        let neg = -&a;
        assert_eq!(neg.centered(), vec![-73, 0, -146, 73]);
    }

    #[test]
    #[should_panic(expected = "Rq::add_assign: degree mismatch 4 vs 2")]
    fn add_assign_rejects_degree_mismatch() {
        let mut a = Rq::zero(4, Q);
        a += &Rq::zero(2, Q);
    }

    #[test]
    #[should_panic(expected = "Rq::mul_assign: modulus mismatch 4097 vs 73")]
    fn mul_assign_rejects_modulus_mismatch() {
        let mut a = Rq::zero(4, Q);
        a *= &Rq::zero(4, 73);
    }

    proptest! {
        #[test]
        fn multiplication_commutes(a in poly_strategy(8), b in poly_strategy(8)) {
            let mut ab = a.clone();
            ab *= &b;
            let mut ba = b;
            ba *= &a;
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn multiplication_distributes(
            a in poly_strategy(8),
            b in poly_strategy(8),
            c in poly_strategy(8),
        ) {
            let mut lhs = b.clone();
            lhs += &c;
            lhs *= &a;

            let mut ab = a.clone();
            ab *= &b;
            let mut ac = a;
            ac *= &c;
            ab += &ac;
            prop_assert_eq!(lhs, ab);
        }

        #[test]
        fn adding_negation_gives_zero(a in poly_strategy(16)) {
            let mut sum = a.clone();
            sum += &(-&a);
            prop_assert_eq!(sum, Rq::zero(16, Q));
        }
    }
}
