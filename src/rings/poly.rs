/// An element of `Z_m[x]/(x^n + 1)` with a runtime degree `n`.
///
/// Coefficients are stored canonically in `[0, m)`, lowest degree first.
/// The same type represents ciphertext-domain elements (`m = q`) and
/// plaintexts (`m = t`); [`Rq::lift`] moves an element between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rq {
    pub(crate) coeffs: Vec<u64>,
    pub(crate) modulus: u64,
}

impl Rq {
    /// The zero element of degree `degree`.
    pub fn zero(degree: usize, modulus: u64) -> Self {
        assert!(modulus > 0, "Rq::zero: modulus must be positive");
        Self {
            coeffs: vec![0; degree],
            modulus,
        }
    }

    /// Builds an element from unsigned coefficients, reducing each into
    /// `[0, modulus)`. The degree is `coeffs.len()`.
    pub fn from_coeffs(coeffs: &[u64], modulus: u64) -> Self {
        assert!(modulus > 0, "Rq::from_coeffs: modulus must be positive");
        Self {
            coeffs: coeffs.iter().map(|&c| c % modulus).collect(),
            modulus,
        }
    }

    /// Builds an element from signed coefficients.
    pub fn from_signed(coeffs: &[i64], modulus: u64) -> Self {
        assert!(modulus > 0, "Rq::from_signed: modulus must be positive");
        let m = modulus as i128;
        Self {
            coeffs: coeffs
                .iter()
                .map(|&c| (c as i128).rem_euclid(m) as u64)
                .collect(),
            modulus,
        }
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len()
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn coeffs(&self) -> &[u64] {
        &self.coeffs
    }

    /// Coefficients lifted into `(-m/2, m/2]`.
    pub fn centered(&self) -> Vec<i64> {
        let half = self.modulus / 2;
        self.coeffs
            .iter()
            .map(|&c| {
                if c > half {
                    -((self.modulus - c) as i64)
                } else {
                    c as i64
                }
            })
            .collect()
    }

    /// Reinterprets the centered representative of every coefficient modulo
    /// `modulus`.
    pub fn lift(&self, modulus: u64) -> Self {
        Self::from_signed(&self.centered(), modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_coeffs_reduces_into_range() {
        let poly = Rq::from_coeffs(&[0, 72, 73, 150], 73);
        assert_eq!(poly.coeffs(), &[0, 72, 0, 4]);
        assert_eq!(poly.degree(), 4);
        assert_eq!(poly.modulus(), 73);
    }

    #[test]
    fn from_signed_wraps_negatives() {
        let poly = Rq::from_signed(&[-1, -73, -74, 5], 73);
        assert_eq!(poly.coeffs(), &[72, 0, 72, 5]);
    }

    #[test]
    fn from_signed_handles_extreme_values() {
        let modulus = (1u64 << 61) - 1;
        let poly = Rq::from_signed(&[i64::MIN, i64::MAX], modulus);
        let expected_min = (i64::MIN as i128).rem_euclid(modulus as i128) as u64;
        let expected_max = (i64::MAX as i128).rem_euclid(modulus as i128) as u64;
        assert_eq!(poly.coeffs(), &[expected_min, expected_max]);
    }

    #[test]
    fn centered_uses_symmetric_range() {
        let poly = Rq::from_coeffs(&[0, 1, 2048, 2049, 4096], 4097);
        assert_eq!(poly.centered(), vec![0, 1, 2048, -2048, -1]);
    }

    #[test]
    fn lift_preserves_small_signed_values() {
        let small = Rq::from_signed(&[-3, 0, 3, 36], 73);
        let lifted = small.lift(4097);
        assert_eq!(lifted.centered(), vec![-3, 0, 3, 36]);
        assert_eq!(lifted.lift(73), small);
    }

    #[test]
    fn zero_has_requested_shape() {
        let zero = Rq::zero(16, 4097);
        assert_eq!(zero.degree(), 16);
        assert!(zero.coeffs().iter().all(|&c| c == 0));
    }

    #[test]
    #[should_panic(expected = "Rq::from_coeffs: modulus must be positive")]
    fn from_coeffs_rejects_zero_modulus() {
        let _ = Rq::from_coeffs(&[1, 2], 0);
    }
}
