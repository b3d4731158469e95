//! Size and security figures reported per round.
//!
//! Both are coarse by construction. The security figure is `⌊n · log2 q⌋`,
//! a trend indicator rather than a lattice-reduction estimate.

/// Ring elements in one key pair: `a0`, `a1` and `s`.
pub const KEY_RING_ELEMENTS: u64 = 3;

/// `(2n + n) · bits_per_coefficient`.
pub fn key_size_bits(n: usize, bits_per_coefficient: u64) -> u64 {
    KEY_RING_ELEMENTS * n as u64 * bits_per_coefficient
}

/// `⌊n · log2 q⌋`.
pub fn estimated_security_bits(n: usize, q: u64) -> u64 {
    (n as f64 * (q as f64).log2()).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn key_size_for_256() {
        assert_eq!(key_size_bits(256, 8), 6144);
        assert_eq!(key_size_bits(2048, 8), 49152);
    }

    #[test]
    fn security_for_reference_modulus() {
        assert_eq!(estimated_security_bits(1024, 4097), 12288);
        assert_eq!(estimated_security_bits(128, 4097), 1536);
        assert_eq!(estimated_security_bits(2048, 4097), 24576);
    }

    #[test]
    fn security_truncates_toward_zero() {
        // 3 * log2(3) = 4.754...
        assert_eq!(estimated_security_bits(3, 3), 4);
        assert_eq!(estimated_security_bits(4, 1 << 10), 40);
    }

    proptest! {
        #[test]
        fn security_grows_with_dimension(
            log_n in 1u32..15,
            q in 3u64..(1 << 40),
        ) {
            let n = 1usize << log_n;
            prop_assert!(
                estimated_security_bits(2 * n, q) > estimated_security_bits(n, q)
            );
        }

        #[test]
        fn key_size_is_linear_in_dimension(n in 1usize..1 << 16, bits in 1u64..64) {
            prop_assert_eq!(key_size_bits(n, bits), 3 * n as u64 * bits);
        }
    }
}
