//! Primality checks for sweep moduli.
//!
//! Deterministic Miller-Rabin over `u64`: `n - 1` is written as `d * 2^r`,
//! and each fixed base must either hit `1`/`n - 1` on `a^d` or reach `n - 1`
//! through repeated squaring. A base that does neither witnesses a composite.
//!
//! Reference:
//! https://en.wikipedia.org/wiki/Miller%E2%80%93Rabin_primality_test

// Deterministic for every n < 3.3e24, which covers the whole u64 range.
const MILLER_RABIN_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// `(a * b) mod modulus` through a `u128` intermediate.
#[inline]
pub fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "mul_mod: modulus must be positive");
    ((a as u128 * b as u128) % modulus as u128) as u64
}

/// `base^exp mod modulus` by square-and-multiply.
pub fn mod_pow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "mod_pow: modulus must be positive");
    if modulus == 1 {
        return 0;
    }
    let mut acc = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    acc
}

/// Splits `n` into `(odd_part, twos)` with `n = odd_part * 2^twos`.
fn split_twos(n: u64) -> (u64, u32) {
    let twos = n.trailing_zeros();
    (n >> twos, twos)
}

/// Returns `true` if `n` is prime.
pub fn is_prime(n: u64) -> bool {
    match n {
        0 | 1 => return false,
        2 | 3 => return true,
        _ if n & 1 == 0 => return false,
        _ => {}
    }

    let (d, r) = split_twos(n - 1);
    'bases: for &a in MILLER_RABIN_BASES.iter() {
        if a >= n {
            continue;
        }
        let mut x = mod_pow(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..r {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'bases;
            }
        }
        return false;
    }
    true
}
