pub mod primes;
pub mod sampling;

pub use primes::{is_prime, mod_pow, mul_mod};
pub use sampling::{gaussian_coefficients, uniform_coefficients};
