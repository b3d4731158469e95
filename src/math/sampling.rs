use rand::Rng;
use rand_distr::{Distribution, Normal, uniform::Uniform};

/// Samples `degree` uniform integer coefficients in `[0, max_value)`.
///
/// # Panics
///
/// Panics if `max_value == 0`.
pub fn uniform_coefficients<R: Rng + ?Sized>(
    degree: usize,
    max_value: u64,
    rng: &mut R,
) -> Vec<u64> {
    let distribution = Uniform::new(0, max_value).unwrap_or_else(|_| {
        panic!(
            "uniform_coefficients: invalid range [0, {max_value}), \
            max_value must be positive"
        )
    });
    (0..degree).map(|_| distribution.sample(rng)).collect()
}

/// Samples `degree` rounded Gaussian integers and maps them into
/// `[0, max_value)`.
///
/// # Panics
///
/// Panics if `std_dev` is not finite and positive, or if `max_value == 0`.
pub fn gaussian_coefficients<R: Rng + ?Sized>(
    degree: usize,
    std_dev: f64,
    max_value: u64,
    rng: &mut R,
) -> Vec<u64> {
    assert!(
        std_dev.is_finite() && std_dev > 0.0,
        "gaussian_coefficients: std_dev must be finite and positive"
    );
    assert!(
        max_value > 0,
        "gaussian_coefficients: max_value must be positive"
    );
    let normal = match Normal::new(0.0, std_dev) {
        Ok(normal) => normal,
        Err(err) => panic!("gaussian_coefficients: {err}"),
    };

    (0..degree)
        .map(|_| {
            let noise_int = normal.sample(rng).round() as i64;
            if noise_int < 0 {
                let abs_val = noise_int.unsigned_abs() % max_value;
                if abs_val == 0 { 0 } else { max_value - abs_val }
            } else {
                (noise_int as u64) % max_value
            }
        })
        .collect()
}
