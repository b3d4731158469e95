use super::Rq;
use std::fmt;

impl fmt::Display for Rq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Alternate (`{:#}`) prints every coefficient
        if f.alternate() {
            return self.fmt_full(f);
        }
        let num = f.precision().unwrap_or(3);
        self.fmt_truncated(f, num)
    }
}

impl Rq {
    /// First and last `num` centered coefficients.
    fn fmt_truncated(&self, f: &mut fmt::Formatter<'_>, num: usize) -> fmt::Result {
        let coeffs = self.centered();
        let len = coeffs.len();
        write!(f, "Rq<{}, {}>[", len, self.modulus)?;

        if len <= num * 2 {
            write_joined(f, &coeffs)?;
        } else {
            write_joined(f, &coeffs[..num])?;
            write!(f, ", …")?;
            for c in &coeffs[len - num..] {
                write!(f, ", {c}")?;
            }
        }
        write!(f, "]")
    }

    fn fmt_full(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rq<{}, {}>[", self.degree(), self.modulus)?;
        write_joined(f, &self.centered())?;
        write!(f, "]")
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, coeffs: &[i64]) -> fmt::Result {
    for (i, c) in coeffs.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_elements_print_in_full() {
        let poly = Rq::from_signed(&[1, -2, 3], 73);
        assert_eq!(poly.to_string(), "Rq<3, 73>[1, -2, 3]");
    }

    #[test]
    fn long_elements_are_truncated() {
        let coeffs: Vec<u64> = (0..10).collect();
        let poly = Rq::from_coeffs(&coeffs, 4097);
        assert_eq!(poly.to_string(), "Rq<10, 4097>[0, 1, 2, …, 7, 8, 9]");
        assert_eq!(format!("{poly:.1}"), "Rq<10, 4097>[0, …, 9]");
        assert_eq!(
            format!("{poly:#}"),
            "Rq<10, 4097>[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]"
        );
    }
}
