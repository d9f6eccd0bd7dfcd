use crate::core::data::complex::Complex;
use crate::core::fractals::escape::{EscapeLimits, EscapeRecord, iterate, smoothed};

/// `z ← z² + focus`, seeded at the pixel.
#[must_use]
pub fn escape(point: Complex, focus: Complex, limits: EscapeLimits) -> EscapeRecord {
    let orbit = iterate(point, limits, |z| z * z + focus);

    smoothed(orbit, limits.max_iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: EscapeLimits = EscapeLimits {
        max_iterations: 256,
        bailout_radius_squared: 65536.0,
    };

    #[test]
    fn origin_is_bounded_for_zero_focus() {
        let record = escape(Complex::ZERO, Complex::ZERO, LIMITS);

        assert!(!record.escaped);
        assert_eq!(record.raw_iter, 256.0);
    }

    #[test]
    fn unit_circle_boundary_for_zero_focus() {
        // With c = 0 the filled Julia set is the closed unit disc.
        assert!(!escape(Complex::new(0.0, 0.99), Complex::ZERO, LIMITS).escaped);
        assert!(escape(Complex::new(0.0, 1.01), Complex::ZERO, LIMITS).escaped);
    }

    #[test]
    fn focus_changes_the_result() {
        let point = Complex::new(0.0, 0.9);

        let disc = escape(point, Complex::ZERO, LIMITS);
        let dust = escape(point, Complex::new(1.0, 1.0), LIMITS);

        assert!(!disc.escaped);
        assert!(dust.escaped);
    }
}
