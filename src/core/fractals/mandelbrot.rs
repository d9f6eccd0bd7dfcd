use crate::core::data::complex::Complex;
use crate::core::fractals::escape::{EscapeLimits, EscapeRecord, iterate, smoothed};

/// Closed-form membership test for the main cardioid and the period-2 bulb.
///
/// Points inside either region never escape, so the loop can be skipped.
#[must_use]
pub fn in_cardioid_or_bulb(c: Complex) -> bool {
    let shifted = c.real - 0.25;
    let q = shifted * shifted + c.imag * c.imag;

    if q * (q + shifted) < 0.25 * c.imag * c.imag {
        return true;
    }

    let bulb = c.real + 1.0;
    bulb * bulb + c.imag * c.imag < 0.0625
}

/// `z ← z² + c` with `c` and the seed both taken from the pixel.
#[must_use]
pub fn escape(point: Complex, limits: EscapeLimits) -> EscapeRecord {
    if in_cardioid_or_bulb(point) {
        return EscapeRecord::bounded(limits.max_iterations);
    }

    escape_unchecked(point, limits)
}

/// Same as [`escape`] without the interior shortcut.
#[must_use]
pub fn escape_unchecked(point: Complex, limits: EscapeLimits) -> EscapeRecord {
    let c = point;
    let orbit = iterate(point, limits, |z| z * z + c);

    smoothed(orbit, limits.max_iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: EscapeLimits = EscapeLimits {
        max_iterations: 1024,
        bailout_radius_squared: 65536.0,
    };

    #[test]
    fn origin_never_escapes() {
        let record = escape(Complex::ZERO, LIMITS);

        assert!(!record.escaped);
        assert_eq!(record.raw_iter, 1024.0);
    }

    #[test]
    fn origin_never_escapes_without_shortcut() {
        let record = escape_unchecked(Complex::ZERO, LIMITS);

        assert!(!record.escaped);
        assert_eq!(record.raw_iter, 1024.0);
    }

    #[test]
    fn point_outside_set_escapes_quickly() {
        let record = escape(Complex::new(1.5, 0.0), LIMITS);

        assert!(record.escaped);
        assert!(record.raw_iter < 8.0);
    }

    #[test]
    fn far_point_escapes_on_first_step() {
        let record = escape_unchecked(Complex::new(300.0, 0.0), LIMITS);

        assert!(record.escaped);
        assert!(record.raw_iter < 1.0);
    }

    #[test]
    fn shortcut_agrees_with_iteration() {
        let interior = [
            Complex::new(-0.1, 0.1),
            Complex::new(0.2, 0.0),
            Complex::new(-1.0, 0.0),
            Complex::new(-1.1, 0.1),
        ];

        for c in interior {
            assert!(in_cardioid_or_bulb(c), "{:?} should be detected", c);
            assert!(!escape_unchecked(c, LIMITS).escaped, "{:?} should stay bounded", c);
        }
    }

    #[test]
    fn shortcut_rejects_exterior_points() {
        for c in [
            Complex::new(0.5, 0.0),
            Complex::new(-2.5, 0.0),
            Complex::new(0.0, 1.5),
        ] {
            assert!(!in_cardioid_or_bulb(c));
        }
    }

    #[test]
    fn smoothing_is_continuous_for_nearby_points() {
        // Two nearby exterior points should have close smoothed counts.
        let a = escape(Complex::new(0.5, 0.5), LIMITS);
        let b = escape(Complex::new(0.5, 0.500001), LIMITS);

        assert!(a.escaped && b.escaped);
        assert!((a.raw_iter - b.raw_iter).abs() < 0.1);
    }
}
