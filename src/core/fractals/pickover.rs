use crate::core::data::complex::Complex;
use crate::core::fractals::escape::{EscapeLimits, EscapeRecord};

/// Starting trap distance, larger than any distance an orbit reports
/// before bailout.
const INITIAL_TRAP_DISTANCE: f64 = 1_000_000.0;

/// Scales the trap distance into the colour map's input range.
pub const TRAP_DISTANCE_SCALE: f64 = 100.0;

/// Mandelbrot orbit coloured by how close it comes to either axis.
///
/// `raw_iter` carries `min(|Re z|, |Im z|) * 100` over the visited orbit
/// rather than an iteration count.
#[must_use]
pub fn escape(point: Complex, limits: EscapeLimits) -> EscapeRecord {
    let c = point;
    let mut z = point;
    let mut trap_distance = INITIAL_TRAP_DISTANCE;
    let mut escaped = false;

    for _ in 0..limits.max_iterations {
        z = z * z + c;
        trap_distance = trap_distance.min(z.real.abs()).min(z.imag.abs());

        if z.magnitude_squared() > limits.bailout_radius_squared {
            escaped = true;
            break;
        }
    }

    EscapeRecord {
        raw_iter: trap_distance * TRAP_DISTANCE_SCALE,
        escaped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: EscapeLimits = EscapeLimits {
        max_iterations: 128,
        bailout_radius_squared: 65536.0,
    };

    #[test]
    fn origin_orbit_sits_on_the_axes() {
        let record = escape(Complex::ZERO, LIMITS);

        assert!(!record.escaped);
        assert_eq!(record.raw_iter, 0.0);
    }

    #[test]
    fn reports_trap_distance_not_iteration_count() {
        // 2 + 2i: first step gives 2 + 10i, then -94 + 42i, then escapes.
        let record = escape(Complex::new(2.0, 2.0), LIMITS);

        assert!(record.escaped);
        assert!((record.raw_iter - 200.0).abs() < 1e-9);
    }

    #[test]
    fn real_axis_orbits_have_zero_distance() {
        let record = escape(Complex::new(-1.5, 0.0), LIMITS);

        assert_eq!(record.raw_iter, 0.0);
    }
}
