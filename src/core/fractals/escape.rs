//! Shared escape-time machinery: the bounded iteration loop, the smooth
//! colouring correction and the per-mode dispatch.

use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::fractals::params::FractalParameters;
use crate::core::fractals::{burning_ship, custom_map, julia, mandelbrot, pickover};
use std::f64::consts::LN_2;
use std::ops::ControlFlow;

/// Smallest argument passed to the outer logarithm of the smooth correction.
pub const MIN_LOG_ARGUMENT: f64 = f64::EPSILON;

/// Result of iterating a single point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeRecord {
    /// Continuous iteration count, or the orbit-trap distance for Pickover.
    pub raw_iter: f64,
    pub escaped: bool,
}

impl EscapeRecord {
    #[must_use]
    pub fn bounded(max_iterations: u32) -> Self {
        Self {
            raw_iter: f64::from(max_iterations),
            escaped: false,
        }
    }
}

/// Iteration cap and bailout threshold for one evaluation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeLimits {
    pub max_iterations: u32,
    pub bailout_radius_squared: f64,
}

impl From<&FractalParameters> for EscapeLimits {
    fn from(params: &FractalParameters) -> Self {
        Self {
            max_iterations: params.max_iterations(),
            bailout_radius_squared: params.bailout_radius_squared(),
        }
    }
}

/// How an orbit left the iteration loop.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Orbit {
    /// The step numbered `iteration` (zero based) pushed `z` past the bailout.
    Escaped { iteration: u32, z: Complex },
    Bounded { z: Complex },
}

/// Steps `z` until it passes the bailout or the iteration cap is reached.
#[inline]
pub fn iterate<F>(z0: Complex, limits: EscapeLimits, step: F) -> Orbit
where
    F: Fn(Complex) -> Complex,
{
    let outcome = (0..limits.max_iterations).try_fold(z0, |z, iteration| {
        let next = step(z);

        if next.magnitude_squared() > limits.bailout_radius_squared {
            ControlFlow::Break((iteration, next))
        } else {
            ControlFlow::Continue(next)
        }
    });

    match outcome {
        ControlFlow::Break((iteration, z)) => Orbit::Escaped { iteration, z },
        ControlFlow::Continue(z) => Orbit::Bounded { z },
    }
}

/// Fractional iteration count from the overshoot at bailout.
///
/// Falls back to the integer count when the correction is undefined.
#[must_use]
pub fn smooth_iteration_count(iteration: u32, final_modulus_squared: f64) -> f64 {
    let raw = f64::from(iteration);
    let log2_modulus = final_modulus_squared.ln() * 0.5 / LN_2;

    if !(log2_modulus.is_finite() && log2_modulus > 0.0) {
        return raw;
    }

    let correction = log2_modulus.max(MIN_LOG_ARGUMENT).log2();

    if correction.is_finite() {
        raw - correction
    } else {
        raw
    }
}

/// Turns an orbit into a smoothed escape record.
#[must_use]
pub fn smoothed(orbit: Orbit, max_iterations: u32) -> EscapeRecord {
    match orbit {
        Orbit::Escaped { iteration, z } => EscapeRecord {
            raw_iter: smooth_iteration_count(iteration, z.magnitude_squared()),
            escaped: true,
        },
        Orbit::Bounded { .. } => EscapeRecord::bounded(max_iterations),
    }
}

/// Evaluates `point` under `mode`.
#[must_use]
pub fn compute_escape(mode: FractalMode, point: Complex, params: &FractalParameters) -> EscapeRecord {
    compute_escape_with_limits(mode, point, params.julia_focus(), EscapeLimits::from(params))
}

/// Evaluates `point` under `mode` with an explicit iteration cap and bailout.
#[must_use]
pub fn compute_escape_with_limits(
    mode: FractalMode,
    point: Complex,
    julia_focus: Complex,
    limits: EscapeLimits,
) -> EscapeRecord {
    match mode {
        FractalMode::Mandelbrot => mandelbrot::escape(point, limits),
        FractalMode::Julia => julia::escape(point, julia_focus, limits),
        FractalMode::BurningShip => burning_ship::escape(point, limits),
        FractalMode::Pickover => pickover::escape(point, limits),
        FractalMode::CustomMap => custom_map::escape(point, limits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(max_iterations: u32) -> EscapeLimits {
        EscapeLimits {
            max_iterations,
            bailout_radius_squared: 65536.0,
        }
    }

    #[test]
    fn iterate_reports_zero_based_escape_step() {
        let orbit = iterate(Complex::new(1.0, 0.0), limits(10), |z| z.scale(1000.0));

        assert_eq!(
            orbit,
            Orbit::Escaped {
                iteration: 1,
                z: Complex::new(1_000_000.0, 0.0)
            }
        );
    }

    #[test]
    fn iterate_stops_at_cap() {
        let orbit = iterate(Complex::ZERO, limits(16), |z| z);

        assert_eq!(orbit, Orbit::Bounded { z: Complex::ZERO });
    }

    #[test]
    fn smooth_correction_at_exact_power() {
        // |z|² = 2^32 so log2|z| = 16 and log2(16) = 4.
        let value = smooth_iteration_count(10, 2f64.powi(32));

        assert!((value - 6.0).abs() < 1e-12);
    }

    #[test]
    fn smooth_correction_falls_back_when_undefined() {
        assert_eq!(smooth_iteration_count(7, 1.0), 7.0);
        assert_eq!(smooth_iteration_count(7, 0.5), 7.0);
        assert_eq!(smooth_iteration_count(7, 0.0), 7.0);
        assert_eq!(smooth_iteration_count(7, f64::INFINITY), 7.0);
        assert_eq!(smooth_iteration_count(7, f64::NAN), 7.0);
    }

    #[test]
    fn smoothed_bounded_orbit_reports_exact_cap() {
        let record = smoothed(Orbit::Bounded { z: Complex::ZERO }, 512);

        assert_eq!(record, EscapeRecord::bounded(512));
        assert_eq!(record.raw_iter, 512.0);
        assert!(!record.escaped);
    }

    #[test]
    fn explicit_limits_override_parameter_cap() {
        let params = FractalParameters::default();
        let record = compute_escape_with_limits(
            FractalMode::Mandelbrot,
            Complex::ZERO,
            params.julia_focus(),
            limits(128),
        );

        assert_eq!(record, EscapeRecord::bounded(128));
    }

    #[test]
    fn compute_escape_dispatches_on_mode() {
        let params = FractalParameters::default();
        let origin = Complex::ZERO;

        for mode in [
            FractalMode::Mandelbrot,
            FractalMode::Julia,
            FractalMode::BurningShip,
        ] {
            let record = compute_escape(mode, origin, &params);
            assert!(!record.escaped, "{} origin should stay bounded", mode.display_name());
            assert_eq!(record.raw_iter, 1024.0);
        }
    }
}
