use crate::core::data::complex::Complex;
use crate::core::fractals::escape::{EscapeLimits, EscapeRecord, iterate, smoothed};

/// `z ← (|Re(z² + c)|, |Im(z² + c)|)` with `c` from the pixel.
#[must_use]
pub fn escape(point: Complex, limits: EscapeLimits) -> EscapeRecord {
    let c = point;
    let orbit = iterate(point, limits, |z| (z * z + c).fold_abs());

    smoothed(orbit, limits.max_iterations)
}
