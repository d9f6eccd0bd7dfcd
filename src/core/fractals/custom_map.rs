use crate::core::data::complex::Complex;
use crate::core::fractals::escape::{EscapeLimits, EscapeRecord, iterate, smoothed};

/// One step of the custom quadratic map, `z ← z·(c + 1 + i) + c`.
#[inline]
#[must_use]
pub fn step(z: Complex, c: Complex) -> Complex {
    Complex {
        real: z.real * c.real + z.real - z.imag * c.imag - z.imag + c.real,
        imag: z.real * c.imag + z.real + z.imag * c.real + z.imag + c.imag,
    }
}

#[must_use]
pub fn escape(point: Complex, limits: EscapeLimits) -> EscapeRecord {
    let c = point;
    let orbit = iterate(point, limits, |z| step(z, c));

    smoothed(orbit, limits.max_iterations)
}
