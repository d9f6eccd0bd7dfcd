use crate::core::colour_mapping::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Iterations per unit of wave phase.
pub const ITERATIONS_PER_PHASE: f64 = 16.0;

/// Period of [`triangle_wave`] in phase units.
pub const WAVE_PERIOD: f64 = 4.0;

/// Continuous, period-4 wave with range `[0, 1]`.
///
/// Descends over `[0, 1)`, rests at 0 over `[1, 2)`, ascends over `[2, 3)`
/// and rests at 1 over `[3, 4)`.
#[must_use]
pub fn triangle_wave(t: f64) -> f64 {
    let u = t.rem_euclid(WAVE_PERIOD);

    if u < 1.0 {
        1.0 - u
    } else if u < 2.0 {
        0.0
    } else if u < 3.0 {
        u - 2.0
    } else {
        1.0
    }
}

fn channel(wave: f64) -> u8 {
    // `as` truncates toward zero and saturates NaN to 0.
    (wave * 256.0).clamp(0.0, 255.0) as u8
}

/// Cyclic grey/blue palette driven by the smoothed iteration count.
///
/// Points that reached the iteration cap are black.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TriangleWaveColourMap {}

impl TriangleWaveColourMap {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl ColourMap for TriangleWaveColourMap {
    fn map(&self, raw_iter: f64, max_iterations: u32) -> Colour {
        if raw_iter == f64::from(max_iterations) {
            return Colour::BLACK;
        }

        let theta = raw_iter / ITERATIONS_PER_PHASE;
        let grey = channel(triangle_wave(theta + 1.0));

        Colour {
            r: grey,
            g: grey,
            b: channel(triangle_wave(theta + 2.0)),
        }
    }

    fn display_name(&self) -> &str {
        "Triangle wave"
    }
}
