use crate::core::data::complex::Complex;
use std::{error::Error, fmt};

pub const DEFAULT_MAX_ITERATIONS: u32 = 1024;
pub const DEFAULT_BAILOUT_RADIUS_SQUARED: f64 = 65536.0;

/// Lower and upper ends of the max-iteration toggle cycle.
pub const MIN_TOGGLE_ITERATIONS: u32 = 128;
pub const MAX_TOGGLE_ITERATIONS: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalParamsError {
    ZeroMaxIterations,
    InvalidBailout { bailout_radius_squared: f64 },
    NonFiniteJuliaFocus { focus: Complex },
}

impl fmt::Display for FractalParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidBailout {
                bailout_radius_squared,
            } => {
                write!(
                    f,
                    "bailout radius squared must be finite and positive, got {}",
                    bailout_radius_squared
                )
            }
            Self::NonFiniteJuliaFocus { focus } => {
                write!(
                    f,
                    "julia focus must be finite, got {} + {}i",
                    focus.real, focus.imag
                )
            }
        }
    }
}

impl Error for FractalParamsError {}

/// Session-wide iteration parameters shared by every mode.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParameters {
    max_iterations: u32,
    bailout_radius_squared: f64,
    julia_focus: Complex,
}

impl Default for FractalParameters {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bailout_radius_squared: DEFAULT_BAILOUT_RADIUS_SQUARED,
            julia_focus: Complex::ZERO,
        }
    }
}

impl FractalParameters {
    pub fn new(
        max_iterations: u32,
        bailout_radius_squared: f64,
        julia_focus: Complex,
    ) -> Result<Self, FractalParamsError> {
        let params = Self {
            max_iterations,
            bailout_radius_squared,
            julia_focus,
        };
        params.validate()?;

        Ok(params)
    }

    pub fn validate(&self) -> Result<(), FractalParamsError> {
        if self.max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        if !(self.bailout_radius_squared.is_finite() && self.bailout_radius_squared > 0.0) {
            return Err(FractalParamsError::InvalidBailout {
                bailout_radius_squared: self.bailout_radius_squared,
            });
        }

        if !self.julia_focus.is_finite() {
            return Err(FractalParamsError::NonFiniteJuliaFocus {
                focus: self.julia_focus,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn bailout_radius_squared(&self) -> f64 {
        self.bailout_radius_squared
    }

    #[must_use]
    pub fn julia_focus(&self) -> Complex {
        self.julia_focus
    }

    /// Doubles the iteration cap, wrapping back to 128 once it reaches 1024.
    pub fn toggle_max_iterations(&mut self) -> u32 {
        self.max_iterations = if self.max_iterations < MAX_TOGGLE_ITERATIONS {
            self.max_iterations * 2
        } else {
            MIN_TOGGLE_ITERATIONS
        };

        self.max_iterations
    }

    /// Returns `true` when the focus actually changed.
    pub fn set_julia_focus(&mut self, focus: Complex) -> Result<bool, FractalParamsError> {
        if !focus.is_finite() {
            return Err(FractalParamsError::NonFiniteJuliaFocus { focus });
        }

        let changed = self.julia_focus != focus;
        self.julia_focus = focus;

        Ok(changed)
    }
}
