//! Explorer configuration and its validation.

use crate::core::actions::render_frame::generation_strategy::GenerationStrategy;
use crate::core::cache::tile_cache::DEFAULT_MAX_TILES_PER_FRAME;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::fractals::params::{FractalParameters, FractalParamsError};
use crate::core::view::view_transform::{
    DEFAULT_MIN_TILES_ACROSS, ViewTransform, ViewTransformError,
};
use crate::core::view::zoom_limits::ZoomLimits;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    View(ViewTransformError),
    Fractal(FractalParamsError),
    ZeroTileBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::View(err) => write!(f, "invalid view settings: {}", err),
            Self::Fractal(err) => write!(f, "invalid fractal parameters: {}", err),
            Self::ZeroTileBudget => {
                write!(f, "at least one tile must be generated per frame")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::Fractal(err) => Some(err),
            Self::ZeroTileBudget => None,
        }
    }
}

impl From<ViewTransformError> for ConfigError {
    fn from(err: ViewTransformError) -> Self {
        Self::View(err)
    }
}

impl From<FractalParamsError> for ConfigError {
    fn from(err: FractalParamsError) -> Self {
        Self::Fractal(err)
    }
}

/// Everything needed to start an exploration session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub viewport: Viewport,
    /// Minimum number of tiles spanning the viewport's shorter axis.
    pub min_tiles_across: u32,
    /// Upper bound on tiles generated in a single frame.
    pub max_tiles_per_frame: usize,
    pub zoom_limits: ZoomLimits,
    /// View restored by "reset view".
    pub home: ViewState,
    pub fractal: FractalParameters,
    pub mode: FractalMode,
    pub generation: GenerationStrategy,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            min_tiles_across: DEFAULT_MIN_TILES_ACROSS,
            max_tiles_per_frame: DEFAULT_MAX_TILES_PER_FRAME,
            zoom_limits: ZoomLimits::default(),
            home: ViewState::default(),
            fractal: FractalParameters::default(),
            mode: FractalMode::default(),
            generation: GenerationStrategy::default(),
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.view_transform()?;
        self.fractal.validate()?;

        if self.max_tiles_per_frame == 0 {
            return Err(ConfigError::ZeroTileBudget);
        }

        Ok(())
    }

    pub(crate) fn view_transform(&self) -> Result<ViewTransform, ConfigError> {
        Ok(ViewTransform::new(
            self.viewport,
            self.min_tiles_across,
            self.home,
            self.zoom_limits,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn default_config_is_valid() {
        let config = ExplorerConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.max_tiles_per_frame, 4);
        assert_eq!(config.min_tiles_across, 8);
        assert_eq!(config.mode, FractalMode::Mandelbrot);
        assert_eq!(config.generation, GenerationStrategy::Sequential);
    }

    #[test]
    fn zero_budget_is_rejected() {
        let config = ExplorerConfig {
            max_tiles_per_frame: 0,
            ..ExplorerConfig::default()
        };

        assert_eq!(config.validate(), Err(ConfigError::ZeroTileBudget));
    }

    #[test]
    fn tiny_viewport_is_rejected_with_source() {
        let config = ExplorerConfig {
            viewport: Viewport::new(4, 4),
            ..ExplorerConfig::default()
        };

        let err = config.validate().unwrap_err();

        assert!(matches!(
            err,
            ConfigError::View(ViewTransformError::ViewportTooSmall { .. })
        ));
        assert!(err.source().is_some());
    }

    #[test]
    fn home_outside_limits_is_rejected() {
        let config = ExplorerConfig {
            home: ViewState::new(Complex::ZERO, -50),
            ..ExplorerConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::View(
                ViewTransformError::HomeOutsideZoomLimits { .. }
            ))
        ));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = ConfigError::from(FractalParamsError::ZeroMaxIterations);

        assert_eq!(
            err.to_string(),
            "invalid fractal parameters: Maximum iterations must be greater than zero"
        );
    }
}
