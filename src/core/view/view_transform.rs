use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::view::visible_tiles::{
    TilePlacement, VisibleTiles, mirrored_offsets, quadrant_reach,
};
use crate::core::view::zoom_limits::ZoomLimits;
use std::error::Error;
use std::fmt;

pub const DEFAULT_MIN_TILES_ACROSS: u32 = 8;

/// Tile grid coordinates stay within `±2^52` at every allowed zoom level,
/// where `f64` still holds every integer exactly.
pub const MAX_TILE_COORDINATE_BITS: i32 = 52;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewTransformError {
    ZeroTilesAcross,
    ViewportTooSmall {
        viewport: Viewport,
        min_tiles_across: u32,
    },
    InvalidZoomLimits {
        limits: ZoomLimits,
    },
    HomeOutsideZoomLimits {
        zoom_level: i32,
        limits: ZoomLimits,
    },
    HomeOutsideBounds {
        center: Complex,
        max_magnitude: f64,
    },
}

impl fmt::Display for ViewTransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTilesAcross => {
                write!(f, "at least one tile must span the shorter viewport axis")
            }
            Self::ViewportTooSmall {
                viewport,
                min_tiles_across,
            } => {
                write!(
                    f,
                    "viewport {}x{} is too small for {} tiles across its shorter axis",
                    viewport.width, viewport.height, min_tiles_across
                )
            }
            Self::InvalidZoomLimits { limits } => {
                write!(
                    f,
                    "zoom limits are inverted: min {} > max {}",
                    limits.min_level, limits.max_level
                )
            }
            Self::HomeOutsideZoomLimits { zoom_level, limits } => {
                write!(
                    f,
                    "home zoom level {} is outside {}..={}",
                    zoom_level, limits.min_level, limits.max_level
                )
            }
            Self::HomeOutsideBounds {
                center,
                max_magnitude,
            } => {
                write!(
                    f,
                    "home center {} + {}i is outside ±{} on either axis",
                    center.real, center.imag, max_magnitude
                )
            }
        }
    }
}

impl Error for ViewTransformError {}

/// Pan/zoom state plus the conversions between screen pixels, tile grid
/// coordinates and the complex plane.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    state: ViewState,
    home: ViewState,
    limits: ZoomLimits,
    viewport: Viewport,
    min_tiles_across: u32,
    tile_size: u32,
    max_center_magnitude: f64,
}

impl ViewTransform {
    pub fn new(
        viewport: Viewport,
        min_tiles_across: u32,
        home: ViewState,
        limits: ZoomLimits,
    ) -> Result<Self, ViewTransformError> {
        if min_tiles_across == 0 {
            return Err(ViewTransformError::ZeroTilesAcross);
        }

        let tile_size = viewport.min_axis() / min_tiles_across;

        if tile_size == 0 {
            return Err(ViewTransformError::ViewportTooSmall {
                viewport,
                min_tiles_across,
            });
        }

        if limits.min_level > limits.max_level {
            return Err(ViewTransformError::InvalidZoomLimits { limits });
        }

        if !limits.contains(home.zoom_level) {
            return Err(ViewTransformError::HomeOutsideZoomLimits {
                zoom_level: home.zoom_level,
                limits,
            });
        }

        let deepest_exponent = scale_exponent_for(2f64.powi(limits.min_level), min_tiles_across);
        let max_center_magnitude = 2f64.powi(MAX_TILE_COORDINATE_BITS + deepest_exponent);

        if !(home.center.real.abs() <= max_center_magnitude
            && home.center.imag.abs() <= max_center_magnitude)
        {
            return Err(ViewTransformError::HomeOutsideBounds {
                center: home.center,
                max_magnitude: max_center_magnitude,
            });
        }

        Ok(Self {
            state: home,
            home,
            limits,
            viewport,
            min_tiles_across,
            tile_size,
            max_center_magnitude,
        })
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Tile side length in pixels.
    #[must_use]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Base-2 exponent of the current tile scale.
    ///
    /// Quantizes the zoom factor down to a power of two so at least
    /// `min_tiles_across` tiles span the shorter axis.
    #[must_use]
    pub fn scale_exponent(&self) -> i32 {
        scale_exponent_for(self.state.zoom_factor, self.min_tiles_across)
    }

    /// Largest `|real|` or `|imag|` the view center may take.
    ///
    /// Keeps `center / tile_scale` inside the tile grid at the deepest zoom.
    #[must_use]
    pub fn max_center_magnitude(&self) -> f64 {
        self.max_center_magnitude
    }

    #[must_use]
    pub fn tile_scale(&self) -> f64 {
        2f64.powi(self.scale_exponent())
    }

    /// Offset of a screen pixel from the view center, in complex units.
    #[must_use]
    pub fn screen_offset(&self, pixel: Point) -> Complex {
        let min_axis = f64::from(self.viewport.min_axis());
        let half_width = f64::from(self.viewport.width) / 2.0;
        let half_height = f64::from(self.viewport.height) / 2.0;

        Complex {
            real: (f64::from(pixel.x) - half_width) / min_axis * self.state.zoom_factor,
            imag: (f64::from(pixel.y) - half_height) / min_axis * self.state.zoom_factor,
        }
    }

    #[must_use]
    pub fn screen_to_complex(&self, pixel: Point) -> Complex {
        self.screen_offset(pixel) + self.state.center
    }

    /// Every tile that intersects the viewport, center tile first.
    ///
    /// Draw positions carry the sub-tile pixel offset of the center so that
    /// panning inside a tile only moves it on screen.
    #[must_use]
    pub fn visible_tiles(&self) -> VisibleTiles {
        let scale_exponent = self.scale_exponent();
        let scale = 2f64.powi(scale_exponent);
        let size = self.tile_size as i32;

        let grid_real = self.state.center.real / scale;
        let grid_imag = self.state.center.imag / scale;
        let center_tile = (grid_real.floor() as i64, grid_imag.floor() as i64);

        let offset_x = (grid_real.rem_euclid(1.0) * f64::from(self.tile_size)) as i32;
        let offset_y = (grid_imag.rem_euclid(1.0) * f64::from(self.tile_size)) as i32;

        let origin_x = (self.viewport.width as i32 - size) / 2 - offset_x;
        let origin_y = (self.viewport.height as i32 - size) / 2 - offset_y;

        let reach_x = quadrant_reach(self.viewport.width, self.tile_size);
        let reach_y = quadrant_reach(self.viewport.height, self.tile_size);

        let placements = mirrored_offsets(reach_x, reach_y)
            .map(|(dx, dy)| TilePlacement {
                tile_x: center_tile.0 + dx,
                tile_y: center_tile.1 + dy,
                draw: Point {
                    x: dx as i32 * size + origin_x,
                    y: dy as i32 * size + origin_y,
                },
            })
            .collect();

        VisibleTiles {
            scale_exponent,
            center_tile,
            placements,
        }
    }

    /// Moves the center by `delta`, clamped to [`Self::max_center_magnitude`].
    pub fn pan(&mut self, delta: Complex) {
        self.set_center(self.state.center + delta);
    }

    /// Halves the zoom factor, keeping the point under `cursor` fixed.
    ///
    /// Returns `false` without changing anything at the zoom limit.
    pub fn zoom_in(&mut self, cursor: Point) -> bool {
        let level = self.state.zoom_level - 1;

        if !self.limits.contains(level) {
            return false;
        }

        let offset = self.screen_offset(cursor);
        self.set_center(self.state.center + offset.scale(0.5));
        self.state.zoom_factor /= 2.0;
        self.state.zoom_level = level;

        true
    }

    /// Doubles the zoom factor, keeping the point under `cursor` fixed.
    pub fn zoom_out(&mut self, cursor: Point) -> bool {
        let level = self.state.zoom_level + 1;

        if !self.limits.contains(level) {
            return false;
        }

        let offset = self.screen_offset(cursor);
        self.set_center(self.state.center - offset);
        self.state.zoom_factor *= 2.0;
        self.state.zoom_level = level;

        true
    }

    pub fn reset(&mut self) {
        self.state = self.home;
    }

    fn set_center(&mut self, center: Complex) {
        let bound = self.max_center_magnitude;

        self.state.center = Complex {
            real: center.real.clamp(-bound, bound),
            imag: center.imag.clamp(-bound, bound),
        };
    }
}

fn scale_exponent_for(zoom_factor: f64, min_tiles_across: u32) -> i32 {
    (zoom_factor.log2() - f64::from(min_tiles_across).log2()).floor() as i32
}
