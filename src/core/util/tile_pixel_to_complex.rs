use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::tile_key::TileKey;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TilePixelToComplexError {
    PointOutsideTile { point: Point, tile_size: u32 },
}

impl fmt::Display for TilePixelToComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideTile { point, tile_size } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} tile",
                    point.x, point.y, tile_size, tile_size
                )
            }
        }
    }
}

impl Error for TilePixelToComplexError {}

/// Maps pixels of one tile to the complex plane.
///
/// Pixel `(px, py)` lands on `px / S * scale + focus - scale / 2`, so the
/// tile's focus sits at its central pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TilePixelMapping {
    tile_size: u32,
    scale: f64,
    origin: Complex,
}

impl TilePixelMapping {
    #[must_use]
    pub fn new(key: &TileKey, tile_size: u32) -> Self {
        let scale = key.tile_scale();
        let (focus_real, focus_imag) = key.focus();

        Self {
            tile_size,
            scale,
            origin: Complex {
                real: focus_real - scale / 2.0,
                imag: focus_imag - scale / 2.0,
            },
        }
    }

    /// Complex-plane width of a single pixel.
    #[must_use]
    pub fn pixel_extent(&self) -> f64 {
        self.scale / f64::from(self.tile_size)
    }

    pub fn to_complex(&self, pixel: Point) -> Result<Complex, TilePixelToComplexError> {
        let inside = |v: i32| v >= 0 && (v as u32) < self.tile_size;

        if !(inside(pixel.x) && inside(pixel.y)) {
            return Err(TilePixelToComplexError::PointOutsideTile {
                point: pixel,
                tile_size: self.tile_size,
            });
        }

        Ok(self.to_complex_unchecked(pixel.x as u32, pixel.y as u32))
    }

    /// As [`Self::to_complex`] for callers iterating the tile's own bounds.
    #[inline]
    #[must_use]
    pub fn to_complex_unchecked(&self, px: u32, py: u32) -> Complex {
        let size = f64::from(self.tile_size);

        Complex {
            real: f64::from(px) / size * self.scale + self.origin.real,
            imag: f64::from(py) / size * self.scale + self.origin.imag,
        }
    }
}
