use crate::core::fractals::fractal_mode::FractalMode;

/// Identity of a cached tile.
///
/// The scale is stored as its base-2 exponent so the key stays `Eq + Hash`;
/// every field participates in equality, so a new scale or iteration cap
/// simply addresses different entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
    pub mode: FractalMode,
    pub tile_x: i64,
    pub tile_y: i64,
    pub scale_exponent: i32,
    pub max_iterations: u32,
}

impl TileKey {
    /// Side length of the tile in the complex plane.
    #[must_use]
    pub fn tile_scale(&self) -> f64 {
        2f64.powi(self.scale_exponent)
    }

    /// Complex coordinate of the tile's center.
    #[must_use]
    pub fn focus(&self) -> (f64, f64) {
        let scale = self.tile_scale();

        (self.tile_x as f64 * scale, self.tile_y as f64 * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn key(mode: FractalMode, scale_exponent: i32, max_iterations: u32) -> TileKey {
        TileKey {
            mode,
            tile_x: 3,
            tile_y: -2,
            scale_exponent,
            max_iterations,
        }
    }

    #[test]
    fn every_field_participates_in_identity() {
        let base = key(FractalMode::Mandelbrot, -2, 1024);

        let variants = [
            base,
            key(FractalMode::Julia, -2, 1024),
            key(FractalMode::Mandelbrot, -3, 1024),
            key(FractalMode::Mandelbrot, -2, 512),
            TileKey { tile_x: 4, ..base },
            TileKey { tile_y: -1, ..base },
        ];

        let unique: HashSet<TileKey> = variants.iter().copied().collect();

        assert_eq!(unique.len(), variants.len());
        assert_eq!(base, key(FractalMode::Mandelbrot, -2, 1024));
    }

    #[test]
    fn tile_scale_is_power_of_two() {
        assert_eq!(key(FractalMode::Mandelbrot, -2, 128).tile_scale(), 0.25);
        assert_eq!(key(FractalMode::Mandelbrot, 1, 128).tile_scale(), 2.0);
        assert_eq!(key(FractalMode::Mandelbrot, -45, 128).tile_scale(), 2f64.powi(-45));
    }

    #[test]
    fn focus_is_grid_coordinate_times_scale() {
        assert_eq!(key(FractalMode::Julia, -2, 128).focus(), (0.75, -0.5));
    }
}
