use crate::core::actions::generate_tile::ports::tile_generator::TileGenerator;
use crate::core::colour_mapping::ports::colour_map::ColourMap;
use crate::core::colour_mapping::triangle_wave::TriangleWaveColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::tile::Tile;
use crate::core::data::tile_key::TileKey;
use crate::core::fractals::escape::{EscapeLimits, compute_escape_with_limits};
use crate::core::fractals::params::FractalParameters;
use crate::core::util::tile_pixel_to_complex::TilePixelMapping;
use log::debug;
use std::time::Instant;

/// Renders tiles by running the key's escape-time algorithm on every pixel
/// and colouring the result.
///
/// The iteration cap comes from the key; the generator's parameters supply
/// the bailout radius and the Julia focus.
#[derive(Debug, Clone)]
pub struct FractalTileGenerator<C = TriangleWaveColourMap> {
    params: FractalParameters,
    tile_size: u32,
    colour_map: C,
}

impl FractalTileGenerator {
    #[must_use]
    pub fn new(params: FractalParameters, tile_size: u32) -> Self {
        let colour_map = TriangleWaveColourMap::new();

        Self::with_colour_map(params, tile_size, colour_map)
    }
}

impl<C: ColourMap> FractalTileGenerator<C> {
    #[must_use]
    pub fn with_colour_map(params: FractalParameters, tile_size: u32, colour_map: C) -> Self {
        Self {
            params,
            tile_size,
            colour_map,
        }
    }

    #[must_use]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    #[must_use]
    pub fn params(&self) -> &FractalParameters {
        &self.params
    }

    /// Row-major RGBA pixels for `key`.
    #[must_use]
    pub fn render_pixels(&self, key: &TileKey) -> PixelBuffer {
        let limits = EscapeLimits {
            max_iterations: key.max_iterations,
            bailout_radius_squared: self.params.bailout_radius_squared(),
        };
        let julia_focus = self.params.julia_focus();

        let size = self.tile_size;
        let mapping = TilePixelMapping::new(key, size);
        let mut pixels = PixelBuffer::new(size, size);

        for (index, rgba) in pixels
            .buffer_mut()
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .enumerate()
        {
            let px = index as u32 % size;
            let py = index as u32 / size;
            let point = mapping.to_complex_unchecked(px, py);

            let record = compute_escape_with_limits(key.mode, point, julia_focus, limits);
            let colour = self.colour_map.map(record.raw_iter, key.max_iterations);
            rgba.copy_from_slice(&colour.to_rgba());
        }

        pixels
    }
}

impl<C: ColourMap> TileGenerator for FractalTileGenerator<C> {
    fn generate(&self, key: &TileKey) -> Tile {
        let start = Instant::now();
        let pixels = self.render_pixels(key);
        let generation_time = start.elapsed();

        debug!(
            "generated {} tile ({}, {}) @2^{} x{} in {:?}",
            key.mode.display_name(),
            key.tile_x,
            key.tile_y,
            key.scale_exponent,
            key.max_iterations,
            generation_time
        );

        Tile::new(*key, pixels, generation_time)
    }
}
