use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::tile_key::TileKey;
use std::time::Duration;

/// A generated tile. Immutable once published to the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    key: TileKey,
    pixels: PixelBuffer,
    generation_time: Duration,
}

impl Tile {
    #[must_use]
    pub fn new(key: TileKey, pixels: PixelBuffer, generation_time: Duration) -> Self {
        Self {
            key,
            pixels,
            generation_time,
        }
    }

    #[must_use]
    pub fn key(&self) -> &TileKey {
        &self.key
    }

    #[must_use]
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    #[must_use]
    pub fn generation_time(&self) -> Duration {
        self.generation_time
    }
}
