use crate::core::actions::render_frame::ports::display::DisplayPort;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// In-memory RGBA display surface the size of the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: PixelBuffer,
}

impl Canvas {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pixels: PixelBuffer::new(viewport.width, viewport.height),
        }
    }

    #[must_use]
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
}

impl DisplayPort for Canvas {
    fn begin_frame(&mut self) {
        self.pixels.fill(Colour::BLACK);
    }

    fn draw_tile(&mut self, tile: &PixelBuffer, at: Point) {
        let canvas_width = i64::from(self.pixels.width());
        let canvas_height = i64::from(self.pixels.height());

        let left = i64::from(at.x).max(0);
        let right = (i64::from(at.x) + i64::from(tile.width())).min(canvas_width);

        if left >= right {
            return;
        }

        let src_start = (left - i64::from(at.x)) as usize * BYTES_PER_PIXEL;
        let dst_start = left as usize * BYTES_PER_PIXEL;
        let span = (right - left) as usize * BYTES_PER_PIXEL;
        let stride = canvas_width as usize * BYTES_PER_PIXEL;

        for tile_y in 0..tile.height() {
            let canvas_y = i64::from(at.y) + i64::from(tile_y);

            if canvas_y < 0 {
                continue;
            }
            if canvas_y >= canvas_height {
                break;
            }

            let Some(row) = tile.row(tile_y) else {
                break;
            };

            let offset = canvas_y as usize * stride + dst_start;
            self.pixels.buffer_mut()[offset..offset + span]
                .copy_from_slice(&row[src_start..src_start + span]);
        }
    }
}
