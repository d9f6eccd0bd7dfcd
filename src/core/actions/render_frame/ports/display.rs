use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

/// Surface a frame is drawn onto.
pub trait DisplayPort {
    /// Called once before any tile of a new frame is drawn.
    fn begin_frame(&mut self) {}

    /// Copies `pixels` with its top-left corner at `at`. Parts falling
    /// outside the surface are dropped.
    fn draw_tile(&mut self, pixels: &PixelBuffer, at: Point);
}
