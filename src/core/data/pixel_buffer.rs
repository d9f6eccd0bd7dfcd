use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn dimensions_to_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of RGBA data but buffer holds {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x, pixel.y, width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA pixel storage.
///
/// Tiles use a square buffer; the display canvas uses the viewport size.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// Creates a buffer of opaque black pixels.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut buffer = vec![0; dimensions_to_buffer_size(width, height)];

        for pixel in buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[3] = 255;
        }

        Self {
            width,
            height,
            buffer,
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = dimensions_to_buffer_size(width, height);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Raw mutable RGBA bytes, row-major.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// One row of RGBA bytes, or `None` past the last row.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }

        let stride = self.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * stride;

        Some(&self.buffer[start..start + stride])
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<[u8; 4]> {
        let index = self.index_of(pixel)?;

        Some([
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
            self.buffer[index + 3],
        ])
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let Some(index) = self.index_of(pixel) else {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        };

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    /// Resets every pixel to `colour`, fully opaque.
    pub fn fill(&mut self, colour: Colour) {
        let rgba = colour.to_rgba();

        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&rgba);
        }
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if pixel.x < 0 || pixel.y < 0 {
            return None;
        }

        let (x, y) = (pixel.x as u32, pixel.y as u32);

        if x >= self.width || y >= self.height {
            return None;
        }

        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_opaque_black_buffer() {
        let buffer = PixelBuffer::new(10, 10);

        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        assert!(
            buffer
                .buffer()
                .chunks_exact(4)
                .all(|pixel| pixel == [0, 0, 0, 255])
        );
    }

    #[test]
    fn test_new_calculates_correct_buffer_size() {
        let buffer = PixelBuffer::new(100, 50);

        assert_eq!(buffer.buffer_size(), 20000); // 100 * 50 * 4
        assert_eq!(buffer.width(), 100);
        assert_eq!(buffer.height(), 50);
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // pixel (0,0) - red
            0, 255, 0, 255, // pixel (1,0) - green
            0, 0, 255, 255, // pixel (0,1) - blue
            255, 255, 0, 255, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(2, 2, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(2, 2, vec![255, 0, 0, 255]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_size: 16,
                buffer_size: 4
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let result = PixelBuffer::from_data(2, 2, vec![0; 24]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_size: 16,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_set_pixel_valid() {
        let mut buffer = PixelBuffer::new(3, 3);
        let red = Colour { r: 255, g: 0, b: 0 };

        buffer.set_pixel(Point { x: 1, y: 1 }, red).unwrap();

        assert_eq!(&buffer.buffer()[16..20], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_set_pixel_bottom_right_corner() {
        let mut buffer = PixelBuffer::new(3, 3);
        let blue = Colour { r: 0, g: 0, b: 255 };

        buffer.set_pixel(Point { x: 2, y: 2 }, blue).unwrap();

        assert_eq!(&buffer.buffer()[32..36], &[0, 0, 255, 255]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 3);
        let colour = Colour { r: 255, g: 0, b: 0 };

        for pixel in [
            Point { x: 5, y: 1 },
            Point { x: 1, y: 3 },
            Point { x: -1, y: -1 },
        ] {
            assert_eq!(
                buffer.set_pixel(pixel, colour),
                Err(PixelBufferError::PixelOutsideBounds {
                    pixel,
                    width: 3,
                    height: 3
                })
            );
        }
    }

    #[test]
    fn test_row_slices() {
        let mut buffer = PixelBuffer::new(2, 3);
        buffer
            .set_pixel(Point { x: 1, y: 2 }, Colour { r: 9, g: 8, b: 7 })
            .unwrap();

        assert_eq!(buffer.row(2), Some(&[0, 0, 0, 255, 9, 8, 7, 255][..]));
        assert_eq!(buffer.row(3), None);
    }

    #[test]
    fn test_fill() {
        let mut buffer = PixelBuffer::from_data(1, 2, vec![1; 8]).unwrap();

        buffer.fill(Colour::BLACK);

        assert_eq!(buffer.buffer(), &vec![0, 0, 0, 255, 0, 0, 0, 255]);
    }
}
