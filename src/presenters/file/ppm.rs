use crate::adapters::pixel_format::copy_rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use log::info;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the canvas as a binary (P6) PPM image.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut rgb = vec![0; buffer.buffer_size() / BYTES_PER_PIXEL * 3];
        copy_rgba_to_rgb(buffer.buffer(), &mut rgb);

        let mut file = BufWriter::new(fs::File::create(filepath)?);

        // P6: binary RGB, then width, height and max colour value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", buffer.width(), buffer.height())?;
        writeln!(file, "255")?;
        file.write_all(&rgb)?;
        file.flush()?;

        info!("wrote {}x{} image to {}", buffer.width(), buffer.height(), filepath.display());

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
