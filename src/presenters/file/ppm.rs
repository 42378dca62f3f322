use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a buffer as binary PPM (`P6`, 8 bits per channel, alpha dropped).
pub fn encode_ppm<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
    let surface = buffer.surface();

    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", surface.width(), surface.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&rgba_to_rgb(buffer.buffer()))?;

    Ok(())
}

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(filepath)?);
        encode_ppm(buffer, &mut writer)?;
        writer.flush()
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
