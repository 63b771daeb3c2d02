//! Binary PPM (P6)
//!
//! Header `P6\n{width} {height}\n255\n` followed by raw RGB bytes, rows top
//! to bottom. Channels are clamped to [0, 1] and quantized with
//! `round(c * 255)`.

use crate::io::IoError;
use crate::render::Image;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `image` as binary PPM to any writer
pub fn write_ppm<W: Write>(image: &Image, mut writer: W) -> Result<(), IoError> {
    if image.is_empty() {
        return Err(IoError::EmptyImage);
    }

    write!(writer, "P6\n{} {}\n255\n", image.width(), image.height())?;
    let mut row = Vec::with_capacity(image.width() * 3);
    for pixels in image.pixels().chunks(image.width()) {
        row.clear();
        for color in pixels {
            row.extend_from_slice(&color.to_rgb8());
        }
        writer.write_all(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Save `image` as a binary PPM file
pub fn save_ppm(image: &Image, path: impl AsRef<Path>) -> Result<(), IoError> {
    let file = File::create(path)?;
    write_ppm(image, BufWriter::new(file))
}
