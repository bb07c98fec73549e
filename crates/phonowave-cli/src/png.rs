//! Deterministic grayscale PNG writer.
//!
//! Uses fixed compression and filter settings so the same image always encodes
//! to the same bytes.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Largest width or height an image may be scaled to.
pub const MAX_DIMENSION: u32 = 16_384;

/// 8-bit grayscale image, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl GrayImage {
    /// Creates an image filled with one value.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Sets a pixel. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        if x < self.width && y < self.height {
            self.data[y as usize * self.width as usize + x as usize] = value;
        }
    }

    /// Reads a pixel.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Nearest-neighbour upscale by an integer factor.
    ///
    /// Fails if the scaled size overflows `u32` or exceeds [`MAX_DIMENSION`].
    pub fn upscaled(&self, factor: u32) -> Result<Self, PngError> {
        let factor = factor.max(1);
        let scale = |side: u32| {
            side.checked_mul(factor)
                .filter(|scaled| *scaled <= MAX_DIMENSION)
                .ok_or_else(|| {
                    PngError::InvalidDimensions(format!(
                        "{}x{} scaled by {} exceeds {} pixels per side",
                        self.width, self.height, factor, MAX_DIMENSION
                    ))
                })
        };
        let mut out = Self::filled(scale(self.width)?, scale(self.height)?, 0);
        for y in 0..out.height {
            for x in 0..out.width {
                if let Some(value) = self.get(x / factor, y / factor) {
                    out.set(x, y, value);
                }
            }
        }
        Ok(out)
    }
}

/// Write a grayscale image to a PNG file.
pub fn write_grayscale(image: &GrayImage, path: &Path) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_grayscale_to_writer(image, writer)
}

/// Write a grayscale image to any writer.
pub fn write_grayscale_to_writer<W: Write>(image: &GrayImage, writer: W) -> Result<(), PngError> {
    if image.width == 0 || image.height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "{}x{}",
            image.width, image.height
        )));
    }
    if image.data.len() != image.width as usize * image.height as usize {
        return Err(PngError::InvalidDimensions(format!(
            "{}x{} image with {} bytes",
            image.width,
            image.height,
            image.data.len()
        )));
    }

    let mut encoder = Encoder::new(writer, image.width, image.height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::NoFilter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&image.data)?;

    Ok(())
}
