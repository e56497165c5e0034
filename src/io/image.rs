//! Fragment loading and edition canvas export

use crate::io::configuration::Dimensions;
use crate::io::error::{GenerationError, Result, WithPath};
use crate::layers::Position;
use image::imageops::{self, FilterType};
use image::{ImageFormat, ImageReader, RgbaImage};
use std::path::Path;

/// Load a fragment image as RGBA
///
/// The format is detected from the file contents, so the extension does not
/// have to match the encoding.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - The contents cannot be decoded as an image
pub fn load_fragment(path: &Path) -> Result<RgbaImage> {
    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .with_path(path, "open fragment")?
        .decode()
        .map_err(|e| GenerationError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(img.to_rgba8())
}

/// Drawing surface for a single edition
///
/// Starts fully transparent. Layers are painted in call order with
/// source-over blending, so opaque pixels replace what lies beneath.
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: RgbaImage,
}

impl Canvas {
    /// Create a transparent canvas of the given size
    pub fn new(format: Dimensions) -> Self {
        Self {
            buffer: RgbaImage::new(format.width, format.height),
        }
    }

    /// Paint `fragment` at `position`, scaling it to `size` when its dimensions differ
    pub fn draw(&mut self, fragment: &RgbaImage, position: Position, size: Dimensions) {
        if fragment.dimensions() == (size.width, size.height) {
            imageops::overlay(&mut self.buffer, fragment, position.x, position.y);
        } else {
            let scaled = imageops::resize(fragment, size.width, size.height, FilterType::Triangle);
            imageops::overlay(&mut self.buffer, &scaled, position.x, position.y);
        }
    }

    /// Current pixel contents
    pub const fn pixels(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Write the canvas as a PNG, creating or overwriting `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded or written
    pub fn save(&self, path: &Path) -> Result<()> {
        self.buffer
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| GenerationError::ImageExport {
                path: path.to_path_buf(),
                source: e,
            })
    }
}
