//! Edition composition from the layer model

use crate::generation::accumulator::EditionAccumulator;
use crate::io::configuration::Dimensions;
use crate::io::error::{GenerationError, Result};
use crate::io::image::{Canvas, load_fragment};
use crate::layers::{Fragment, Layer};
use rand::Rng;
use std::path::Path;

/// Pick one fragment uniformly at random, ignoring rarity
///
/// # Errors
///
/// Returns an error if the layer has no fragments
pub fn select_fragment<'a, R: Rng + ?Sized>(
    layer: &'a Layer,
    rng: &mut R,
) -> Result<&'a Fragment> {
    if layer.elements.is_empty() {
        return Err(GenerationError::EmptyLayer {
            layer: layer.name.clone(),
        });
    }

    let index = rng.random_range(0..layer.elements.len());
    layer
        .elements
        .get(index)
        .ok_or_else(|| GenerationError::EmptyLayer {
            layer: layer.name.clone(),
        })
}

/// Draws editions by stacking one random fragment per layer
#[derive(Debug, Clone, Copy)]
pub struct EditionCompositor<'a> {
    layers: &'a [Layer],
    format: Dimensions,
}

impl<'a> EditionCompositor<'a> {
    /// Create a compositor over layers in stacking order
    pub const fn new(layers: &'a [Layer], format: Dimensions) -> Self {
        Self { layers, format }
    }

    /// Layers in stacking order
    pub const fn layers(&self) -> &'a [Layer] {
        self.layers
    }

    /// Compose one edition on a fresh canvas and write it to `output`
    ///
    /// The image is written once, after the last layer is drawn. The returned
    /// accumulator holds exactly one selection per layer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A layer has no fragments
    /// - A fragment image cannot be loaded
    /// - The composited image cannot be written
    #[tracing::instrument(level = "debug", skip(self, rng, output))]
    pub fn compose_edition<R: Rng + ?Sized>(
        &self,
        edition: u32,
        rng: &mut R,
        output: &Path,
    ) -> Result<EditionAccumulator> {
        let mut accumulator = EditionAccumulator::new();
        let mut canvas = Canvas::new(self.format);

        for layer in self.layers {
            let fragment = select_fragment(layer, rng)?;
            accumulator.record(layer, fragment);

            let image = load_fragment(&layer.fragment_path(fragment))?;
            canvas.draw(&image, layer.position, layer.size);
            tracing::trace!(layer = %layer.name, fragment = %fragment.file_name, "drew layer");
        }

        canvas.save(output)?;
        Ok(accumulator)
    }
}
