//! Construction of the ordered layer model

use crate::io::configuration::Dimensions;
use crate::io::error::Result;
use crate::layers::rarity::RarityTable;
use crate::layers::scanner::{Fragment, scan_layer};
use std::path::{Path, PathBuf};

/// Top-left corner where a layer is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Horizontal offset in pixels
    pub x: i64,
    /// Vertical offset in pixels
    pub y: i64,
}

/// A named category of fragments drawn at a fixed stacking position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// 0-based position in the configured order
    pub id: usize,
    /// Configured layer name
    pub name: String,
    /// Directory the fragments were scanned from
    pub location: PathBuf,
    /// Fragments in listing order
    pub elements: Vec<Fragment>,
    /// Draw position on the canvas
    pub position: Position,
    /// Draw size on the canvas
    pub size: Dimensions,
}

impl Layer {
    /// Path of a fragment file inside this layer
    pub fn fragment_path(&self, fragment: &Fragment) -> PathBuf {
        self.location.join(&fragment.file_name)
    }
}

/// Scan `<layers_dir>/<name>` for every configured name, preserving order
///
/// Every layer is drawn full-frame from the origin.
///
/// # Errors
///
/// Returns the first scan error; no partial layer set is produced
pub fn build_layers(
    layers_dir: &Path,
    layer_names: &[String],
    format: Dimensions,
    rarity: &RarityTable,
) -> Result<Vec<Layer>> {
    layer_names
        .iter()
        .enumerate()
        .map(|(id, name)| {
            let location = layers_dir.join(name);
            let elements = scan_layer(&location, rarity)?;
            tracing::debug!(layer = %name, fragments = elements.len(), "scanned layer");

            Ok(Layer {
                id,
                name: name.clone(),
                location,
                elements,
                position: Position::default(),
                size: format,
            })
        })
        .collect()
}
