//! Run constants and the JSON configuration surface

use crate::io::error::{GenerationError, Result, WithPath, invalid_parameter};
use crate::layers::rarity::{RarityMatch, RarityRule, RarityTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

// Workspace layout
/// Directory under the working directory holding one subdirectory per layer
pub const LAYERS_DIR_NAME: &str = "layers";
/// Directory under the working directory receiving editions and metadata
pub const BUILD_DIR_NAME: &str = "build";
/// Name of the metadata document inside the build directory
pub const METADATA_FILE_NAME: &str = "_metadata.json";
/// Default configuration file name inside the working directory
pub const CONFIG_FILE_NAME: &str = "config.json";
/// Extension of composited edition images
pub const EDITION_EXTENSION: &str = "png";

/// Characters stripped from a fragment file name before marker removal (".png")
pub const FILE_EXTENSION_LEN: usize = 4;

// Default values for configurable parameters
/// Default output width in pixels
pub const DEFAULT_WIDTH: u32 = 1000;
/// Default output height in pixels
pub const DEFAULT_HEIGHT: u32 = 1000;
/// Editions generated when no count is given
pub const DEFAULT_EDITION_COUNT: u32 = 1;
/// Editions between metadata checkpoints
pub const DEFAULT_CHECKPOINT_INTERVAL: u32 = 25;

// Progress bar display settings
/// Width of the edition progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Width and height of the output canvas, also used as the draw size of every layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Run configuration as read from `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Layer names in stacking order, bottom first
    pub layers_order: Vec<String>,
    /// Output canvas size
    #[serde(default)]
    pub format: Dimensions,
    /// Ordered rarity marker table
    #[serde(default = "default_rarity_rules")]
    pub rarity: Vec<RarityRule>,
    /// Which matching rarity rule wins
    #[serde(default)]
    pub rarity_match: RarityMatch,
}

/// The marker table used when a configuration does not declare one
pub fn default_rarity_rules() -> Vec<RarityRule> {
    vec![
        RarityRule::new("", "original"),
        RarityRule::new("_r", "rare"),
        RarityRule::new("_sr", "super rare"),
    ]
}

impl Config {
    /// Build a configuration for the given layer order with default format and rarity
    pub fn new(layers_order: Vec<String>) -> Self {
        Self {
            layers_order,
            format: Dimensions::default(),
            rarity: default_rarity_rules(),
            rarity_match: RarityMatch::default(),
        }
    }

    /// Read and validate a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The contents are not a valid configuration document
    /// - The configuration fails validation
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).with_path(path, "read config")?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|source| GenerationError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration can drive a run
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No layers are configured
    /// - The format has a zero dimension
    /// - A layer name is empty, contains a path separator, or is a relative component
    pub fn validate(&self) -> Result<()> {
        if self.layers_order.is_empty() {
            return Err(invalid_parameter(
                "layersOrder",
                &"[]",
                &"at least one layer is required",
            ));
        }

        if self.format.width == 0 || self.format.height == 0 {
            return Err(invalid_parameter(
                "format",
                &format!("{}x{}", self.format.width, self.format.height),
                &"width and height must be positive",
            ));
        }

        for name in &self.layers_order {
            if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
                return Err(invalid_parameter(
                    "layersOrder",
                    name,
                    &"layer names must be plain directory names",
                ));
            }
        }

        Ok(())
    }

    /// The rarity rules paired with the configured match policy
    pub fn rarity_table(&self) -> RarityTable {
        RarityTable::new(self.rarity.clone(), self.rarity_match)
    }
}
