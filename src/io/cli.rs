//! Command-line interface and end-to-end run orchestration

use crate::generation::{EditionCompositor, MetadataRecorder};
use crate::io::configuration::{Config, DEFAULT_CHECKPOINT_INTERVAL, DEFAULT_EDITION_COUNT};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::workspace::Workspace;
use crate::layers::build_layers;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "layerforge")]
#[command(
    author,
    version,
    about = "Assemble layered image fragments into random editions with metadata"
)]
/// Command-line arguments for the edition generator
pub struct Cli {
    /// Number of editions to generate
    #[arg(value_name = "EDITIONS", default_value_t = DEFAULT_EDITION_COUNT)]
    pub editions: u32,

    /// Working directory containing `layers/` (defaults to $PWD)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Configuration file (defaults to <DIR>/config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Random seed for reproducible selections
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Rewrite metadata every N editions (0 writes only at the end)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_CHECKPOINT_INTERVAL)]
    pub checkpoint: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Whether the metadata document is rewritten after `edition`
    pub const fn is_checkpoint(&self, edition: u32) -> bool {
        self.checkpoint != 0 && edition % self.checkpoint == 0
    }

    /// Random source for the run, seeded when `--seed` is given
    pub fn rng(&self) -> StdRng {
        self.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// Drives a full run: setup, layer scan, edition loop, and metadata output
pub struct EditionProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl EditionProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every requested edition and write the metadata document
    ///
    /// Returns the recorder holding every edition's metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The edition count is zero
    /// - The working directory or configuration cannot be resolved
    /// - The build directory cannot be created
    /// - A layer directory cannot be scanned
    /// - An edition cannot be composed or written
    /// - The metadata document cannot be written
    pub fn process(&mut self) -> Result<MetadataRecorder> {
        if self.cli.editions == 0 {
            return Err(invalid_parameter(
                "editions",
                &self.cli.editions,
                &"at least one edition is required",
            ));
        }

        let workspace = Workspace::resolve(self.cli.dir.as_deref())?;
        let config_path = self
            .cli
            .config
            .clone()
            .unwrap_or_else(|| workspace.config_path());
        let config = Config::from_path(&config_path)?;
        tracing::info!(
            root = %workspace.root().display(),
            layers = config.layers_order.len(),
            editions = self.cli.editions,
            "starting run"
        );

        workspace.prepare_build_dir()?;

        let layers = build_layers(
            workspace.layers_dir(),
            &config.layers_order,
            config.format,
            &config.rarity_table(),
        )?;
        let compositor = EditionCompositor::new(&layers, config.format);
        let mut recorder = MetadataRecorder::new(workspace.metadata_path());
        let mut rng = self.cli.rng();

        self.progress_manager.initialize(self.cli.editions);

        for edition in 1..=self.cli.editions {
            let selections =
                compositor.compose_edition(edition, &mut rng, &workspace.edition_path(edition))?;
            recorder.add_metadata(edition, selections);
            self.progress_manager
                .suspend(|| tracing::info!(edition, "Creating edition {edition}"));

            if self.cli.is_checkpoint(edition) {
                recorder.write()?;
            }
            self.progress_manager.complete_edition(edition);
        }

        recorder.write()?;
        self.progress_manager.finish();

        Ok(recorder)
    }
}
