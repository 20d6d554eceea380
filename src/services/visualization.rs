use anyhow::Result;
use log::{error, info};
use std::path::Path;

use crate::config::settings::AppConfig;
use crate::export;
use crate::history;
use crate::loader;

/// Runs the load → reconstruct → export pipeline for one ledger document.
pub struct VisualizationService {
    config: AppConfig,
}

impl VisualizationService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Load errors abort the run before anything is written. Export failures
    /// are reported individually and do not fail the run: the summary has
    /// already been printed and a sibling artifact may have been written.
    pub fn run(&self, input: &Path, image_path: &Path, csv_path: &Path) -> Result<()> {
        info!("=== Generating ELO history from {} ===", input.display());

        let (players, matches) = loader::load(input)?;
        let reconstructed = history::build_rating_matrix(&players, &matches, &self.config.rating)?;

        for failure in export::export(&reconstructed, &self.config.chart, image_path, csv_path) {
            error!("{failure}");
        }

        info!("=== Done ===");
        Ok(())
    }
}
