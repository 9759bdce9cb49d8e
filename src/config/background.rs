use crate::raster::WHITE_BACKGROUND_THRESHOLD;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BackgroundToolConfig {
    pub inputs: Vec<PathBuf>,
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// Write results here instead of overwriting the inputs.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_threshold() -> u8 {
    WHITE_BACKGROUND_THRESHOLD
}

pub fn load_config(path: &Path) -> Result<BackgroundToolConfig, String> {
    super::read_json_config(path)
}
