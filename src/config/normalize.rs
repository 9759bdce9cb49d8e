use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct NormalizeToolConfig {
    pub inputs: Vec<PathBuf>,
    #[serde(default)]
    pub aspect: AspectConfig,
    /// Appended to the file stem of each output.
    #[serde(default = "default_suffix")]
    pub suffix: String,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// Target aspect as a width:height pair.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AspectConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for AspectConfig {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 140.0,
        }
    }
}

impl AspectConfig {
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }
}

fn default_suffix() -> String {
    "_fixed".to_string()
}

pub fn load_config(path: &Path) -> Result<NormalizeToolConfig, String> {
    super::read_json_config(path)
}
