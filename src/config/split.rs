use crate::raster::{SmartSplitOptions, DEFAULT_SPLIT_TRIM};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SplitToolConfig {
    pub input: PathBuf,
    /// Defaults to the input's directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// File name prefix; defaults to the input's stem.
    #[serde(default)]
    pub prefix: Option<String>,
    pub split: SplitMode,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SplitMode {
    /// Top and bottom halves around the midline.
    Half {
        #[serde(default = "default_trim")]
        trim: u32,
    },
    /// Equal tiles, numbered row-major from 1.
    Grid { cols: u32, rows: u32 },
    /// Recursive density split; leaves smaller than `min_region` are dropped.
    Smart {
        #[serde(default)]
        options: SmartSplitOptions,
    },
}

fn default_trim() -> u32 {
    DEFAULT_SPLIT_TRIM
}

pub fn load_config(path: &Path) -> Result<SplitToolConfig, String> {
    super::read_json_config(path)
}
