use crate::bbox::ContentThresholds;
use crate::types::RowOrder;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct AlignToolConfig {
    /// Reference picture, scanned for pixels that differ from its background.
    pub image: PathBuf,
    /// Mask, scanned for near-white pixels.
    pub mask: PathBuf,
    /// Required: how buffer rows map to screen rows for the reported
    /// vertical offset.
    pub row_order: RowOrder,
    #[serde(default)]
    pub thresholds: ContentThresholds,
    #[serde(default)]
    pub output: AlignOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AlignOutputConfig {
    /// Write the mask shifted by the rounded offset here (bitmap masks only).
    pub aligned_mask: Option<PathBuf>,
    /// Write the alignment report as JSON here.
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<AlignToolConfig, String> {
    super::read_json_config(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_and_output_are_optional() {
        let cfg: AlignToolConfig = serde_json::from_str(
            r#"{ "image": "slim.bmp", "mask": "slim_mask.bmp", "row_order": "bottom_up" }"#,
        )
        .unwrap();
        assert_eq!(cfg.row_order, RowOrder::BottomUp);
        assert_eq!(cfg.thresholds, ContentThresholds::default());
        assert!(cfg.output.aligned_mask.is_none());
    }

    #[test]
    fn row_order_is_required() {
        let res: Result<AlignToolConfig, _> =
            serde_json::from_str(r#"{ "image": "a.bmp", "mask": "b.bmp" }"#);
        assert!(res.is_err());
    }

    #[test]
    fn partial_thresholds_keep_defaults() {
        let cfg: AlignToolConfig = serde_json::from_str(
            r#"{ "image": "a.bmp", "mask": "b.bmp", "row_order": "top_down",
                 "thresholds": { "mask_brightness": 240 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.thresholds.mask_brightness, 240);
        assert_eq!(
            cfg.thresholds.background_tolerance,
            ContentThresholds::default().background_tolerance
        );
    }
}
