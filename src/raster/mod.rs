//! Asset-preparation helpers over decoded RGBA images.

pub mod background;
pub mod crop;
pub mod split;

pub use self::background::{remove_white_background, WHITE_BACKGROUND_THRESHOLD};
pub use self::crop::{crop_center, crop_region, force_split, grid_tiles, DEFAULT_SPLIT_TRIM};
pub use self::split::{content_segments, smart_split, SmartSplitOptions};
