use crate::types::RowOrder;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ShiftToolConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Required: how buffer rows map to screen rows.
    pub row_order: RowOrder,
    /// Screen pixels, positive = right.
    pub dx: i64,
    /// Screen pixels, positive = down.
    pub dy: i64,
}

impl ShiftToolConfig {
    /// `(dx, dy)` in buffer coordinates.
    pub fn buffer_shift(&self) -> (i64, i64) {
        (self.dx, self.row_order.flip_dy(self.dy))
    }
}

pub fn load_config(path: &Path) -> Result<ShiftToolConfig, String> {
    super::read_json_config(path)
}
