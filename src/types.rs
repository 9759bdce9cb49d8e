use serde::{Deserialize, Serialize};

/// How stored rows relate to screen rows.
///
/// Bounding boxes and shifts work in buffer rows. This flag only matters when
/// a vertical displacement has to be reported or requested in screen terms
/// ("move the mask down").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// Buffer row 0 is the top of the picture.
    TopDown,
    /// Buffer row 0 is the bottom of the picture (the usual bitmap layout).
    BottomUp,
}

impl RowOrder {
    /// Converts a vertical displacement between buffer rows and screen rows
    /// (positive = down on screen). The conversion is its own inverse.
    #[inline]
    pub fn flip_dy(self, dy: i64) -> i64 {
        match self {
            RowOrder::TopDown => dy,
            RowOrder::BottomUp => -dy,
        }
    }

    /// [`flip_dy`](Self::flip_dy) for fractional offsets.
    #[inline]
    pub fn flip_dy_f64(self, dy: f64) -> f64 {
        match self {
            RowOrder::TopDown => dy,
            RowOrder::BottomUp => -dy,
        }
    }
}

impl std::fmt::Display for RowOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RowOrder::TopDown => "top_down",
            RowOrder::BottomUp => "bottom_up",
        })
    }
}

/// Axis-aligned rectangle in top-left-origin pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// `true` when both sides are at least `min` pixels.
    #[inline]
    pub fn is_at_least(&self, min: u32) -> bool {
        self.width >= min && self.height >= min
    }
}
