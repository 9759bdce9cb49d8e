//! Content bounding boxes.
//!
//! A pixel is "content" under a [`ContentRule`]; [`compute_bbox`] scans every
//! pixel in buffer order and keeps the min/max coordinates of the content
//! pixels. Pixels the stored data does not cover are skipped.
use crate::image::{Bgr, PixelSource};
use log::debug;
use serde::{Deserialize, Serialize};

/// Mask pixels brighter than this on every channel are content.
pub const MASK_BRIGHTNESS_THRESHOLD: u8 = 200;

/// Image pixels further than this (sum of channel differences) from the
/// background are content.
pub const BACKGROUND_TOLERANCE: u32 = 20;

/// Classification thresholds, injectable per asset style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentThresholds {
    pub mask_brightness: u8,
    pub background_tolerance: u32,
}

impl Default for ContentThresholds {
    fn default() -> Self {
        Self {
            mask_brightness: MASK_BRIGHTNESS_THRESHOLD,
            background_tolerance: BACKGROUND_TOLERANCE,
        }
    }
}

/// Which of the two classification rules an input is scanned with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Near-white detection.
    Mask,
    /// Distance from a background colour.
    Image,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentRule {
    /// Content when R, G and B all exceed `threshold`.
    NearWhite { threshold: u8 },
    /// Content when the channel distance to `background` exceeds `tolerance`.
    DiffersFrom { background: Bgr, tolerance: u32 },
}

impl ContentRule {
    #[inline]
    pub fn is_content(&self, px: Bgr) -> bool {
        match *self {
            ContentRule::NearWhite { threshold } => px.all_above(threshold),
            ContentRule::DiffersFrom {
                background,
                tolerance,
            } => px.channel_distance(background) > tolerance,
        }
    }

    /// Rule for `mode`. Image mode takes its background from the first pixel
    /// of `image` (see [`sample_background`]).
    pub fn for_mode<P: PixelSource>(
        mode: ScanMode,
        thresholds: &ContentThresholds,
        image: &P,
    ) -> Result<Self, String> {
        match mode {
            ScanMode::Mask => Ok(ContentRule::NearWhite {
                threshold: thresholds.mask_brightness,
            }),
            ScanMode::Image => {
                let background = sample_background(image)
                    .ok_or_else(|| "Image has no pixel to sample a background from".to_string())?;
                debug!(
                    "sampled background R={} G={} B={}",
                    background.r, background.g, background.b
                );
                Ok(ContentRule::DiffersFrom {
                    background,
                    tolerance: thresholds.background_tolerance,
                })
            }
        }
    }
}

/// Colour of the first pixel in the buffer.
pub fn sample_background<P: PixelSource>(image: &P) -> Option<Bgr> {
    image.bgr(0, 0)
}

/// Inclusive min/max coordinates of the content pixels.
///
/// A box with no content keeps the scan's starting values (min at the image
/// size, max at 0), so [`width`](Self::width) and [`height`](Self::height)
/// come out negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
    /// Number of content pixels that contributed.
    pub pixel_count: usize,
}

impl BoundingBox {
    /// Starting value for a scan over a `width` x `height` image.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            min_x: width as i64,
            max_x: 0,
            min_y: height as i64,
            max_y: 0,
            pixel_count: 0,
        }
    }

    /// Box spanning exactly the given inclusive corners.
    pub fn from_corners(min_x: i64, min_y: i64, max_x: i64, max_y: i64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            pixel_count: ((max_x - min_x + 1).max(0) * (max_y - min_y + 1).max(0)) as usize,
        }
    }

    #[inline]
    pub fn include(&mut self, x: i64, y: i64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        self.pixel_count += 1;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixel_count == 0
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn center(&self) -> [f64; 2] {
        [
            (self.min_x + self.max_x) as f64 / 2.0,
            (self.min_y + self.max_y) as f64 / 2.0,
        ]
    }

    /// (min, min), (max, min), (max, max), (min, max).
    pub fn corners(&self) -> [[f64; 2]; 4] {
        let (x0, y0) = (self.min_x as f64, self.min_y as f64);
        let (x1, y1) = (self.max_x as f64, self.max_y as f64);
        [[x0, y0], [x1, y0], [x1, y1], [x0, y1]]
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [cx, cy] = self.center();
        write!(
            f,
            "{},{} - {},{} (WxH: {}x{}) Center: {cx},{cy}",
            self.min_x,
            self.min_y,
            self.max_x,
            self.max_y,
            self.width(),
            self.height()
        )
    }
}

/// Bounding box of every pixel `rule` classifies as content, scanning rows
/// in buffer order.
pub fn compute_bbox<P: PixelSource>(image: &P, rule: &ContentRule) -> BoundingBox {
    let (width, height) = (image.width(), image.height());
    let mut bbox = BoundingBox::empty(width, height);
    let mut skipped = 0usize;
    for y in 0..height {
        for x in 0..width {
            let Some(px) = image.bgr(x, y) else {
                skipped += 1;
                continue;
            };
            if rule.is_content(px) {
                bbox.include(x as i64, y as i64);
            }
        }
    }
    if skipped > 0 {
        debug!("compute_bbox skipped {skipped} pixels outside the stored data");
    }
    bbox
}
