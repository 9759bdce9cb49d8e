//! Density-based splitting of sprite sheets.
//!
//! Rows (then columns) are profiled by how many "ink" pixels they hold.
//! Maximal runs above a density threshold are content segments; a region
//! with more than one row segment is cut into those rows and each is split
//! again, likewise for columns. A region that cannot be cut is a leaf.
use crate::types::Region;
use image::RgbaImage;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SmartSplitOptions {
    /// Regions smaller than this on either side are not split further.
    pub min_region: u32,
    /// Alpha must exceed this for a pixel to count as ink.
    pub alpha_floor: u8,
    /// Some channel must be below this for a pixel to count as ink.
    pub ink_ceiling: u8,
    /// Fraction of the densest line a line must exceed to be content.
    pub gap_ratio: f64,
    /// Lower bound on the density threshold.
    pub min_gap_threshold: f64,
}

impl Default for SmartSplitOptions {
    fn default() -> Self {
        Self {
            min_region: 50,
            alpha_floor: 10,
            ink_ceiling: 250,
            gap_ratio: 0.1,
            min_gap_threshold: 5.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Rows,
    Cols,
}

#[inline]
fn is_ink(img: &RgbaImage, x: u32, y: u32, opts: &SmartSplitOptions) -> bool {
    let [r, g, b, a] = img.get_pixel(x, y).0;
    a > opts.alpha_floor && (r < opts.ink_ceiling || g < opts.ink_ceiling || b < opts.ink_ceiling)
}

/// Ink count of every row (or column) of `region`.
fn densities(img: &RgbaImage, region: Region, axis: Axis, opts: &SmartSplitOptions) -> Vec<usize> {
    match axis {
        Axis::Rows => (region.y..region.bottom())
            .map(|y| {
                (region.x..region.right())
                    .filter(|&x| is_ink(img, x, y, opts))
                    .count()
            })
            .collect(),
        Axis::Cols => (region.x..region.right())
            .map(|x| {
                (region.y..region.bottom())
                    .filter(|&y| is_ink(img, x, y, opts))
                    .count()
            })
            .collect(),
    }
}

/// Half-open `(start, end)` runs whose density exceeds
/// `max(min_gap_threshold, gap_ratio * max density)`.
pub fn content_segments(densities: &[usize], opts: &SmartSplitOptions) -> Vec<(usize, usize)> {
    let max_val = densities.iter().copied().max().unwrap_or(0) as f64;
    let threshold = opts.min_gap_threshold.max(max_val * opts.gap_ratio);

    let mut segments = Vec::new();
    let mut start = None;
    for (i, &d) in densities.iter().enumerate() {
        let is_content = d as f64 > threshold;
        match (is_content, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                segments.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        segments.push((s, densities.len()));
    }
    segments
}

/// Leaf regions of the recursive split, in top-left to bottom-right order.
/// Leaves can be smaller than `min_region`; callers usually drop those.
pub fn smart_split(img: &RgbaImage, opts: &SmartSplitOptions) -> Vec<Region> {
    let mut leaves = Vec::new();
    let full = Region::new(0, 0, img.width(), img.height());
    split_region(img, full, opts, 0, &mut leaves);
    leaves
}

fn split_region(
    img: &RgbaImage,
    region: Region,
    opts: &SmartSplitOptions,
    depth: usize,
    leaves: &mut Vec<Region>,
) {
    if region.width < opts.min_region || region.height < opts.min_region {
        leaves.push(region);
        return;
    }

    let rows = content_segments(&densities(img, region, Axis::Rows, opts), opts);
    if rows.len() > 1 {
        debug!("smart_split depth {depth}: {} row bands in {region:?}", rows.len());
        for (y1, y2) in rows {
            let band = Region::new(region.x, region.y + y1 as u32, region.width, (y2 - y1) as u32);
            split_region(img, band, opts, depth + 1, leaves);
        }
        return;
    }

    let cols = content_segments(&densities(img, region, Axis::Cols, opts), opts);
    if cols.len() > 1 {
        debug!("smart_split depth {depth}: {} column bands in {region:?}", cols.len());
        for (x1, x2) in cols {
            let band = Region::new(region.x + x1 as u32, region.y, (x2 - x1) as u32, region.height);
            split_region(img, band, opts, depth + 1, leaves);
        }
        return;
    }

    leaves.push(region);
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn sheet(width: u32, height: u32, sprites: &[Region]) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let inside = sprites
                .iter()
                .any(|r| x >= r.x && x < r.right() && y >= r.y && y < r.bottom());
            if inside {
                Rgba([40, 60, 200, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        })
    }

    #[test]
    fn segments_use_relative_and_absolute_floor() {
        let opts = SmartSplitOptions::default();
        let d = [0, 0, 100, 100, 9, 0, 50, 50, 0];
        assert_eq!(content_segments(&d, &opts), vec![(2, 4), (6, 8)]);
        // Nothing above the absolute floor of 5.
        assert!(content_segments(&[5, 5, 4], &opts).is_empty());
        // Open run at the end is closed at the length.
        assert_eq!(content_segments(&[0, 9, 9], &opts), vec![(1, 3)]);
    }

    #[test]
    fn two_by_two_sheet_yields_four_sprites() {
        let sprites = [
            Region::new(10, 10, 80, 70),
            Region::new(120, 10, 60, 70),
            Region::new(10, 110, 80, 60),
            Region::new(120, 110, 60, 60),
        ];
        let img = sheet(200, 190, &sprites);
        let leaves: Vec<Region> = smart_split(&img, &SmartSplitOptions::default())
            .into_iter()
            .filter(|r| r.is_at_least(50))
            .collect();
        assert_eq!(leaves.len(), 4, "leaves: {leaves:?}");
        // Row bands keep the full width, column cuts then isolate each sprite.
        assert_eq!(leaves[0], Region::new(10, 10, 80, 70));
        assert_eq!(leaves[1], Region::new(120, 10, 60, 70));
        assert_eq!(leaves[3], Region::new(120, 110, 60, 60));
    }

    #[test]
    fn transparent_pixels_are_not_ink() {
        let img = RgbaImage::from_pixel(60, 60, Rgba([0, 0, 0, 0]));
        let leaves = smart_split(&img, &SmartSplitOptions::default());
        assert_eq!(leaves, vec![Region::new(0, 0, 60, 60)]);
    }
}
