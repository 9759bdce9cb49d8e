use crate::types::Region;
use image::DynamicImage;

/// Rows trimmed on each side of the midline by [`force_split`].
pub const DEFAULT_SPLIT_TRIM: u32 = 15;

/// Largest centered region with aspect ratio `target_ratio` (width / height).
///
/// Too-wide inputs lose columns, everything else loses rows; the kept size
/// is truncated to whole pixels.
pub fn crop_center(width: u32, height: u32, target_ratio: f64) -> Result<Region, String> {
    if !(target_ratio.is_finite() && target_ratio > 0.0) {
        return Err(format!("Target ratio must be positive, got {target_ratio}"));
    }
    if width == 0 || height == 0 {
        return Err(format!("Cannot crop an empty {width}x{height} image"));
    }
    let current = width as f64 / height as f64;
    if current > target_ratio {
        let new_width = ((height as f64 * target_ratio) as u32).min(width);
        Ok(Region::new((width - new_width) / 2, 0, new_width, height))
    } else {
        let new_height = ((width as f64 / target_ratio) as u32).min(height);
        Ok(Region::new(0, (height - new_height) / 2, width, new_height))
    }
}

/// Top and bottom halves with `trim` rows dropped on both sides of the
/// midline.
pub fn force_split(width: u32, height: u32, trim: u32) -> (Region, Region) {
    let mid = height / 2;
    let top = Region::new(0, 0, width, mid.saturating_sub(trim));
    let bottom_y = mid.saturating_add(trim).min(height);
    let bottom = Region::new(0, bottom_y, width, height - bottom_y);
    (top, bottom)
}

/// `cols` x `rows` equal tiles in row-major order. Remainder pixels on the
/// right and bottom edges are dropped.
pub fn grid_tiles(width: u32, height: u32, cols: u32, rows: u32) -> Result<Vec<Region>, String> {
    if cols == 0 || rows == 0 {
        return Err(format!("Grid needs at least one column and row, got {cols}x{rows}"));
    }
    if cols > width || rows > height {
        return Err(format!("A {cols}x{rows} grid does not fit a {width}x{height} image"));
    }
    let tile_w = width / cols;
    let tile_h = height / rows;
    let mut tiles = Vec::with_capacity(cols as usize * rows as usize);
    for row in 0..rows {
        for col in 0..cols {
            tiles.push(Region::new(col * tile_w, row * tile_h, tile_w, tile_h));
        }
    }
    Ok(tiles)
}

pub fn crop_region(img: &DynamicImage, region: Region) -> DynamicImage {
    img.crop_imm(region.x, region.y, region.width, region.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_images_lose_columns() {
        let r = crop_center(400, 140, 0.5).unwrap();
        assert_eq!(r, Region::new(165, 0, 70, 140));
    }

    #[test]
    fn tall_images_lose_rows() {
        let r = crop_center(120, 300, 0.5).unwrap();
        assert_eq!(r, Region::new(0, 30, 120, 240));
    }

    #[test]
    fn crop_center_rejects_bad_ratio() {
        assert!(crop_center(10, 10, 0.0).is_err());
        assert!(crop_center(10, 10, f64::NAN).is_err());
        assert!(crop_center(0, 10, 1.0).is_err());
    }

    #[test]
    fn force_split_trims_around_midline() {
        let (top, bottom) = force_split(50, 200, DEFAULT_SPLIT_TRIM);
        assert_eq!(top, Region::new(0, 0, 50, 85));
        assert_eq!(bottom, Region::new(0, 115, 50, 85));
    }

    #[test]
    fn force_split_saturates_on_small_images() {
        let (top, bottom) = force_split(10, 20, DEFAULT_SPLIT_TRIM);
        assert_eq!(top.height, 0);
        assert_eq!(bottom, Region::new(0, 20, 10, 0));
    }

    #[test]
    fn grid_tiles_are_row_major() {
        let tiles = grid_tiles(201, 300, 2, 3).unwrap();
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[0], Region::new(0, 0, 100, 100));
        assert_eq!(tiles[1], Region::new(100, 0, 100, 100));
        assert_eq!(tiles[5], Region::new(100, 200, 100, 100));
        assert!(grid_tiles(10, 10, 0, 1).is_err());
    }

    #[test]
    fn grid_larger_than_image_is_rejected() {
        assert!(grid_tiles(10, 10, 11, 1).is_err());
        assert!(grid_tiles(4, 4, u32::MAX, u32::MAX).is_err());
        assert_eq!(grid_tiles(3, 2, 3, 2).unwrap().len(), 6);
    }
}
