use asset_align::bitmap::RasterImage;
use asset_align::image::Bgr;
use image::{Rgba, RgbaImage};
use std::path::PathBuf;

/// Inclusive rectangle in buffer coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Rect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

/// Uniform `background` with `rect` filled with `fill`.
pub fn rect_bitmap(
    width: usize,
    height: usize,
    bits_per_pixel: u16,
    background: Bgr,
    fill: Bgr,
    rect: Rect,
) -> RasterImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    RasterImage::from_fn(width, height, bits_per_pixel, |x, y| {
        if (rect.x0..=rect.x1).contains(&x) && (rect.y0..=rect.y1).contains(&y) {
            fill
        } else {
            background
        }
    })
    .expect("synthetic bitmap")
}

/// Opaque top-down RGBA counterpart of [`rect_bitmap`].
pub fn rect_rgba(width: u32, height: u32, background: Bgr, fill: Bgr, rect: Rect) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let inside = (rect.x0..=rect.x1).contains(&(x as usize))
            && (rect.y0..=rect.y1).contains(&(y as usize));
        let c = if inside { fill } else { background };
        Rgba([c.r, c.g, c.b, 255])
    })
}

/// Fresh per-test scratch directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "asset_align_{name}_{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
