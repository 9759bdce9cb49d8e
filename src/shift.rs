//! Whole-pixel translation of a bitmap.
use crate::bitmap::RasterImage;

/// Copy of `image` with its content moved by `(dx, dy)` buffer pixels.
///
/// Destination `(x, y)` takes the whole source pixel `(x - dx, y - dy)` when
/// that lies inside the image; everything else (and the row padding) is
/// zero. Pixels the stored data does not cover are left zero as well.
pub fn shift(image: &RasterImage, dx: i64, dy: i64) -> RasterImage {
    let src = image.data();
    let mut out = vec![0u8; src.len()];
    let bpp = image.bytes_per_pixel();
    let (width, height) = (image.width() as i64, image.height() as i64);

    for y in 0..height {
        let sy = y - dy;
        if !(0..height).contains(&sy) {
            continue;
        }
        for x in 0..width {
            let sx = x - dx;
            if !(0..width).contains(&sx) {
                continue;
            }
            let dst_off = image.pixel_offset(x as usize, y as usize);
            let src_off = image.pixel_offset(sx as usize, sy as usize);
            if src_off + bpp > src.len() || dst_off + bpp > out.len() {
                continue;
            }
            out[dst_off..dst_off + bpp].copy_from_slice(&src[src_off..src_off + bpp]);
        }
    }

    image.with_data(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{Bgr, PixelSource};

    fn gradient(bpp: u16) -> RasterImage {
        RasterImage::from_fn(7, 5, bpp, |x, y| {
            Bgr::from_rgb(10 + x as u8, 20 + y as u8, 30 + (x * y) as u8)
        })
        .unwrap()
    }

    #[test]
    fn zero_shift_is_identity() {
        for bpp in [8, 24, 32] {
            let img = gradient(bpp);
            assert_eq!(shift(&img, 0, 0), img, "bpp={bpp}");
        }
    }

    #[test]
    fn content_moves_and_vacated_pixels_turn_black() {
        let img = gradient(24);
        let out = shift(&img, 2, -1);
        assert_eq!(out.bgr(2, 0), img.bgr(0, 1));
        assert_eq!(out.bgr(6, 3), img.bgr(4, 4));
        assert_eq!(out.bgr(1, 0), Some(Bgr::BLACK));
        assert_eq!(out.bgr(3, 4), Some(Bgr::BLACK));
        assert_eq!(out.header_bytes(), img.header_bytes());
        assert_eq!(out.data().len(), img.data().len());
    }

    #[test]
    fn shift_beyond_the_image_clears_it() {
        let img = gradient(32);
        let out = shift(&img, 0, 5);
        assert!(out.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn alpha_travels_with_the_pixel() {
        let img = gradient(32);
        let out = shift(&img, 1, 0);
        assert_eq!(out.pixel(1, 0), img.pixel(0, 0));
        assert_eq!(out.pixel(1, 0).map(|p| p[3]), Some(255));
        assert_eq!(out.pixel(0, 0).map(|p| p[3]), Some(0));
    }
}
