use image::{Rgba, RgbaImage};

/// Pixels brighter than this on every channel count as white background.
pub const WHITE_BACKGROUND_THRESHOLD: u8 = 240;

const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Replace near-white pixels with transparent white. Returns how many pixels
/// were replaced.
pub fn remove_white_background(img: &mut RgbaImage, threshold: u8) -> usize {
    let mut replaced = 0;
    for px in img.pixels_mut() {
        let [r, g, b, _] = px.0;
        if r > threshold && g > threshold && b > threshold {
            *px = TRANSPARENT_WHITE;
            replaced += 1;
        }
    }
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_near_white_pixels_become_transparent() {
        let mut img = RgbaImage::from_fn(4, 1, |x, _| match x {
            0 => Rgba([255, 255, 255, 255]),
            1 => Rgba([241, 250, 244, 255]),
            2 => Rgba([240, 255, 255, 255]),
            _ => Rgba([12, 34, 56, 255]),
        });
        assert_eq!(remove_white_background(&mut img, WHITE_BACKGROUND_THRESHOLD), 2);
        assert_eq!(img.get_pixel(0, 0), &TRANSPARENT_WHITE);
        assert_eq!(img.get_pixel(1, 0), &TRANSPARENT_WHITE);
        assert_eq!(img.get_pixel(2, 0), &Rgba([240, 255, 255, 255]));
        assert_eq!(img.get_pixel(3, 0), &Rgba([12, 34, 56, 255]));
    }
}
