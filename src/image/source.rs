use super::io::load_rgba_image;
use super::traits::{Bgr, PixelSource};
use crate::bitmap::RasterImage;
use crate::types::RowOrder;
use image::RgbaImage;
use std::path::Path;

/// An input picked by file extension: `.bmp` goes through the raw bitmap
/// reader so its stored row order and padding are preserved, everything
/// else is decoded to RGBA (row 0 at the top).
#[derive(Clone, Debug)]
pub enum SourceImage {
    Bitmap(RasterImage),
    Decoded(RgbaImage),
}

impl SourceImage {
    pub fn open(path: &Path) -> Result<Self, String> {
        let is_bmp = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("bmp"));
        if is_bmp {
            RasterImage::load(path).map(SourceImage::Bitmap)
        } else {
            load_rgba_image(path).map(SourceImage::Decoded)
        }
    }

    pub fn as_bitmap(&self) -> Option<&RasterImage> {
        match self {
            SourceImage::Bitmap(bmp) => Some(bmp),
            SourceImage::Decoded(_) => None,
        }
    }

    /// Row order of the buffer: from the header height sign for bitmaps,
    /// always top-down for decoded images.
    pub fn row_order(&self) -> RowOrder {
        match self {
            SourceImage::Bitmap(bmp) => bmp.header_row_order(),
            SourceImage::Decoded(_) => RowOrder::TopDown,
        }
    }

    /// Bits per pixel of the stored data; decoded images are always 32.
    pub fn bits_per_pixel(&self) -> u16 {
        match self {
            SourceImage::Bitmap(bmp) => bmp.bits_per_pixel(),
            SourceImage::Decoded(_) => 32,
        }
    }
}

impl PixelSource for SourceImage {
    fn width(&self) -> usize {
        match self {
            SourceImage::Bitmap(bmp) => bmp.width(),
            SourceImage::Decoded(img) => PixelSource::width(img),
        }
    }

    fn height(&self) -> usize {
        match self {
            SourceImage::Bitmap(bmp) => bmp.height(),
            SourceImage::Decoded(img) => PixelSource::height(img),
        }
    }

    fn bgr(&self, x: usize, y: usize) -> Option<Bgr> {
        match self {
            SourceImage::Bitmap(bmp) => bmp.bgr(x, y),
            SourceImage::Decoded(img) => img.bgr(x, y),
        }
    }
}
