//! Serializable alignment report and its plain-text rendering.
use crate::align::{Alignment, AlignmentTransform};
use crate::bbox::{BoundingBox, ContentThresholds};
use crate::image::{Bgr, PixelSource, SourceImage};
use crate::types::RowOrder;
use nalgebra::Matrix3;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
    pub bits_per_pixel: u16,
    /// Stride and data size are only known for raw bitmaps.
    pub stride: Option<usize>,
    pub data_len: Option<usize>,
}

impl InputDescriptor {
    pub fn new(path: &Path, source: &SourceImage) -> Self {
        let bitmap = source.as_bitmap();
        Self {
            path: path.to_path_buf(),
            width: source.width(),
            height: source.height(),
            bits_per_pixel: source.bits_per_pixel(),
            stride: bitmap.map(|b| b.stride()),
            data_len: bitmap.map(|b| b.data().len()),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentReport {
    pub image: InputDescriptor,
    pub mask: InputDescriptor,
    pub thresholds: ContentThresholds,
    pub background: Bgr,
    pub image_box: BoundingBox,
    pub mask_box: BoundingBox,
    pub transform: AlignmentTransform,
    pub matrix: Matrix3<f64>,
    pub row_order: RowOrder,
    /// `transform.offset_y` in screen rows (positive = down).
    pub screen_offset_y: f64,
    /// Rounded `(dx, dy)` in buffer coordinates.
    pub pixel_shift: [i64; 2],
}

impl AlignmentReport {
    pub fn new(
        image: InputDescriptor,
        mask: InputDescriptor,
        thresholds: ContentThresholds,
        alignment: &Alignment,
        row_order: RowOrder,
    ) -> Self {
        let transform = alignment.transform;
        let (dx, dy) = transform.pixel_shift();
        Self {
            image,
            mask,
            thresholds,
            background: alignment.background,
            image_box: alignment.image_box,
            mask_box: alignment.mask_box,
            transform,
            matrix: transform.to_matrix(),
            row_order,
            screen_offset_y: transform.screen_offset_y(row_order),
            pixel_shift: [dx, dy],
        }
    }

    pub fn print_text_summary(&self) {
        for input in [&self.image, &self.mask] {
            println!(
                "File: {}, Width: {}, Height: {}, BPP: {}",
                input.path.display(),
                input.width,
                input.height,
                input.bits_per_pixel
            );
        }
        let bg = self.background;
        println!("Background Color: R={}, G={}, B={}", bg.r, bg.g, bg.b);
        println!("Image BBox: {}", self.image_box);
        println!("Mask BBox: {}", self.mask_box);
        println!("OFFSET_X: {}", self.transform.offset_x);
        println!("OFFSET_Y: {}", self.transform.offset_y);
        println!("SCALE_X: {}", self.transform.scale_x);
        println!("SCALE_Y: {}", self.transform.scale_y);
        println!(
            "Screen OFFSET_Y ({}): {} (positive = down)",
            self.row_order, self.screen_offset_y
        );
        println!(
            "Pixel shift (buffer): dx={} dy={}",
            self.pixel_shift[0], self.pixel_shift[1]
        );
    }
}
