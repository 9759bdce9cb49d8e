//! Offset/scale that registers a mask's content box onto an image's.
use crate::bbox::{compute_bbox, sample_background, BoundingBox, ContentRule, ContentThresholds};
use crate::image::{Bgr, FlippedRows, PixelSource, SourceImage};
use crate::types::RowOrder;
use log::{debug, warn};
use nalgebra::{Matrix3, Vector3};
use serde::Serialize;

/// Translation plus per-axis scale about the mask box center. No rotation
/// or shear.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AlignmentTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Mask box center the scale is applied about.
    pub pivot: [f64; 2],
}

impl AlignmentTransform {
    pub fn identity() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            pivot: [0.0, 0.0],
        }
    }

    /// Affine matrix mapping mask coordinates to image coordinates:
    /// `p' = S (p - pivot) + pivot + offset`.
    pub fn to_matrix(&self) -> Matrix3<f64> {
        let [px, py] = self.pivot;
        Matrix3::new(
            self.scale_x,
            0.0,
            px + self.offset_x - self.scale_x * px,
            0.0,
            self.scale_y,
            py + self.offset_y - self.scale_y * py,
            0.0,
            0.0,
            1.0,
        )
    }

    pub fn apply_points(&self, pts: &[[f64; 2]]) -> Vec<[f64; 2]> {
        let m = self.to_matrix();
        pts.iter()
            .map(|p| {
                let v = m * Vector3::new(p[0], p[1], 1.0);
                [v[0], v[1]]
            })
            .collect()
    }

    /// Offsets rounded to whole pixels (half away from zero), in buffer rows,
    /// ready for [`crate::shift::shift`].
    pub fn pixel_shift(&self) -> (i64, i64) {
        (self.offset_x.round() as i64, self.offset_y.round() as i64)
    }

    /// Vertical offset expressed in screen rows (positive = down).
    pub fn screen_offset_y(&self, row_order: RowOrder) -> f64 {
        row_order.flip_dy_f64(self.offset_y)
    }
}

#[inline]
fn axis_scale(target: i64, source: i64) -> f64 {
    if source > 0 {
        target as f64 / source as f64
    } else {
        1.0
    }
}

/// Offset = image center − mask center; scale = image size / mask size per
/// axis, or 1.0 where the mask size is not positive.
pub fn compute_alignment(image_box: &BoundingBox, mask_box: &BoundingBox) -> AlignmentTransform {
    let [icx, icy] = image_box.center();
    let [mcx, mcy] = mask_box.center();
    AlignmentTransform {
        offset_x: icx - mcx,
        offset_y: icy - mcy,
        scale_x: axis_scale(image_box.width(), mask_box.width()),
        scale_y: axis_scale(image_box.height(), mask_box.height()),
        pivot: [mcx, mcy],
    }
}

/// Everything the aligner derived for one image/mask pair.
#[derive(Clone, Debug, Serialize)]
pub struct Alignment {
    pub background: Bgr,
    pub image_box: BoundingBox,
    pub mask_box: BoundingBox,
    pub transform: AlignmentTransform,
}

/// Scan `image` in image mode (background sampled from its first pixel) and
/// `mask` in mask mode, then align the two boxes. Both sources must index
/// rows in the same order; see [`align_sources`] for mixed inputs.
pub fn align_mask_to_image<I, M>(
    image: &I,
    mask: &M,
    thresholds: &ContentThresholds,
) -> Result<Alignment, String>
where
    I: PixelSource,
    M: PixelSource,
{
    let background =
        sample_background(image).ok_or("image has no pixel data to sample a background from")?;
    Ok(align_with_background(image, mask, background, thresholds))
}

/// Align two opened files. When their row orders differ the image is read
/// flipped, so both boxes and the resulting shift are in the mask's buffer
/// rows. The background is still the image's first stored pixel.
pub fn align_sources(
    image: &SourceImage,
    mask: &SourceImage,
    thresholds: &ContentThresholds,
) -> Result<Alignment, String> {
    let background =
        sample_background(image).ok_or("image has no pixel data to sample a background from")?;
    if image.row_order() == mask.row_order() {
        return Ok(align_with_background(image, mask, background, thresholds));
    }
    debug!(
        "image rows are {}, mask rows are {}; reading the image flipped",
        image.row_order(),
        mask.row_order()
    );
    Ok(align_with_background(
        &FlippedRows(image),
        mask,
        background,
        thresholds,
    ))
}

fn align_with_background<I, M>(
    image: &I,
    mask: &M,
    background: Bgr,
    thresholds: &ContentThresholds,
) -> Alignment
where
    I: PixelSource,
    M: PixelSource,
{
    let image_rule = ContentRule::DiffersFrom {
        background,
        tolerance: thresholds.background_tolerance,
    };
    let mask_rule = ContentRule::NearWhite {
        threshold: thresholds.mask_brightness,
    };

    let image_box = compute_bbox(image, &image_rule);
    let mask_box = compute_bbox(mask, &mask_rule);
    if image_box.is_empty() {
        warn!("no pixel differs from the image background; image box is degenerate");
    }
    if mask_box.is_empty() {
        warn!("no near-white pixel in the mask; mask box is degenerate");
    }

    let transform = compute_alignment(&image_box, &mask_box);
    debug!(
        "alignment offset=({:.2}, {:.2}) scale=({:.4}, {:.4})",
        transform.offset_x, transform.offset_y, transform.scale_x, transform.scale_y
    );
    Alignment {
        background,
        image_box,
        mask_box,
        transform,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn aligning_a_box_to_itself_is_identity() {
        let b = BoundingBox::from_corners(3, 8, 40, 19);
        let t = compute_alignment(&b, &b);
        assert_eq!((t.offset_x, t.offset_y), (0.0, 0.0));
        assert_eq!((t.scale_x, t.scale_y), (1.0, 1.0));
        assert!((t.to_matrix() - Matrix3::identity()).abs().max() < EPS);
    }

    #[test]
    fn offset_and_scale_follow_centers_and_sizes() {
        let image = BoundingBox::from_corners(10, 20, 50, 60);
        let mask = BoundingBox::from_corners(0, 0, 20, 80);
        let t = compute_alignment(&image, &mask);
        assert_eq!(t.offset_x, 30.0 - 10.0);
        assert_eq!(t.offset_y, 40.0 - 40.0);
        assert_eq!(t.scale_x, 2.0);
        assert_eq!(t.scale_y, 0.5);
    }

    #[test]
    fn mask_corners_map_onto_image_corners() {
        let image = BoundingBox::from_corners(10, 20, 50, 60);
        let mask = BoundingBox::from_corners(3, 7, 23, 87);
        let t = compute_alignment(&image, &mask);
        let mapped = t.apply_points(&mask.corners());
        for (got, want) in mapped.iter().zip(image.corners().iter()) {
            assert!(
                (got[0] - want[0]).abs() < EPS && (got[1] - want[1]).abs() < EPS,
                "mapped {got:?}, expected {want:?}"
            );
        }
    }

    #[test]
    fn degenerate_mask_axis_scales_by_one() {
        let image = BoundingBox::from_corners(0, 0, 10, 10);
        let line = BoundingBox::from_corners(2, 5, 8, 5);
        let t = compute_alignment(&image, &line);
        assert_eq!(t.scale_x, 10.0 / 6.0);
        assert_eq!(t.scale_y, 1.0);

        let empty = BoundingBox::empty(16, 16);
        let t = compute_alignment(&image, &empty);
        assert_eq!((t.scale_x, t.scale_y), (1.0, 1.0));
        assert!(t.offset_x.is_finite() && t.offset_y.is_finite());
    }

    #[test]
    fn pixel_shift_rounds_half_away_from_zero() {
        let t = AlignmentTransform {
            offset_x: -2.5,
            offset_y: 2.5,
            ..AlignmentTransform::identity()
        };
        assert_eq!(t.pixel_shift(), (-3, 3));
        assert_eq!(t.screen_offset_y(RowOrder::BottomUp), -2.5);
        assert_eq!(t.screen_offset_y(RowOrder::TopDown), 2.5);
    }
}
