//! Sprite/mask alignment heuristics and small asset-preparation helpers.
//!
//! The core is the bounding-box aligner: [`bitmap::RasterImage`] reads an
//! uncompressed bitmap, [`bbox::compute_bbox`] finds the content box under a
//! [`bbox::ContentRule`], and [`align::compute_alignment`] derives the offset
//! and scale that map a mask box onto an image box. [`shift::shift`] applies
//! a whole-pixel translation to a bitmap.
//!
//! ```no_run
//! use asset_align::prelude::*;
//!
//! # fn main() -> Result<(), String> {
//! let image = RasterImage::load("car.bmp".as_ref())?;
//! let mask = RasterImage::load("car_mask.bmp".as_ref())?;
//! let outcome = align_mask_to_image(&image, &mask, &ContentThresholds::default())?;
//! let (dx, dy) = outcome.transform.pixel_shift();
//! let aligned = shift(&mask, dx, dy);
//! aligned.save("car_mask_aligned.bmp".as_ref())?;
//! # Ok(())
//! # }
//! ```

// Core aligner
pub mod align;
pub mod bbox;
pub mod bitmap;
pub mod shift;
pub mod types;

// Reporting, configuration and I/O used by the tools.
pub mod config;
pub mod diagnostics;
pub mod image;

// Asset helpers that sit next to the aligner.
pub mod raster;
pub mod translations;

// --- High-level re-exports -------------------------------------------------

pub use crate::align::{
    align_mask_to_image, align_sources, compute_alignment, Alignment, AlignmentTransform,
};
pub use crate::bbox::{compute_bbox, BoundingBox, ContentRule, ContentThresholds, ScanMode};
pub use crate::bitmap::RasterImage;
pub use crate::diagnostics::AlignmentReport;
pub use crate::types::{Region, RowOrder};

// --- Prelude ---------------------------------------------------------------

/// Everything the alignment tools need in one import.
pub mod prelude {
    pub use crate::align::{
        align_mask_to_image, align_sources, compute_alignment, AlignmentTransform,
    };
    pub use crate::bbox::{compute_bbox, BoundingBox, ContentRule, ContentThresholds, ScanMode};
    pub use crate::bitmap::RasterImage;
    pub use crate::image::{Bgr, PixelSource};
    pub use crate::shift::shift;
    pub use crate::types::RowOrder;
}
