use serde::Serialize;

/// One pixel colour in the byte order bitmaps store it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Bgr {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Bgr {
    pub const BLACK: Bgr = Bgr { b: 0, g: 0, r: 0 };
    pub const WHITE: Bgr = Bgr {
        b: 255,
        g: 255,
        r: 255,
    };

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r }
    }

    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self { b: v, g: v, r: v }
    }

    /// Sum of absolute per-channel differences.
    #[inline]
    pub fn channel_distance(self, other: Bgr) -> u32 {
        u32::from(self.r.abs_diff(other.r))
            + u32::from(self.g.abs_diff(other.g))
            + u32::from(self.b.abs_diff(other.b))
    }

    /// `true` when every channel is strictly above `threshold`.
    #[inline]
    pub fn all_above(self, threshold: u8) -> bool {
        self.r > threshold && self.g > threshold && self.b > threshold
    }
}

/// Read-only access to pixel colours in buffer coordinates.
///
/// `y` indexes rows in the order they are stored; whether row 0 is the top
/// or the bottom of the picture is a property of the source, see
/// [`crate::types::RowOrder`].
pub trait PixelSource {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Colour at `(x, y)`, or `None` when the stored data does not cover it.
    fn bgr(&self, x: usize, y: usize) -> Option<Bgr>;
}

impl PixelSource for image::RgbaImage {
    #[inline]
    fn width(&self) -> usize {
        image::RgbaImage::width(self) as usize
    }
    #[inline]
    fn height(&self) -> usize {
        image::RgbaImage::height(self) as usize
    }
    #[inline]
    fn bgr(&self, x: usize, y: usize) -> Option<Bgr> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.get_pixel_checked(x, y)
            .map(|px| Bgr::from_rgb(px[0], px[1], px[2]))
    }
}

/// View of a source with its rows in reverse order, so a bottom-up buffer
/// reads in the same frame as a top-down one.
#[derive(Clone, Copy, Debug)]
pub struct FlippedRows<'a, P: ?Sized>(pub &'a P);

impl<P: PixelSource + ?Sized> PixelSource for FlippedRows<'_, P> {
    #[inline]
    fn width(&self) -> usize {
        self.0.width()
    }
    #[inline]
    fn height(&self) -> usize {
        self.0.height()
    }
    #[inline]
    fn bgr(&self, x: usize, y: usize) -> Option<Bgr> {
        let h = self.0.height();
        if y >= h {
            return None;
        }
        self.0.bgr(x, h - 1 - y)
    }
}
