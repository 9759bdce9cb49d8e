//! Uncompressed bitmap reader/writer.
//!
//! Only the fields the aligner needs are interpreted: pixel data offset,
//! width, height and bits per pixel. Everything in front of the pixel data
//! is kept verbatim so a transformed buffer can be written back with the
//! header it was read with.
use crate::image::io::ensure_parent_dir;
use crate::image::{Bgr, PixelSource};
use crate::types::RowOrder;
use std::fs;
use std::path::Path;

/// File header (14 bytes) plus BITMAPINFOHEADER (40 bytes).
pub const HEADER_LEN: usize = 54;

const PIXEL_OFFSET_AT: usize = 10;
const WIDTH_AT: usize = 18;
const HEIGHT_AT: usize = 22;
const BPP_AT: usize = 28;

const INFO_HEADER_LEN: u32 = 40;
const PIXELS_PER_METER: i32 = 2835;
const GRAY_PALETTE_LEN: usize = 256 * 4;

/// Bytes per row including padding to a 4-byte boundary.
#[inline]
pub fn row_stride(width: usize, bits_per_pixel: u16) -> usize {
    (width * bits_per_pixel as usize).div_ceil(32) * 4
}

/// `(stride, stride * height)`, or `None` when either overflows. Every pixel
/// offset of a layout that passes is below the returned total.
fn checked_layout(width: usize, height: usize, bits_per_pixel: u16) -> Option<(usize, usize)> {
    let stride = width
        .checked_mul(bits_per_pixel as usize)?
        .div_ceil(32)
        .checked_mul(4)?;
    Some((stride, stride.checked_mul(height)?))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    bits_per_pixel: u16,
    stride: usize,
    /// Sign of the stored height: negative means rows are stored top-down.
    header_top_down: bool,
    header: Vec<u8>,
    data: Vec<u8>,
}

impl RasterImage {
    /// Read and parse a bitmap file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let bytes =
            fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        Self::parse(&bytes).map_err(|e| format!("File {}: {e}", path.display()))
    }

    /// Parse a bitmap held in memory.
    pub fn parse(bytes: &[u8]) -> Result<Self, String> {
        if bytes.len() < HEADER_LEN {
            return Err(format!(
                "too small ({} bytes, header needs {HEADER_LEN})",
                bytes.len()
            ));
        }
        let pixel_offset = read_u32(bytes, PIXEL_OFFSET_AT) as usize;
        let raw_width = read_i32(bytes, WIDTH_AT);
        let raw_height = read_i32(bytes, HEIGHT_AT);
        let bits_per_pixel = read_u16(bytes, BPP_AT);

        if pixel_offset > bytes.len() {
            return Err(format!(
                "pixel data offset {pixel_offset} beyond end of file ({} bytes)",
                bytes.len()
            ));
        }
        if !matches!(bits_per_pixel, 8 | 24 | 32) {
            return Err(format!("unsupported bits per pixel {bits_per_pixel}"));
        }

        let width = raw_width.unsigned_abs() as usize;
        let height = raw_height.unsigned_abs() as usize;
        let (stride, expected) = checked_layout(width, height, bits_per_pixel).ok_or_else(|| {
            format!("dimensions {width}x{height}@{bits_per_pixel} exceed the address space")
        })?;
        let data = bytes[pixel_offset..].to_vec();
        if data.len() < expected {
            log::debug!(
                "bitmap pixel data is {} bytes, {width}x{height}@{bits_per_pixel} needs {expected}",
                data.len()
            );
        }

        Ok(Self {
            width,
            height,
            bits_per_pixel,
            stride,
            header_top_down: raw_height < 0,
            header: bytes[..pixel_offset].to_vec(),
            data,
        })
    }

    /// Zero-filled bottom-up bitmap with a standard header. 8-bit images get
    /// a grayscale palette.
    pub fn blank(width: usize, height: usize, bits_per_pixel: u16) -> Result<Self, String> {
        if !matches!(bits_per_pixel, 8 | 24 | 32) {
            return Err(format!("unsupported bits per pixel {bits_per_pixel}"));
        }
        let raw_width =
            i32::try_from(width).map_err(|_| format!("width {width} does not fit a bitmap"))?;
        let raw_height =
            i32::try_from(height).map_err(|_| format!("height {height} does not fit a bitmap"))?;
        let (stride, image_size) = checked_layout(width, height, bits_per_pixel)
            .ok_or_else(|| format!("{width}x{height} bitmap exceeds the address space"))?;
        let palette_len = if bits_per_pixel == 8 {
            GRAY_PALETTE_LEN
        } else {
            0
        };
        let pixel_offset = HEADER_LEN + palette_len;
        let file_size = u32::try_from(pixel_offset + image_size)
            .map_err(|_| format!("{width}x{height} bitmap exceeds 4 GiB"))?;

        let mut header = Vec::with_capacity(pixel_offset);
        header.extend_from_slice(b"BM");
        header.extend_from_slice(&file_size.to_le_bytes());
        header.extend_from_slice(&0u32.to_le_bytes());
        header.extend_from_slice(&(pixel_offset as u32).to_le_bytes());
        header.extend_from_slice(&INFO_HEADER_LEN.to_le_bytes());
        header.extend_from_slice(&raw_width.to_le_bytes());
        header.extend_from_slice(&raw_height.to_le_bytes());
        header.extend_from_slice(&1u16.to_le_bytes());
        header.extend_from_slice(&bits_per_pixel.to_le_bytes());
        header.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
        header.extend_from_slice(&(image_size as u32).to_le_bytes());
        header.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
        header.extend_from_slice(&PIXELS_PER_METER.to_le_bytes());
        header.extend_from_slice(&0u32.to_le_bytes());
        header.extend_from_slice(&0u32.to_le_bytes());
        if bits_per_pixel == 8 {
            for v in 0..=255u8 {
                header.extend_from_slice(&[v, v, v, 0]);
            }
        }
        debug_assert_eq!(header.len(), pixel_offset);

        Ok(Self {
            width,
            height,
            bits_per_pixel,
            stride,
            header_top_down: false,
            header,
            data: vec![0; image_size],
        })
    }

    /// Build a bitmap whose pixel at buffer coordinates `(x, y)` is `f(x, y)`.
    /// 32-bit pixels get alpha 255; 8-bit pixels store the channel average.
    pub fn from_fn(
        width: usize,
        height: usize,
        bits_per_pixel: u16,
        mut f: impl FnMut(usize, usize) -> Bgr,
    ) -> Result<Self, String> {
        let mut img = Self::blank(width, height, bits_per_pixel)?;
        let bpp = img.bytes_per_pixel();
        for y in 0..height {
            for x in 0..width {
                let off = img.pixel_offset(x, y);
                let px = f(x, y);
                let dst = &mut img.data[off..off + bpp];
                match bpp {
                    1 => {
                        dst[0] =
                            ((u16::from(px.r) + u16::from(px.g) + u16::from(px.b)) / 3) as u8
                    }
                    _ => {
                        dst[0] = px.b;
                        dst[1] = px.g;
                        dst[2] = px.r;
                        if bpp == 4 {
                            dst[3] = 255;
                        }
                    }
                }
            }
        }
        Ok(img)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        self.bits_per_pixel as usize / 8
    }

    /// Bytes between rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel bytes in stored row order.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Everything in front of the pixel data, palette included.
    #[inline]
    pub fn header_bytes(&self) -> &[u8] {
        &self.header
    }

    /// Row order implied by the sign of the stored height. Informational
    /// only; callers choose the order they work in explicitly.
    pub fn header_row_order(&self) -> RowOrder {
        if self.header_top_down {
            RowOrder::TopDown
        } else {
            RowOrder::BottomUp
        }
    }

    /// Byte offset of `(x, y)` into [`data`](Self::data). May point past the
    /// end of a truncated buffer.
    #[inline]
    pub fn pixel_offset(&self, x: usize, y: usize) -> usize {
        y * self.stride + x * self.bytes_per_pixel()
    }

    /// Raw bytes of one pixel, `None` outside the image or the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = self.pixel_offset(x, y);
        self.data.get(off..off + self.bytes_per_pixel())
    }

    /// Same header and geometry with a different pixel buffer.
    pub(crate) fn with_data(&self, data: Vec<u8>) -> Self {
        Self {
            data,
            header: self.header.clone(),
            ..*self
        }
    }

    /// Header followed by pixel data.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.header.len() + self.data.len());
        out.extend_from_slice(&self.header);
        out.extend_from_slice(&self.data);
        out
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        ensure_parent_dir(path)?;
        fs::write(path, self.encode())
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))
    }
}

impl PixelSource for RasterImage {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    /// Needs only the colour bytes; a missing alpha byte does not hide the
    /// pixel.
    fn bgr(&self, x: usize, y: usize) -> Option<Bgr> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = self.pixel_offset(x, y);
        let colour_len = self.bytes_per_pixel().min(3);
        Some(match *self.data.get(off..off + colour_len)? {
            [v] => Bgr::gray(v),
            [b, g, r] => Bgr { b, g, r },
            _ => return None,
        })
    }
}

#[inline]
fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

#[inline]
fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[inline]
fn read_i32(bytes: &[u8], at: usize) -> i32 {
    read_u32(bytes, at) as i32
}
