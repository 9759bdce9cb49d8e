//! I/O helpers for decoded images and JSON.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA buffer.
//! - `save_image`: write a decoded image, format chosen from the extension.
//! - `describe_image`: format, size and colour type of an image file.
//! - `write_json_file`: pretty-print a serializable value to disk.
use image::{DynamicImage, ImageReader, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Load an image from disk and convert to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImage, String> {
    let img = open_image(path)?;
    Ok(img.into_rgba8())
}

/// Load an image from disk without converting it.
pub fn open_image(path: &Path) -> Result<DynamicImage, String> {
    image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))
}

/// Save a decoded image, creating parent directories as needed.
pub fn save_image(image: &DynamicImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an RGBA buffer; the format follows the file extension.
pub fn save_rgba_image(image: &RgbaImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// What `image_info` prints for one file.
#[derive(Clone, Debug, Serialize)]
pub struct ImageDescription {
    pub path: PathBuf,
    /// Container format guessed from the file content, if recognised.
    pub format: Option<String>,
    pub width: u32,
    pub height: u32,
    pub color: String,
}

pub fn describe_image(path: &Path) -> Result<ImageDescription, String> {
    let reader = ImageReader::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .with_guessed_format()
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let format = reader.format().map(|f| format!("{f:?}"));
    let img = reader
        .decode()
        .map_err(|e| format!("Failed to decode {}: {e}", path.display()))?;
    Ok(ImageDescription {
        path: path.to_path_buf(),
        format,
        width: img.width(),
        height: img.height(),
        color: format!("{:?}", img.color()),
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// `dir/<stem><suffix>.<ext>`, with `dir` defaulting to the input's parent.
pub fn derived_path(input: &Path, dir: Option<&Path>, suffix: &str, ext: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    let dir = dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{stem}{suffix}.{ext}"))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_path_defaults_to_input_dir() {
        let p = derived_path(Path::new("assets/cars/slim.png"), None, "_fixed", "png");
        assert_eq!(p, PathBuf::from("assets/cars/slim_fixed.png"));
    }

    #[test]
    fn derived_path_uses_explicit_dir() {
        let p = derived_path(
            Path::new("assets/cars/slim.png"),
            Some(Path::new("out")),
            "_top",
            "png",
        );
        assert_eq!(p, PathBuf::from("out/slim_top.png"));
    }

    #[test]
    fn describe_reports_png_dimensions() {
        let dir = std::env::temp_dir().join(format!("asset_align_io_{}", std::process::id()));
        let path = dir.join("sample.png");
        let img = RgbaImage::new(7, 3);
        save_rgba_image(&img, &path).expect("save png");
        let desc = describe_image(&path).expect("describe png");
        assert_eq!((desc.width, desc.height), (7, 3));
        assert_eq!(desc.format.as_deref(), Some("Png"));
        assert_eq!(desc.color, "Rgba8");
        let _ = fs::remove_dir_all(&dir);
    }
}
