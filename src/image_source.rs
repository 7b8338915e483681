//! Image file loading.
//!
//! Decodes anything the `image` crate's default codecs understand (PNG,
//! JPEG, GIF, BMP, ...) into an RGBA8 buffer for the scanners. Lossy formats
//! work, but need a non-zero tolerance to produce a sensible block size.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::debug;

use crate::error::{Pixel2AnsiError, Pixel2AnsiResult};

/// Open and decode the image at `path`.
///
/// # Errors
///
/// - `Io` when the file cannot be opened
/// - `Decode` when the format is unknown or the data is corrupt
pub fn load_image(path: impl AsRef<Path>) -> Pixel2AnsiResult<RgbaImage> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|e| Pixel2AnsiError::io("open_image", e).with_path(path))?;

    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| Pixel2AnsiError::io("detect_format", e).with_path(path))?;
    let format = reader.format();
    let decoded = reader
        .decode()
        .map_err(|e| Pixel2AnsiError::decode(path, e))?;

    let image = decoded.to_rgba8();
    debug!(
        path = %path.display(),
        ?format,
        width = image.width(),
        height = image.height(),
        "image loaded"
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Write;

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprite.png");
        let img = RgbaImage::from_pixel(4, 3, Rgba([1, 2, 3, 255]));
        img.save_with_format(&path, ImageFormat::Png).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded.get_pixel(3, 2), &Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(dir.path().join("nope.png")).unwrap_err();
        assert_eq!(err.category(), "io");
        assert!(err.to_string().contains("nope.png"));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not an image").unwrap();
        let err = load_image(file.path()).unwrap_err();
        assert_eq!(err.category(), "decode");
    }
}
