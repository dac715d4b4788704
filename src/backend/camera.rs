//! Camera sources — the infrastructure layer behind `take_photo`.
//!
//! Real capture hardware sits behind the [`CameraSource`] trait. The two
//! bundled sources keep the app usable everywhere: one serves a
//! pre-captured image file, the other renders a test card in memory.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

/// One captured frame: encoded bytes plus their MIME type.
#[derive(Debug)]
pub struct Photo {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

pub trait CameraSource: Send + Sync {
    fn capture(&self) -> Result<Photo, CameraError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    #[error("failed to read camera fixture {path}: {source}")]
    FixtureRead {
        path: String,
        source: std::io::Error,
    },

    #[error("test pattern encoding failed: {0}")]
    EncodingFailed(String),
}

/// Serves a pre-captured image file, standing in for capture hardware.
/// The MIME type comes from the file extension.
pub struct FileCamera {
    path: PathBuf,
}

impl FileCamera {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CameraSource for FileCamera {
    fn capture(&self) -> Result<Photo, CameraError> {
        let bytes = fs::read(&self.path).map_err(|source| CameraError::FixtureRead {
            path: self.path.display().to_string(),
            source,
        })?;
        let mime_type = mime_guess::from_path(&self.path)
            .first_or_octet_stream()
            .to_string();
        Ok(Photo { bytes, mime_type })
    }
}

/// Renders a diagonal RGB gradient and encodes it as PNG, so the panel
/// runs with no hardware and no fixture file at all.
pub struct TestPatternCamera {
    width: u32,
    height: u32,
}

impl TestPatternCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for TestPatternCamera {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

impl CameraSource for TestPatternCamera {
    fn capture(&self) -> Result<Photo, CameraError> {
        let mut frame = RgbaImage::new(self.width, self.height);
        for (x, y, pixel) in frame.enumerate_pixels_mut() {
            let r = (x * 255 / self.width) as u8;
            let g = (y * 255 / self.height) as u8;
            *pixel = Rgba([r, g, 128, 255]);
        }

        let mut png: Vec<u8> = Vec::new();
        DynamicImage::ImageRgba8(frame)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| CameraError::EncodingFailed(e.to_string()))?;

        Ok(Photo {
            bytes: png,
            mime_type: "image/png".to_owned(),
        })
    }
}
