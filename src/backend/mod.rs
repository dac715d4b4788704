//! Native capability backend — the other side of the bridge.
//!
//! Owns camera I/O and photo persistence, and speaks the wire conventions
//! external backends use: `take_photo` replies with a `(bytes, mime)`
//! tuple, `save_photo` takes a camelCase `mimeType` argument, and every
//! failure is flattened to an opaque description string.

mod camera;
mod storage;

pub use camera::{CameraError, CameraSource, FileCamera, Photo, TestPatternCamera};
pub use storage::{default_photo_dir, save_photo, SaveError};

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::bridge::{Bridge, InvokeError};

pub struct NativeBackend {
    camera: Box<dyn CameraSource>,
    photo_dir: PathBuf,
}

impl NativeBackend {
    pub fn new(camera: Box<dyn CameraSource>, photo_dir: PathBuf) -> Self {
        Self { camera, photo_dir }
    }

    fn take_photo(&self) -> Result<Value, String> {
        let photo = self.camera.capture().map_err(|e| e.to_string())?;
        serde_json::to_value((photo.bytes, photo.mime_type)).map_err(|e| e.to_string())
    }

    fn save_photo(&self, args: Option<Value>) -> Result<Value, String> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct SaveArgs {
            bytes: Vec<u8>,
            mime_type: String,
        }

        let args = args.ok_or_else(|| "save_photo requires arguments".to_owned())?;
        let args: SaveArgs = serde_json::from_value(args)
            .map_err(|e| format!("bad save_photo arguments: {e}"))?;

        let path = save_photo(&self.photo_dir, &args.bytes, &args.mime_type)
            .map_err(|e| e.to_string())?;
        Ok(Value::String(path.to_string_lossy().into_owned()))
    }
}

#[async_trait]
impl Bridge for NativeBackend {
    async fn invoke(&self, operation: &str, args: Option<Value>) -> Result<Value, InvokeError> {
        log::debug!("backend invoke: {operation}");
        let result = match operation {
            "take_photo" => self.take_photo(),
            "save_photo" => self.save_photo(args),
            other => Err(format!("unknown operation: {other}")),
        };
        result.map_err(InvokeError)
    }
}
