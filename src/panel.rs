//! Interaction controller — wires the two user actions to the backend
//! bridge and drives the status line and photo preview.
//!
//! The panel owns the single piece of session state: the most recently
//! captured photo. Capture clears it before contacting the backend, so a
//! failed capture never leaves a stale image behind.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::bridge::{resolve_invoke, BridgeRegistry, ConfigError, InvokeError};
use crate::normalize::{normalize_capture_result, CapturedImage, ShapeError};
use crate::preview::ObjectUrlStore;

/// The two UI elements the panel drives. Implementations decide how the
/// status line and the preview are actually rendered.
pub trait PanelUi: Send + Sync {
    /// Overwrites the human-readable status line. No history is kept.
    fn set_status(&self, text: &str);

    /// Points the preview element at a display-object URL, or clears it.
    fn set_preview_source(&self, url: Option<&str>);
}

/// Any failure terminal to a single panel action. All variants end up as
/// status text; none are retried.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Backend(#[from] InvokeError),
}

pub struct Panel {
    ui: Arc<dyn PanelUi>,
    host: Option<BridgeRegistry>,
    urls: ObjectUrlStore,
    captured: Option<CapturedImage>,
    preview_url: Option<String>,
}

impl Panel {
    /// `host` is `None` when the process has no bridge registry at all;
    /// every backend operation then fails with a configuration error.
    pub fn new(ui: Arc<dyn PanelUi>, host: Option<BridgeRegistry>) -> Self {
        Self {
            ui,
            host,
            urls: ObjectUrlStore::new(),
            captured: None,
            preview_url: None,
        }
    }

    /// Entry point for the capture trigger: failures become status text.
    pub async fn trigger_capture(&mut self) {
        if let Err(err) = self.capture().await {
            log::error!("capture failed: {err}");
            self.ui.set_status(&format!("error: {err}"));
        }
    }

    /// Entry point for the save trigger: failures become status text.
    pub async fn trigger_persist(&mut self) {
        if let Err(err) = self.persist().await {
            log::error!("save failed: {err}");
            self.ui.set_status(&format!("error: {err}"));
        }
    }

    /// Requests a fresh photo from the backend, previews it, and holds it
    /// for a later save.
    pub async fn capture(&mut self) -> Result<(), PanelError> {
        self.ui.set_status("capturing...");
        self.clear_preview();
        self.captured = None;

        let bridge = resolve_invoke(self.host.as_ref())?;
        let reply = bridge.invoke("take_photo", None).await?;
        let image = normalize_capture_result(&reply)?;

        let url = self.urls.create(image.bytes.clone(), &image.mime_type);
        self.ui.set_preview_source(Some(&url));
        self.ui.set_status(&format!(
            "capture complete ({}, {} bytes)",
            image.mime_type,
            image.bytes.len()
        ));
        log::info!("captured {} bytes ({})", image.bytes.len(), image.mime_type);

        self.preview_url = Some(url);
        self.captured = Some(image);
        Ok(())
    }

    /// Asks the backend to store the held photo. Without one this is a
    /// local no-op reported to the user; the bridge is never contacted.
    pub async fn persist(&mut self) -> Result<(), PanelError> {
        let Some(image) = &self.captured else {
            self.ui.set_status("nothing to save; capture a photo first");
            return Ok(());
        };

        self.ui.set_status("saving...");

        let bridge = resolve_invoke(self.host.as_ref())?;
        let reply = bridge
            .invoke(
                "save_photo",
                Some(json!({
                    "bytes": image.bytes,
                    "mimeType": image.mime_type,
                })),
            )
            .await?;

        // The location is an opaque human-readable identifier; tolerate a
        // backend that serializes it as something other than a bare string.
        let location = match &reply {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        self.ui.set_status(&format!("saved: {location}"));
        log::info!("photo saved to {location}");
        Ok(())
    }

    /// Clears the preview element and releases the previous display-object
    /// URL, which would otherwise accumulate one blob per capture.
    fn clear_preview(&mut self) {
        self.ui.set_preview_source(None);
        if let Some(old) = self.preview_url.take() {
            self.urls.revoke(&old);
        }
    }

    pub fn captured_image(&self) -> Option<&CapturedImage> {
        self.captured.as_ref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    /// Number of display-object URLs currently held alive.
    pub fn live_object_urls(&self) -> usize {
        self.urls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingUi {
        statuses: Mutex<Vec<String>>,
    }

    impl RecordingUi {
        fn last_status(&self) -> String {
            self.statuses.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    impl PanelUi for RecordingUi {
        fn set_status(&self, text: &str) {
            self.statuses.lock().unwrap().push(text.to_owned());
        }

        fn set_preview_source(&self, _url: Option<&str>) {}
    }

    #[tokio::test]
    async fn persist_with_a_held_image_but_no_registry_is_a_config_error() {
        let ui = Arc::new(RecordingUi::default());
        let mut panel = Panel::new(ui.clone(), None);
        panel.captured = Some(CapturedImage {
            bytes: vec![1, 2, 3],
            mime_type: "image/png".into(),
        });

        let err = panel.persist().await.unwrap_err();
        assert!(matches!(err, PanelError::Config(ConfigError::RegistryMissing)));
        // The precondition passed, so the action got as far as "saving".
        assert_eq!(ui.last_status(), "saving...");
    }

    #[tokio::test]
    async fn capture_with_no_registry_is_a_config_error() {
        let ui = Arc::new(RecordingUi::default());
        let mut panel = Panel::new(ui, None);

        let err = panel.capture().await.unwrap_err();
        assert!(matches!(err, PanelError::Config(ConfigError::RegistryMissing)));
        assert!(panel.captured_image().is_none());
    }
}
