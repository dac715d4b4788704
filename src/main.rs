//! Terminal front end for the camera panel.
//!
//! Reads single-letter triggers from stdin: `c` captures, `s` saves,
//! `q` quits. Environment knobs:
//! - `SNAP_PANE_CAMERA=<image file>` serves that file instead of the
//!   built-in test pattern
//! - `SNAP_PANE_DIR=<dir>` overrides the save location
//! - `SNAP_PANE_NO_SAVE=1` leaves the save trigger unbound

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use snap_pane::backend::{default_photo_dir, CameraSource, FileCamera, NativeBackend, TestPatternCamera};
use snap_pane::bridge::BridgeRegistry;
use snap_pane::faults;
use snap_pane::panel::{Panel, PanelUi};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Renders the two panel elements as labeled terminal lines.
struct TermUi;

impl PanelUi for TermUi {
    fn set_status(&self, text: &str) {
        println!("status  | {text}");
    }

    fn set_preview_source(&self, url: Option<&str>) {
        match url {
            Some(url) => println!("preview | {url}"),
            None => println!("preview | (cleared)"),
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();
    log::info!("snap-pane starting up");

    let camera: Box<dyn CameraSource> = match env::var_os("SNAP_PANE_CAMERA") {
        Some(path) => Box::new(FileCamera::new(PathBuf::from(path))),
        None => Box::new(TestPatternCamera::default()),
    };
    let photo_dir = env::var_os("SNAP_PANE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(default_photo_dir);
    log::info!("photos will be saved under {}", photo_dir.display());

    let backend = Arc::new(NativeBackend::new(camera, photo_dir));

    let ui: Arc<dyn PanelUi> = Arc::new(TermUi);
    faults::install_panic_hook(Arc::clone(&ui));

    // The save trigger is optional; some panel configurations ship without it.
    let save_bound = env::var_os("SNAP_PANE_NO_SAVE").is_none();
    if !save_bound {
        log::warn!("save trigger not bound (SNAP_PANE_NO_SAVE is set)");
    }

    let mut panel = Panel::new(Arc::clone(&ui), Some(BridgeRegistry::with_core(backend)));

    ui.set_status("ready (c = capture, s = save, q = quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match line.trim() {
            "c" | "capture" => panel.trigger_capture().await,
            "s" | "save" if save_bound => panel.trigger_persist().await,
            "s" | "save" => ui.set_status("saving is not available in this configuration"),
            "q" | "quit" => break,
            "" => {}
            other => ui.set_status(&format!("unknown trigger: {other}")),
        }
    }

    log::info!("snap-pane exiting");
}
