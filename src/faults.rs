//! Last-resort fault reporting.
//!
//! Failures must stay visible without an attached diagnostic console.
//! Ordinary async failures are already converted to status text by the
//! panel's trigger wrappers; this hook covers everything else by mirroring
//! panics into the same status line.

use std::panic;
use std::sync::Arc;

use crate::panel::PanelUi;

/// Mirrors every panic into the status line before the previous hook runs.
/// The hook never aborts the process itself.
pub fn install_panic_hook(ui: Arc<dyn PanelUi>) {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let text = format!("panic: {info}");
        log::error!("{text}");
        ui.set_status(&text);
        previous(info);
    }));
}
