//! snap-pane — a minimal desktop camera panel.
//!
//! One user-facing flow: trigger a capture, preview the photo, optionally
//! save it to disk. Camera I/O and file writing live behind a single
//! request/response bridge; the panel itself is event wiring, a
//! reply-shape normalizer, and preview bookkeeping.
//!
//! - [`bridge`] — the invoke port and host registry lookup
//! - [`normalize`] — tolerant decoding of the capture reply
//! - [`panel`] — the interaction controller driving status and preview
//! - [`preview`] — display-object URLs for in-memory photos
//! - [`backend`] — the in-process native side: camera sources and saving
//! - [`faults`] — panic and task-failure reporting into the status line

pub mod backend;
pub mod bridge;
pub mod faults;
pub mod normalize;
pub mod panel;
pub mod preview;

pub use bridge::{Bridge, BridgeRegistry, ConfigError, InvokeError};
pub use normalize::{normalize_capture_result, CapturedImage, ShapeError};
pub use panel::{Panel, PanelError, PanelUi};
