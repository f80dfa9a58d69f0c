//! GUI-side input surface.
//!
//! [`Io`] models the per-context state an immediate-mode GUI exposes to a
//! platform backend: a normalized input-event queue consumed once per frame,
//! per-frame display/timing fields, capability flags, a clipboard slot and an
//! opaque user-data slot for backend bookkeeping.

mod context;
mod types;

pub use context::{Clipboard, Io, SharedIo};
pub use types::{BackendFlags, Event, Key, PointerSource};
