//! Platform-side abstraction.
//!
//! [`MobileDisplay`] models the surface the backend consumes from a
//! GLFM-style mobile windowing library: display/time/touch-capability
//! queries, clipboard primitives, and per-category handler slots whose
//! registration returns whatever handler was previously installed.

mod display;
mod types;

pub use display::{
    CharHandler, ClipboardReadFn, KeyHandler, MobileDisplay, ScrollHandler, TouchHandler,
};
pub use types::{DisplayId, KeyAction, KeyCode, Modifiers, ScrollDeltaType, TouchPhase};
