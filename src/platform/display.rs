use std::rc::Rc;

use super::types::{DisplayId, KeyAction, KeyCode, Modifiers, ScrollDeltaType, TouchPhase};

/// Touch handler: `(display, touch index, phase, x, y) -> handled`.
pub type TouchHandler = Rc<dyn Fn(&dyn MobileDisplay, i32, TouchPhase, f64, f64) -> bool>;

/// Key handler: `(display, key code, action, modifiers) -> handled`.
pub type KeyHandler = Rc<dyn Fn(&dyn MobileDisplay, KeyCode, KeyAction, Modifiers) -> bool>;

/// Character handler: `(display, committed UTF-8 text, modifiers)`.
pub type CharHandler = Rc<dyn Fn(&dyn MobileDisplay, &str, Modifiers)>;

/// Mouse-wheel handler:
/// `(display, x, y, delta type, dx, dy, dz) -> handled`.
pub type ScrollHandler =
    Rc<dyn Fn(&dyn MobileDisplay, f64, f64, ScrollDeltaType, f64, f64, f64) -> bool>;

/// Completion callback for an asynchronous clipboard read. Receives `None`
/// when the platform clipboard is empty or the read failed.
pub type ClipboardReadFn = Box<dyn FnOnce(Option<&str>)>;

/// A mobile display/window as exposed by the platform library.
///
/// All methods take `&self`: the platform library owns its state and is
/// externally synchronized (everything runs on its main thread), so
/// implementations use interior mutability for handler slots.
///
/// Each `set_*_handler` call replaces the slot and returns the handler that
/// was registered before, if any. That returned value is what makes the
/// backend's depth-1 chain-calling possible.
pub trait MobileDisplay {
    fn id(&self) -> DisplayId;

    /// Current display size in display coordinates.
    fn display_size(&self) -> (i32, i32);

    /// Monotonic time in seconds.
    fn time(&self) -> f64;

    /// Whether this display delivers touch events. Mouse-only displays keep
    /// pointer input on a legacy path the backend does not translate.
    fn has_touch(&self) -> bool;

    /// Synchronous clipboard write.
    fn set_clipboard_text(&self, text: &str);

    /// Asynchronous clipboard read. `done` fires whenever the platform
    /// completes the read; there is no way to withdraw the request.
    fn request_clipboard_text(&self, done: ClipboardReadFn);

    fn set_touch_handler(&self, handler: Option<TouchHandler>) -> Option<TouchHandler>;
    fn set_key_handler(&self, handler: Option<KeyHandler>) -> Option<KeyHandler>;
    fn set_char_handler(&self, handler: Option<CharHandler>) -> Option<CharHandler>;
    fn set_scroll_handler(&self, handler: Option<ScrollHandler>) -> Option<ScrollHandler>;
}
