use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::types::{BackendFlags, Event, Key, PointerSource};

/// Clipboard access installed by a platform backend.
///
/// `get` may be served from a cached value when the underlying platform read
/// is asynchronous; see the backend documentation for the staleness contract.
pub trait Clipboard {
    fn get(&mut self) -> Option<String>;
    fn set(&mut self, text: &str);
}

/// Shared handle to a GUI context.
///
/// Platform callbacks are delivered by the platform library, so installed
/// handlers need shared access to the context. Everything is single-threaded;
/// `Rc<RefCell<_>>` is the ownership model, not a synchronization one.
pub type SharedIo = Rc<RefCell<Io>>;

/// Per-context GUI input state fed by a platform backend.
#[derive(Default)]
pub struct Io {
    /// Display size in display coordinates, refreshed every frame.
    pub display_size: (f32, f32),

    /// Framebuffer-to-display scale ratio.
    pub display_framebuffer_scale: (f32, f32),

    /// Seconds elapsed since the previous frame.
    pub delta_time: f32,

    /// Capabilities advertised by the bound backend.
    pub backend_flags: BackendFlags,

    /// Name of the bound backend, for diagnostics.
    pub backend_platform_name: Option<&'static str>,

    events: Vec<Event>,
    key_native_codes: HashMap<Key, i32>,
    clipboard: Option<Box<dyn Clipboard>>,
    backend_platform_user_data: Option<Box<dyn Any>>,
}

impl Io {
    pub fn new() -> Self {
        Self::default()
    }

    // ── event queue ──────────────────────────────────────────────────────

    pub fn add_pointer_pos_event(&mut self, x: f32, y: f32) {
        self.events.push(Event::PointerPos { x, y });
    }

    pub fn add_pointer_button_event(&mut self, button: u32, pressed: bool) {
        self.events.push(Event::PointerButton { button, pressed });
    }

    pub fn add_wheel_event(&mut self, dx: f32, dy: f32) {
        self.events.push(Event::Wheel { dx, dy });
    }

    pub fn add_key_event(&mut self, key: Key, pressed: bool) {
        self.events.push(Event::Key { key, pressed });
    }

    /// Appends committed UTF-8 text, byte-for-byte. Empty input queues nothing.
    pub fn add_input_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.events.push(Event::Text(text.to_owned()));
    }

    pub fn add_pointer_source_event(&mut self, source: PointerSource) {
        self.events.push(Event::PointerSource(source));
    }

    /// Records the platform key code behind a normalized key, so hosts can do
    /// numeric-indexed lookups against native codes. `Key::None` is not
    /// recorded; it aliases every unmapped code.
    pub fn set_key_event_native_data(&mut self, key: Key, native_code: i32) {
        if key == Key::None {
            return;
        }
        self.key_native_codes.insert(key, native_code);
    }

    pub fn key_native_code(&self, key: Key) -> Option<i32> {
        self.key_native_codes.get(&key).copied()
    }

    /// Events queued since the last drain, in arrival order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drains the queue. The GUI side calls this once per frame when the
    /// frame begins.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    // ── clipboard ────────────────────────────────────────────────────────

    pub fn set_clipboard_backend(&mut self, clipboard: Option<Box<dyn Clipboard>>) {
        self.clipboard = clipboard;
    }

    pub fn has_clipboard_backend(&self) -> bool {
        self.clipboard.is_some()
    }

    pub fn clipboard_text(&mut self) -> Option<String> {
        self.clipboard.as_mut().and_then(|c| c.get())
    }

    pub fn set_clipboard_text(&mut self, text: &str) {
        if let Some(c) = self.clipboard.as_mut() {
            c.set(text);
        }
    }

    // ── backend user-data slot ───────────────────────────────────────────

    /// Opaque side-channel storage for a platform backend. At most one
    /// backend may occupy the slot; the backend enforces this on init.
    pub fn set_backend_platform_user_data(&mut self, data: Option<Box<dyn Any>>) {
        self.backend_platform_user_data = data;
    }

    pub fn take_backend_platform_user_data(&mut self) -> Option<Box<dyn Any>> {
        self.backend_platform_user_data.take()
    }

    pub fn backend_platform_user_data(&self) -> Option<&dyn Any> {
        self.backend_platform_user_data.as_deref()
    }

    pub fn backend_platform_user_data_mut(&mut self) -> Option<&mut dyn Any> {
        self.backend_platform_user_data.as_deref_mut()
    }

    pub fn has_backend_platform_user_data(&self) -> bool {
        self.backend_platform_user_data.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── event queue ──────────────────────────────────────────────────────

    #[test]
    fn events_keep_arrival_order() {
        let mut io = Io::new();
        io.add_pointer_pos_event(1.0, 2.0);
        io.add_pointer_button_event(0, true);
        io.add_key_event(Key::A, true);

        assert_eq!(
            io.events(),
            &[
                Event::PointerPos { x: 1.0, y: 2.0 },
                Event::PointerButton { button: 0, pressed: true },
                Event::Key { key: Key::A, pressed: true },
            ]
        );
    }

    #[test]
    fn take_events_drains_queue() {
        let mut io = Io::new();
        io.add_wheel_event(0.0, -1.0);

        let drained = io.take_events();
        assert_eq!(drained.len(), 1);
        assert!(io.events().is_empty());
    }

    #[test]
    fn empty_text_queues_nothing() {
        let mut io = Io::new();
        io.add_input_text("");
        assert!(io.events().is_empty());
    }

    #[test]
    fn text_forwarded_byte_for_byte() {
        let mut io = Io::new();
        io.add_input_text("héllo→");
        assert_eq!(io.events(), &[Event::Text("héllo→".to_owned())]);
    }

    // ── native key codes ─────────────────────────────────────────────────

    #[test]
    fn native_code_recorded_per_key() {
        let mut io = Io::new();
        io.set_key_event_native_data(Key::A, 41);
        io.set_key_event_native_data(Key::Tab, 7);

        assert_eq!(io.key_native_code(Key::A), Some(41));
        assert_eq!(io.key_native_code(Key::Tab), Some(7));
        assert_eq!(io.key_native_code(Key::B), None);
    }

    #[test]
    fn none_key_never_records_native_data() {
        let mut io = Io::new();
        io.set_key_event_native_data(Key::None, 999);
        assert_eq!(io.key_native_code(Key::None), None);
    }
}
