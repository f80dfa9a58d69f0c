use bitflags::bitflags;

/// Normalized key identifier understood by the GUI side.
///
/// Produced by the backend's keymap from platform key codes. `None` is the
/// "no key" sentinel used for codes the table does not cover; such events are
/// still forwarded so hosts can fall back on the recorded native code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    None,

    Tab,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,
    Backspace,
    Space,
    Enter,
    Escape,

    // Punctuation
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Semicolon,
    Equal,
    LeftBracket,
    Backslash,
    RightBracket,
    GraveAccent,

    // Lock / system keys
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,

    // Keypad
    Keypad0, Keypad1, Keypad2, Keypad3, Keypad4,
    Keypad5, Keypad6, Keypad7, Keypad8, Keypad9,
    KeypadDecimal,
    KeypadDivide,
    KeypadMultiply,
    KeypadSubtract,
    KeypadAdd,
    KeypadEnter,
    KeypadEqual,

    // Modifier keys, left/right resolved
    LeftCtrl,
    LeftShift,
    LeftAlt,
    LeftSuper,
    RightCtrl,
    RightShift,
    RightAlt,
    RightSuper,
    Menu,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Function keys
    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    // Logical modifier state, side-independent. Pushed by the backend before
    // every primary key event, derived from the platform modifier mask.
    ModCtrl,
    ModShift,
    ModAlt,
    ModSuper,
}

/// Source of subsequent pointer events.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointerSource {
    Mouse,
    TouchScreen,
    Pen,
}

/// A queued input event.
///
/// Events are appended in arrival order and drained by the GUI once per frame
/// via [`Io::take_events`](super::Io::take_events).
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Pointer moved to a position in display coordinates.
    PointerPos { x: f32, y: f32 },

    /// Logical pointer button transition. Touch index 0 maps to button 0.
    PointerButton { button: u32, pressed: bool },

    /// Wheel delta, in the platform's scroll units.
    Wheel { dx: f32, dy: f32 },

    /// Key state transition. `Key::None` carries unmapped platform codes.
    Key { key: Key, pressed: bool },

    /// Committed UTF-8 text input.
    Text(String),

    /// Hint about the source feeding subsequent pointer events.
    PointerSource(PointerSource),
}

bitflags! {
    /// Capabilities a platform backend advertises to the GUI side.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub struct BackendFlags: u32 {
        /// The backend can reposition the OS pointer programmatically.
        const HAS_SET_POINTER_POS = 1 << 0;
    }
}
