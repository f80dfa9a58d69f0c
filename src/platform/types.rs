use bitflags::bitflags;

/// Opaque display identity.
///
/// Used by the backend to check that a delivered event belongs to the bound
/// display before chain-calling a saved handler. Implementations derive it
/// from whatever is stable for them (a native handle address, a counter).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DisplayId(pub u64);

/// Phase of a touch as reported by the platform.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
    /// Pointer hover without contact (stylus, attached mouse).
    Hovered,
}

/// Key transition as reported by the platform.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyAction {
    Pressed,
    Released,
    /// Auto-repeat while held. The backend ignores these.
    Repeat,
}

bitflags! {
    /// Platform-native modifier mask delivered alongside key and character
    /// events.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub struct Modifiers: u32 {
        const SHIFT    = 1 << 0;
        const CONTROL  = 1 << 1;
        const ALT      = 1 << 2;
        const META     = 1 << 3;
        const FUNCTION = 1 << 4;
    }
}

/// Unit of a mouse-wheel delta.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ScrollDeltaType {
    Pixel,
    Line,
    Page,
}

/// Platform key code.
///
/// The discriminant doubles as the native code the backend records with each
/// normalized key event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(i32)]
pub enum KeyCode {
    Unknown = 0,

    Tab,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
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

    Quote,
    Comma,
    Minus,
    Period,
    Slash,
    Semicolon,
    Equal,
    BracketLeft,
    Backslash,
    BracketRight,
    Backquote,

    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,

    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
    NumpadDecimal,
    NumpadDivide,
    NumpadMultiply,
    NumpadSubtract,
    NumpadAdd,
    NumpadEnter,
    NumpadEqual,

    ControlLeft,
    ShiftLeft,
    AltLeft,
    MetaLeft,
    ControlRight,
    ShiftRight,
    AltRight,
    MetaRight,
    Menu,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    // Mobile navigation/system keys with no normalized counterpart.
    NavigationBack,
    MediaPlayPause,
    Power,
}
