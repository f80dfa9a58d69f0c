//! The input event translator.
//!
//! Translates platform callbacks (touch, key, character, mouse-wheel) into
//! normalized events on the GUI context's queue, and per-frame display/timing
//! queries into platform calls.
//!
//! Lifecycle functions take the shared context handle (`&SharedIo`) because
//! installation registers closures over it with the platform. The four
//! `*_callback` entry points take `&mut Io` directly; they are what installed
//! closures call into, and what hosts managing their own platform
//! registration call to chain manually.
//!
//! Preconditions (double init, shutdown or frame without init, install when
//! installed, restore when not installed) are fatal and panic; there is no
//! recoverable-error path. Unknown key codes and touch events on mouse-only
//! displays degrade to pass-through instead.

mod clipboard;
pub mod keymap;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::io::{BackendFlags, Io, Key, PointerSource, SharedIo};
use crate::platform::{
    CharHandler, DisplayId, KeyAction, KeyCode, KeyHandler, MobileDisplay, Modifiers,
    ScrollDeltaType, ScrollHandler, TouchHandler, TouchPhase,
};
use crate::time::FrameTimer;

use clipboard::PlatformClipboard;

const BACKEND_NAME: &str = "glim";

const ERR_NOT_BOUND: &str =
    "glim: no platform backend bound; did you call init_for_opengl/init_for_metal/init_for_other?";

/// Rendering API the host runs the GUI with. Informational only; it does not
/// change translation behavior.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClientApi {
    Unspecified,
    OpenGl,
    Metal,
}

/// Per-context backend state, stored in the GUI context's opaque user-data
/// slot. Exactly one instance may be bound to a context at a time.
struct BackendData {
    /// Bound display. Not owned; the host application governs its lifetime.
    display: Weak<dyn MobileDisplay>,
    display_id: DisplayId,
    client_api: ClientApi,
    timer: FrameTimer,
    /// Last observed pointer/touch position, retained for fallback use.
    last_valid_pointer_pos: Option<(f32, f32)>,
    callbacks_installed: bool,

    // Saved platform handlers, chain-called by ours. Depth-1 interposition:
    // restore re-registers exactly these.
    prev_touch: Option<TouchHandler>,
    prev_key: Option<KeyHandler>,
    prev_char: Option<CharHandler>,
    prev_scroll: Option<ScrollHandler>,

    /// Most recently completed asynchronous clipboard read, shared with the
    /// clipboard installed on the context.
    last_clipboard_text: Rc<RefCell<String>>,
}

// ── lifecycle ────────────────────────────────────────────────────────────

/// Binds a backend to `io` for an OpenGL-rendered host.
pub fn init_for_opengl(io: &SharedIo, display: &Rc<dyn MobileDisplay>, install: bool) -> bool {
    init(io, display, install, ClientApi::OpenGl)
}

/// Binds a backend to `io` for a Metal-rendered host.
pub fn init_for_metal(io: &SharedIo, display: &Rc<dyn MobileDisplay>, install: bool) -> bool {
    init(io, display, install, ClientApi::Metal)
}

/// Binds a backend to `io` without naming a rendering API.
pub fn init_for_other(io: &SharedIo, display: &Rc<dyn MobileDisplay>, install: bool) -> bool {
    init(io, display, install, ClientApi::Unspecified)
}

fn init(
    io: &SharedIo,
    display: &Rc<dyn MobileDisplay>,
    install: bool,
    client_api: ClientApi,
) -> bool {
    {
        let mut io_ref = io.borrow_mut();
        assert!(
            !io_ref.has_backend_platform_user_data(),
            "glim: already initialized a platform backend for this context"
        );

        let last_clipboard_text = Rc::new(RefCell::new(String::new()));

        let data = BackendData {
            display: Rc::downgrade(display),
            display_id: display.id(),
            client_api,
            timer: FrameTimer::new(),
            last_valid_pointer_pos: None,
            callbacks_installed: false,
            prev_touch: None,
            prev_key: None,
            prev_char: None,
            prev_scroll: None,
            last_clipboard_text: Rc::clone(&last_clipboard_text),
        };

        io_ref.backend_platform_name = Some(BACKEND_NAME);
        io_ref.backend_flags |= BackendFlags::HAS_SET_POINTER_POS;
        io_ref.set_clipboard_backend(Some(Box::new(PlatformClipboard::new(
            Rc::downgrade(display),
            last_clipboard_text,
        ))));
        io_ref.set_backend_platform_user_data(Some(Box::new(data)));
    }

    if install {
        install_callbacks(io, display);
    }

    log::debug!("platform backend bound ({client_api:?})");
    true
}

/// Unbinds the backend: restores any installed callbacks and clears the
/// context's clipboard, capability flags and user-data slot.
pub fn shutdown(io: &SharedIo) {
    let display_to_restore = {
        let mut io_ref = io.borrow_mut();
        let Some(data) = backend_data_mut(&mut io_ref) else {
            panic!("glim: no platform backend to shut down, or already shut down");
        };
        if data.callbacks_installed {
            data.display.upgrade()
        } else {
            None
        }
    };

    if let Some(display) = display_to_restore {
        restore_callbacks(io, &display);
    } else {
        let io_ref = io.borrow();
        if let Some(data) = backend_data(&io_ref) {
            if data.callbacks_installed {
                log::warn!("bound display dropped before shutdown; platform callbacks not restored");
            }
        }
    }

    let mut io_ref = io.borrow_mut();
    io_ref.backend_platform_name = None;
    io_ref.backend_flags.remove(BackendFlags::HAS_SET_POINTER_POS);
    io_ref.set_clipboard_backend(None);
    io_ref.set_backend_platform_user_data(None);

    log::debug!("platform backend unbound");
}

/// Refreshes per-frame GUI state from the platform: display size,
/// framebuffer scale and delta time.
///
/// Must be called exactly once per rendered frame, before the GUI begins
/// building that frame's UI.
pub fn new_frame(io: &SharedIo) {
    let mut io_ref = io.borrow_mut();

    let (size, dt) = {
        let Some(data) = backend_data_mut(&mut io_ref) else {
            panic!("{ERR_NOT_BOUND}");
        };
        let Some(display) = data.display.upgrade() else {
            panic!("glim: bound display was dropped");
        };
        (display.display_size(), data.timer.tick(display.time()))
    };

    io_ref.display_size = (size.0 as f32, size.1 as f32);
    // The framebuffer is not queried independently of the display, so the
    // scale is pinned at 1:1. Known simplification: no hi-DPI scaling.
    io_ref.display_framebuffer_scale = (1.0, 1.0);
    io_ref.delta_time = dt;
}

// ── callback installation ────────────────────────────────────────────────

/// Registers the backend's handlers with the platform, saving whatever was
/// registered before for chain-calling.
pub fn install_callbacks(io: &SharedIo, display: &Rc<dyn MobileDisplay>) {
    let touch = make_touch_handler(io);
    let key = make_key_handler(io);
    let chars = make_char_handler(io);
    let scroll = make_scroll_handler(io);

    let mut io_ref = io.borrow_mut();
    let Some(data) = backend_data_mut(&mut io_ref) else {
        panic!("{ERR_NOT_BOUND}");
    };
    assert!(!data.callbacks_installed, "glim: callbacks already installed");
    assert!(
        data.display_id == display.id(),
        "glim: display does not match the bound display"
    );

    data.prev_touch = display.set_touch_handler(Some(touch));
    data.prev_key = display.set_key_handler(Some(key));
    data.prev_char = display.set_char_handler(Some(chars));
    data.prev_scroll = display.set_scroll_handler(Some(scroll));
    data.callbacks_installed = true;

    log::debug!("platform callbacks installed");
}

/// Re-registers the handlers saved by [`install_callbacks`], returning the
/// platform's slots to their prior state (including "no handler").
pub fn restore_callbacks(io: &SharedIo, display: &Rc<dyn MobileDisplay>) {
    let mut io_ref = io.borrow_mut();
    let Some(data) = backend_data_mut(&mut io_ref) else {
        panic!("{ERR_NOT_BOUND}");
    };
    assert!(data.callbacks_installed, "glim: callbacks not installed");
    assert!(
        data.display_id == display.id(),
        "glim: display does not match the bound display"
    );

    display.set_touch_handler(data.prev_touch.take());
    display.set_key_handler(data.prev_key.take());
    display.set_char_handler(data.prev_char.take());
    display.set_scroll_handler(data.prev_scroll.take());
    data.callbacks_installed = false;

    log::debug!("platform callbacks restored");
}

fn make_touch_handler(io: &SharedIo) -> TouchHandler {
    let io = Rc::clone(io);
    Rc::new(move |display, touch, phase, x, y| {
        touch_callback(&mut io.borrow_mut(), display, touch, phase, x, y)
    })
}

fn make_key_handler(io: &SharedIo) -> KeyHandler {
    let io = Rc::clone(io);
    Rc::new(move |display, code, action, mods| {
        key_callback(&mut io.borrow_mut(), display, code, action, mods)
    })
}

fn make_char_handler(io: &SharedIo) -> CharHandler {
    let io = Rc::clone(io);
    Rc::new(move |display, text, mods| {
        char_callback(&mut io.borrow_mut(), display, text, mods);
    })
}

fn make_scroll_handler(io: &SharedIo) -> ScrollHandler {
    let io = Rc::clone(io);
    Rc::new(move |display, x, y, delta_type, dx, dy, dz| {
        scroll_callback(&mut io.borrow_mut(), display, x, y, delta_type, dx, dy, dz)
    })
}

// ── event entry points ───────────────────────────────────────────────────

/// Touch entry point.
///
/// Chain-calls any saved previous handler (when the display matches the
/// bound one) and returns its result, or `false` if none was saved. Displays
/// without touch capability generate no events; their pointer input stays on
/// the legacy mouse path.
pub fn touch_callback(
    io: &mut Io,
    display: &dyn MobileDisplay,
    touch: i32,
    phase: TouchPhase,
    x: f64,
    y: f64,
) -> bool {
    with_backend(io, |data, io| {
        let mut handled = false;
        if let Some(prev) = data.prev_touch.clone() {
            if display.id() == data.display_id {
                handled = prev(display, touch, phase, x, y);
            }
        }

        if !display.has_touch() {
            log::trace!("touch event on mouse-only display ignored");
            return false;
        }

        io.add_pointer_source_event(PointerSource::TouchScreen);

        let (x, y) = (x as f32, y as f32);
        io.add_pointer_pos_event(x, y);
        data.last_valid_pointer_pos = Some((x, y));

        if touch == 0 {
            match phase {
                TouchPhase::Began => io.add_pointer_button_event(0, true),
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    io.add_pointer_button_event(0, false);
                    // Departure sentinel: the touchscreen has no pointer
                    // between contacts.
                    io.add_pointer_pos_event(-f32::MAX, -f32::MAX);
                }
                TouchPhase::Moved | TouchPhase::Hovered => {}
            }
        }

        handled
    })
}

/// Key entry point.
///
/// Actions other than press/release are ignored. Modifier-key events are
/// pushed before the primary key event; unmapped codes are forwarded as
/// `Key::None` with their native code recorded.
pub fn key_callback(
    io: &mut Io,
    display: &dyn MobileDisplay,
    code: KeyCode,
    action: KeyAction,
    mods: Modifiers,
) -> bool {
    with_backend(io, |data, io| {
        if let Some(prev) = data.prev_key.clone() {
            if display.id() == data.display_id {
                prev(display, code, action, mods);
            }
        }

        let pressed = match action {
            KeyAction::Pressed => true,
            KeyAction::Released => false,
            KeyAction::Repeat => return false,
        };

        update_key_modifiers(io, mods);

        let key = keymap::normalize(code);
        io.add_key_event(key, pressed);
        io.set_key_event_native_data(key, code as i32);
        true
    })
}

/// Character entry point. Forwards committed UTF-8 text verbatim.
pub fn char_callback(io: &mut Io, display: &dyn MobileDisplay, text: &str, mods: Modifiers) {
    with_backend(io, |data, io| {
        if let Some(prev) = data.prev_char.clone() {
            if display.id() == data.display_id {
                prev(display, text, mods);
            }
        }

        io.add_input_text(text);
    });
}

/// Mouse-wheel entry point. `dz` and the delta type are ignored.
#[allow(clippy::too_many_arguments)]
pub fn scroll_callback(
    io: &mut Io,
    display: &dyn MobileDisplay,
    x: f64,
    y: f64,
    delta_type: ScrollDeltaType,
    dx: f64,
    dy: f64,
    dz: f64,
) -> bool {
    with_backend(io, |data, io| {
        if let Some(prev) = data.prev_scroll.clone() {
            if display.id() == data.display_id {
                prev(display, x, y, delta_type, dx, dy, dz);
            }
        }

        io.add_pointer_source_event(PointerSource::TouchScreen);
        io.add_wheel_event(dx as f32, dy as f32);
        true
    })
}

fn update_key_modifiers(io: &mut Io, mods: Modifiers) {
    io.add_key_event(Key::ModCtrl, mods.contains(Modifiers::CONTROL));
    io.add_key_event(Key::ModShift, mods.contains(Modifiers::SHIFT));
    io.add_key_event(Key::ModAlt, mods.contains(Modifiers::ALT));
    io.add_key_event(Key::ModSuper, mods.contains(Modifiers::META));
}

// ── state queries ────────────────────────────────────────────────────────

/// Rendering API recorded at init.
pub fn client_api(io: &Io) -> ClientApi {
    let Some(data) = backend_data(io) else {
        panic!("{ERR_NOT_BOUND}");
    };
    data.client_api
}

/// Last pointer/touch position observed by the backend. `None` until the
/// first pointer event arrives.
pub fn last_valid_pointer_pos(io: &Io) -> Option<(f32, f32)> {
    let Some(data) = backend_data(io) else {
        panic!("{ERR_NOT_BOUND}");
    };
    data.last_valid_pointer_pos
}

// ── slot access ──────────────────────────────────────────────────────────

fn backend_data(io: &Io) -> Option<&BackendData> {
    io.backend_platform_user_data()
        .and_then(|ud| ud.downcast_ref::<BackendData>())
}

fn backend_data_mut(io: &mut Io) -> Option<&mut BackendData> {
    io.backend_platform_user_data_mut()
        .and_then(|ud| ud.downcast_mut::<BackendData>())
}

/// Runs `f` with the backend state taken out of the context's user-data
/// slot, so state and context can be borrowed mutably at the same time.
/// While an event is being translated the slot is empty; reentrant
/// entry-point calls from a chained handler are a host error.
fn with_backend<R>(io: &mut Io, f: impl FnOnce(&mut BackendData, &mut Io) -> R) -> R {
    let Some(ud) = io.take_backend_platform_user_data() else {
        panic!("{ERR_NOT_BOUND}");
    };
    let mut data: Box<BackendData> = match ud.downcast() {
        Ok(data) => data,
        Err(_) => panic!("glim: backend user-data slot holds foreign data"),
    };

    let out = f(&mut data, io);

    io.set_backend_platform_user_data(Some(data));
    out
}
