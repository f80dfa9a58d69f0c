use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::io::Clipboard;
use crate::platform::MobileDisplay;

/// Clipboard access routed through the platform's primitives.
///
/// Writes are synchronous. Reads are asynchronous on the platform side: a
/// read request is fired and its completion lands in `last_text`, while the
/// getter immediately returns the value from the previous completion. The
/// first read after a clipboard change can therefore come back stale or
/// empty; that is inherent to the platform primitive.
pub(crate) struct PlatformClipboard {
    display: Weak<dyn MobileDisplay>,
    last_text: Rc<RefCell<String>>,
}

impl PlatformClipboard {
    pub(crate) fn new(display: Weak<dyn MobileDisplay>, last_text: Rc<RefCell<String>>) -> Self {
        Self { display, last_text }
    }
}

impl Clipboard for PlatformClipboard {
    fn get(&mut self) -> Option<String> {
        let Some(display) = self.display.upgrade() else {
            log::warn!("clipboard read after the bound display was dropped");
            return None;
        };

        // Snapshot before firing the request: a platform that completes
        // synchronously must still observe the stale-read contract.
        let previous = self.last_text.borrow().clone();

        let slot = Rc::clone(&self.last_text);
        display.request_clipboard_text(Box::new(move |text| {
            if let Some(text) = text {
                *slot.borrow_mut() = text.to_owned();
            }
        }));

        if previous.is_empty() { None } else { Some(previous) }
    }

    fn set(&mut self, text: &str) {
        let Some(display) = self.display.upgrade() else {
            log::warn!("clipboard write after the bound display was dropped");
            return;
        };
        display.set_clipboard_text(text);
    }
}
