//! Browser implementation of the relay host capabilities

use serde::Serialize;
use wasm_bindgen_futures::JsFuture;

use super::{RelayHost, RelayMessage};

/// Target origin for the parent message. Any embedding page receives it.
pub const PARENT_TARGET_ORIGIN: &str = "*";

/// `RelayHost` backed by the current browser window
pub struct BrowserHost {
    window: web_sys::Window,
}

impl BrowserHost {
    /// Host for the current window, or `None` outside a browsing context
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl RelayHost for BrowserHost {
    fn location_search(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    fn write_clipboard(&self, text: &str) {
        let promise: js_sys::Promise = self.window.navigator().clipboard().write_text(text);

        // Completion is never observed; a rejected write (e.g. no permission) is dropped here
        wasm_bindgen_futures::spawn_local(async move {
            let _ = JsFuture::from(promise).await;
        });
    }

    fn post_to_parent(&self, message: &RelayMessage) {
        let parent = match self.window.parent() {
            Ok(Some(parent)) => parent,
            _ => return,
        };

        // json_compatible turns a missing id into `null` rather than `undefined`
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        match message.serialize(&serializer) {
            Ok(value) => {
                let _ = parent.post_message(&value, PARENT_TARGET_ORIGIN);
            }
            Err(e) => {
                log::warn!("Failed to build relay message: {}", e);
            }
        }
    }
}
