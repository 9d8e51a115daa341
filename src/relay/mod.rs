//! Click relay
//!
//! Copies a link to the system clipboard and tells the embedding parent window
//! about it with a `{ id, value }` message. `id` comes from the `id` key of the
//! page's query string, so the parent can tell which picker frame answered.
//!
//! Both effects are fire-and-forget. Nothing is retried, validated or reported
//! back to the caller, and no state survives between clicks.

pub mod host;
pub mod query;

use serde::Serialize;

pub use host::BrowserHost;

/// Query string key whose value tags every relayed message
pub const ID_PARAM: &str = "id";

/// Message posted to the parent window for each click
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayMessage {
    pub id: Option<String>,
    pub value: String,
}

impl RelayMessage {
    /// Build a message for `value`, tagged with the `id` found in `search`
    pub fn from_search(search: &str, value: &str) -> Self {
        Self {
            id: query::query_param(search, ID_PARAM),
            value: value.to_string(),
        }
    }
}

/// Platform capabilities the relay needs from its environment
pub trait RelayHost {
    /// Raw query string of the current location, including the leading `?`
    fn location_search(&self) -> String;

    /// Start writing `text` to the clipboard without waiting for completion
    fn write_clipboard(&self, text: &str);

    /// Post `message` to the parent window. A missing parent is a no-op.
    fn post_to_parent(&self, message: &RelayMessage);
}

/// Copy `url` to the clipboard, then relay it to the parent window
///
/// The clipboard write is initiated first; the message is built from the
/// location at call time and posted without waiting on the write.
pub fn relay<H: RelayHost>(host: &H, url: &str) {
    host.write_clipboard(url);

    let message = RelayMessage::from_search(&host.location_search(), url);
    host.post_to_parent(&message);
}

/// Click handler entry point for the browser
pub fn handle_click(url: &str) {
    match BrowserHost::current() {
        Some(host) => {
            log::debug!("Relaying link: {}", url);
            relay(&host, url);
        }
        None => {
            log::warn!("No window available, link not relayed");
        }
    }
}
