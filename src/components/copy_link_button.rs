use dioxus::prelude::*;

use crate::components::icons::{CheckIcon, CopyIcon};
use crate::relay;

/// Button that copies `url` and relays it to the parent window
///
/// The "Copied!" feedback is shown on click; the clipboard result itself is never observed.
#[component]
pub fn CopyLinkButton(url: String) -> Element {
    let mut copied = use_signal(|| false);

    let handle_click = move |_| {
        relay::handle_click(&url);
        copied.set(true);
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(2000).await;
            copied.set(false);
        });
    };

    rsx! {
        button {
            r#type: "button",
            class: "inline-flex items-center gap-1 px-2 py-1 text-xs border border-border rounded hover:bg-accent transition-colors",
            onclick: handle_click,
            if *copied.read() {
                CheckIcon { class: "w-3 h-3 text-green-500".to_string() }
                "Copied!"
            } else {
                CopyIcon { class: "w-3 h-3".to_string() }
                "Copy link"
            }
        }
    }
}
