use dioxus::prelude::*;

use crate::components::icons::SearchIcon;
use crate::stores::picker_store::{self, SEARCH_QUERY};

#[component]
pub fn SearchInput() -> Element {
    let submit = move || {
        let query = SEARCH_QUERY.read().clone();
        spawn(async move {
            picker_store::run_search(query).await;
        });
    };

    let query = SEARCH_QUERY.read().clone();

    rsx! {
        div {
            class: "relative",

            input {
                r#type: "text",
                placeholder: "Search bucket...",
                value: "{query}",
                class: "w-full px-4 py-2 pr-10 bg-muted border border-border rounded-full text-sm",
                oninput: move |e| *SEARCH_QUERY.write() = e.value(),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        submit();
                    }
                },
            }

            button {
                r#type: "button",
                class: "absolute right-2 top-1/2 -translate-y-1/2 p-1.5",
                onclick: move |_| submit(),
                SearchIcon {}
            }
        }
    }
}
