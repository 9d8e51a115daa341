use dioxus::prelude::*;

use crate::services::listing::{self, Breadcrumb};
use crate::stores::picker_store;

/// Path trail for the current directory, with the bucket name as root
#[component]
pub fn Breadcrumbs(bucket: String, current: String) -> Element {
    let crumbs = listing::breadcrumbs(&current);
    let root_label = if bucket.is_empty() { "/".to_string() } else { bucket };

    rsx! {
        nav {
            class: "flex flex-wrap items-center gap-1 text-sm",
            CrumbLink {
                crumb: Breadcrumb { name: root_label, path: "/".to_string() },
            }
            for crumb in crumbs {
                span { class: "text-muted-foreground", "/" }
                CrumbLink { key: "{crumb.path}", crumb: crumb.clone() }
            }
        }
    }
}

#[component]
fn CrumbLink(crumb: Breadcrumb) -> Element {
    let path = crumb.path.clone();

    rsx! {
        button {
            r#type: "button",
            class: "hover:underline",
            onclick: move |_| {
                let path = path.clone();
                spawn(async move {
                    picker_store::load_directory(path).await;
                });
            },
            "{crumb.name}"
        }
    }
}
