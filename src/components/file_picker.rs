use dioxus::prelude::*;

use crate::components::icons::{FileIcon, FolderIcon};
use crate::components::{Breadcrumbs, CopyLinkButton, SearchInput, UploadButton};
use crate::services::listing::{self, BucketObject, Listing};
use crate::stores::picker_store::{self, PickerView, CONFIG, LISTING, VIEW};
use crate::utils::{display_dir_name, format_size};

/// Bucket browser shown inside the embedding iframe
#[component]
pub fn FilePicker() -> Element {
    let state = LISTING.read().clone();
    let view = VIEW.read().clone();

    rsx! {
        div {
            class: "flex flex-col gap-4 p-4",
            if state.is_loading() {
                div { class: "py-8 text-center text-muted-foreground", "Loading..." }
            } else if let Some(e) = state.error() {
                div {
                    class: "py-8 text-center text-red-500",
                    "Could not load files: {e}"
                }
            } else if let Some(listing) = state.data() {
                ListingView { listing: listing.clone(), view }
            }
        }
    }
}

#[component]
fn ListingView(listing: Listing, view: PickerView) -> Element {
    let page_origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    let origin = listing::file_origin(&CONFIG.read().endpoint, &page_origin);
    let searching = matches!(view, PickerView::Search(_));

    let files: Vec<(BucketObject, String)> = listing
        .files
        .iter()
        .map(|file| (file.clone(), listing::object_link(&listing, &origin, &file.value)))
        .collect();
    let is_empty = files.is_empty() && listing.dirs.is_empty();

    rsx! {
        div {
            class: "flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between",
            match view {
                PickerView::Directory(_) => rsx! {
                    Breadcrumbs { bucket: listing.bucket.clone(), current: listing.current.clone() }
                },
                PickerView::Search(query) => rsx! {
                    div { class: "text-sm", "Results for \"{query}\"" }
                },
            }
            div {
                class: "flex items-center gap-2",
                if listing.allow_search {
                    SearchInput {}
                }
                if listing.allow_upload && !searching {
                    UploadButton {}
                }
            }
        }

        table {
            class: "w-full text-sm",
            thead {
                tr {
                    class: "text-left text-muted-foreground border-b border-border",
                    th { class: "py-2", "Name" }
                    th { class: "py-2", "Updated" }
                    th { class: "py-2 text-right", "Size" }
                    th { class: "py-2" }
                }
            }
            tbody {
                for dir in listing.dirs.iter().cloned() {
                    DirectoryRow { key: "{dir.value}", entry: dir.clone() }
                }
                for (file, link) in files {
                    FileRow { key: "{file.value}", entry: file.clone(), link: link.clone(), searching }
                }
            }
        }

        if is_empty {
            div { class: "py-8 text-center text-muted-foreground", "No files here" }
        }
    }
}

#[component]
fn DirectoryRow(entry: BucketObject) -> Element {
    let path = format!("/{}", entry.value);

    rsx! {
        tr {
            class: "border-b border-border hover:bg-accent",
            td {
                class: "py-2",
                button {
                    r#type: "button",
                    class: "inline-flex items-center gap-2 hover:underline",
                    onclick: move |_| {
                        let path = path.clone();
                        spawn(async move {
                            picker_store::load_directory(path).await;
                        });
                    },
                    FolderIcon {}
                    "{display_dir_name(&entry.name)}"
                }
            }
            td { class: "py-2" }
            td { class: "py-2 text-right", "-" }
            td { class: "py-2" }
        }
    }
}

#[component]
fn FileRow(entry: BucketObject, link: String, searching: bool) -> Element {
    let label = entry.label(searching).to_string();

    rsx! {
        tr {
            class: "border-b border-border hover:bg-accent",
            td {
                class: "py-2",
                span {
                    class: "inline-flex items-center gap-2",
                    FileIcon {}
                    a {
                        href: "{link}",
                        target: "_blank",
                        class: "hover:underline",
                        "{label}"
                    }
                }
            }
            td { class: "py-2 text-muted-foreground", "{entry.updated}" }
            td { class: "py-2 text-right", "{format_size(entry.size)}" }
            td {
                class: "py-2 text-right",
                CopyLinkButton { url: link.clone() }
            }
        }
    }
}
