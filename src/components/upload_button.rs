use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::components::icons::UploadIcon;
use crate::stores::picker_store::{self, UPLOAD_STATE};
use crate::utils::DataState;

const UPLOAD_INPUT_ID: &str = "picker-upload-input";

/// File chooser that uploads into the directory being shown
#[component]
pub fn UploadButton() -> Element {
    let upload_state = UPLOAD_STATE.read().clone();
    let uploading = matches!(upload_state, DataState::Loading);
    let label_class = if uploading {
        "inline-flex items-center gap-1 px-3 py-2 text-sm border border-border rounded-full opacity-50 cursor-wait"
    } else {
        "inline-flex items-center gap-1 px-3 py-2 text-sm border border-border rounded-full hover:bg-accent cursor-pointer"
    };

    let handle_file_select = move |_evt: Event<FormData>| {
        match selected_files(UPLOAD_INPUT_ID) {
            Ok(files) if files.length() > 0 => {
                spawn(async move {
                    picker_store::upload_files(files).await;
                });
            }
            Ok(_) => {}
            Err(e) => {
                log::error!("Failed to read selected files: {}", e);
            }
        }
    };

    rsx! {
        div {
            class: "flex flex-col items-end gap-1",
            label {
                class: "{label_class}",
                UploadIcon {}
                if uploading { "Uploading..." } else { "Upload" }
                input {
                    id: UPLOAD_INPUT_ID,
                    r#type: "file",
                    multiple: true,
                    class: "hidden",
                    disabled: uploading,
                    onchange: handle_file_select,
                }
            }
            if let Some(e) = upload_state.error() {
                span { class: "text-xs text-red-500", "{e}" }
            }
        }
    }
}

/// Files currently chosen in the input with `input_id`
fn selected_files(input_id: &str) -> Result<web_sys::FileList, String> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let input = document
        .get_element_by_id(input_id)
        .ok_or("Input not found")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| "Not an input element")?;

    input.files().ok_or_else(|| "No files".to_string())
}
