#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::picker_store;

// Modules
mod components;
mod config;
mod relay;
mod services;
mod stores;
mod utils;

use components::FilePicker;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting bucket picker");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Load config and open the start directory on mount
    use_effect(move || {
        let start_path = picker_store::init_picker();
        spawn(async move {
            picker_store::load_directory(start_path).await;
        });
    });

    rsx! {
        FilePicker {}
    }
}
