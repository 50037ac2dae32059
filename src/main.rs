#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod profile;

use components::ProfileCard;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting profile card");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Stylesheet { href: "https://cdn.jsdelivr.net/npm/tailwindcss@2/dist/tailwind.min.css" }

        div {
            class: "min-h-screen flex items-center justify-center bg-gray-100",
            ProfileCard {}
        }
    }
}
