#![recursion_limit = "512"]

pub mod anim;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod bubbles;
pub mod content;
pub mod download;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
