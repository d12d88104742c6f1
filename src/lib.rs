#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod geometry;
#[cfg(feature = "ssr")]
pub mod relay;
pub mod theme;
pub mod typewriter;
#[cfg(feature = "webp")]
pub mod webp;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
