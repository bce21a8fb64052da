mod app;
mod catalog_view;
mod diag;
mod dom;
mod player_view;
mod theme;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_family = "wasm")]
    console_error_panic_hook::set_once();

    if let Err(e) = app::mount() {
        diag::console_error!("failed to mount: {e:?}");
    }
}
