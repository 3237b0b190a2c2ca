// Client-side behavior for the marketing site, compiled to WebAssembly:
// the animated particle backdrop, shared header/footer injection, the mobile
// navigation, scroll chrome, and the contact form's WhatsApp/email hand-off.

pub mod background;
pub mod color;
pub mod field;
pub mod form;
pub mod frame;
pub mod menu;
pub mod particle;
pub mod renderer;
pub mod scroll;
pub mod templates;
pub mod utils;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Runs once when the module is instantiated, the same point in page life the
// original wired everything on DOMContentLoaded.
#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    utils::set_panic_hook();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("window has no document");

    background::init(&window, &document)?;
    menu::init(&document)?;
    scroll::init(&window, &document)?;
    form::init(&window, &document)?;

    // Header/footer fragments arrive over fetch; everything above tolerates
    // the markup not being there yet.
    wasm_bindgen_futures::spawn_local(templates::inject(window, document));

    Ok(())
}
