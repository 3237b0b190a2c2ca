// Shared header/footer markup is fetched at startup and spliced into the
// placeholder nodes. A failed fetch is logged and the placeholder stays
// empty; there is no retry.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, Document, Response, Window};

use crate::menu;

const HEADER_URL: &str = "templates/header.html";
const FOOTER_URL: &str = "templates/footer.html";
const HEADER_PLACEHOLDER: &str = "header-placeholder";
const FOOTER_PLACEHOLDER: &str = "footer-placeholder";

pub async fn inject(window: Window, document: Document) {
    if let Err(error) = load_into(&window, &document).await {
        console::error_2(&"Error loading templates:".into(), &error);
    }
}

async fn load_into(window: &Window, document: &Document) -> Result<(), JsValue> {
    splice(window, document, HEADER_URL, HEADER_PLACEHOLDER).await?;
    splice(window, document, FOOTER_URL, FOOTER_PLACEHOLDER).await?;

    // The nav markup arrives with the header, so the menu has to be wired
    // again once the fragments are in place.
    menu::init(document)?;
    Ok(())
}

async fn splice(
    window: &Window,
    document: &Document,
    url: &str,
    placeholder_id: &str,
) -> Result<(), JsValue> {
    let response: Response = JsFuture::from(window.fetch_with_str(url)).await?.dyn_into()?;
    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    if let Some(placeholder) = document.get_element_by_id(placeholder_id) {
        placeholder.set_inner_html(&text);
    }
    Ok(())
}
