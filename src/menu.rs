// Mobile navigation: hamburger toggle plus close-on-navigate. Runs again
// after template injection since the nav ships inside the header fragment.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

const TOGGLE_ID: &str = "mobile-menu-toggle";
const NAV_ID: &str = "nav-menu";
const OPEN_CLASS: &str = "active";

pub fn init(document: &Document) -> Result<(), JsValue> {
    let toggle = match document.get_element_by_id(TOGGLE_ID) {
        Some(element) => element,
        None => return Ok(()),
    };
    let nav = match document.get_element_by_id(NAV_ID) {
        Some(element) => element,
        None => return Ok(()),
    };

    let open = Rc::new(Cell::new(false));

    {
        let open = Rc::clone(&open);
        let toggle_handle = toggle.clone();
        let nav_handle = nav.clone();
        let closure = Closure::wrap(Box::new(move || {
            open.set(!open.get());
            nav_handle.class_list().toggle(OPEN_CLASS).ok();
            set_hamburger(&toggle_handle, open.get());
        }) as Box<dyn FnMut()>);
        toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Navigating from the menu always closes it.
    let links = nav.query_selector_all("a")?;
    for index in 0..links.length() {
        let link = match links.get(index) {
            Some(node) => node,
            None => continue,
        };
        let open = Rc::clone(&open);
        let toggle_handle = toggle.clone();
        let nav_handle = nav.clone();
        let closure = Closure::wrap(Box::new(move || {
            open.set(false);
            nav_handle.class_list().remove_1(OPEN_CLASS).ok();
            set_hamburger(&toggle_handle, false);
        }) as Box<dyn FnMut()>);
        link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

// The three <span> bars rotate/fade into an X while the menu is open.
fn set_hamburger(toggle: &Element, open: bool) {
    let spans = match toggle.query_selector_all("span") {
        Ok(list) => list,
        Err(_) => return,
    };
    for index in 0..spans.length() {
        let span = match spans
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            Some(span) => span,
            None => continue,
        };
        let (transform, opacity) = match (open, index) {
            (true, 0) => ("rotate(-45deg) translate(-5px, 6px)", "1"),
            (true, 1) => ("none", "0"),
            (true, 2) => ("rotate(45deg) translate(-5px, -6px)", "1"),
            _ => ("none", "1"),
        };
        let style = span.style();
        style.set_property("transform", transform).ok();
        style.set_property("opacity", opacity).ok();
    }
}
