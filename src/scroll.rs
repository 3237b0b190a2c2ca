// Scroll-driven chrome: the back-to-top button, the header restyle past the
// scroll threshold, reveal-on-scroll fade-ins, and smooth in-page anchors.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

const BACK_TO_TOP_THRESHOLD: f64 = 300.0;
const HEADER_THRESHOLD: f64 = 50.0;
const REVEAL_SELECTOR: &str = ".service-card, .why-item, .feature-item";

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    init_back_to_top(window, document)?;
    init_header_restyle(window, document)?;
    init_reveals(document)?;
    init_anchor_scrolling(document)?;
    Ok(())
}

fn init_back_to_top(window: &Window, document: &Document) -> Result<(), JsValue> {
    let button = match document.query_selector(".back-to-top")? {
        Some(button) => button,
        None => return Ok(()),
    };

    {
        let button = button.clone();
        let window_handle = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            let class_list = button.class_list();
            if window_handle.page_y_offset().unwrap_or(0.0) > BACK_TO_TOP_THRESHOLD {
                class_list.add_1("show").ok();
            } else {
                class_list.remove_1("show").ok();
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let window_handle = window.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window_handle.scroll_to_with_scroll_to_options(&options);
        }) as Box<dyn FnMut(Event)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn init_header_restyle(window: &Window, document: &Document) -> Result<(), JsValue> {
    let header = match document.query_selector("header")? {
        Some(header) => header.dyn_into::<HtmlElement>()?,
        None => return Ok(()),
    };
    let window_handle = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let style = header.style();
        if window_handle.scroll_y().unwrap_or(0.0) > HEADER_THRESHOLD {
            style
                .set_property("background", "rgba(255, 255, 255, 0.98)")
                .ok();
            style
                .set_property("box-shadow", "0 2px 30px rgba(0, 0, 0, 0.15)")
                .ok();
        } else {
            style
                .set_property("background", "rgba(255, 255, 255, 0.95)")
                .ok();
            style
                .set_property("box-shadow", "0 2px 20px rgba(0, 0, 0, 0.1)")
                .ok();
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

// One-shot reveal: observed cards start translated and transparent, then get
// faded in the first time they intersect the viewport. No reversal.
fn init_reveals(document: &Document) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                    let style = target.style();
                    style.set_property("opacity", "1").ok();
                    style.set_property("transform", "translateY(0)").ok();
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let targets = document.query_selector_all(REVEAL_SELECTOR)?;
    for index in 0..targets.length() {
        let element = match targets
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            Some(element) => element,
            None => continue,
        };
        let style = element.style();
        style.set_property("opacity", "0").ok();
        style.set_property("transform", "translateY(30px)").ok();
        style
            .set_property("transition", "opacity 0.6s ease, transform 0.6s ease")
            .ok();
        observer.observe(&element);
    }
    Ok(())
}

// Delegated handler: any in-page anchor click becomes a smooth scroll.
fn init_anchor_scrolling(document: &Document) -> Result<(), JsValue> {
    let document_handle = document.clone();
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let target = match event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        {
            Some(target) => target,
            None => return,
        };
        if target.tag_name() != "A" {
            return;
        }
        let href = match target.get_attribute("href") {
            Some(href) => href,
            None => return,
        };
        if !href.starts_with('#') || href.len() == 1 {
            return;
        }
        event.prevent_default();
        if let Ok(Some(section)) = document_handle.query_selector(&href) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }) as Box<dyn FnMut(Event)>);
    document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
