// Wires the particle field, renderer, and frame loop to the DOM. The whole
// module is a no-op when the backdrop canvas is missing from the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, HtmlCanvasElement, MouseEvent, Window};

use crate::field::{ParticleField, PointerSnapshot};
use crate::frame::FrameLoop;
use crate::renderer::CanvasRenderer;
use crate::utils::Timer;

const CANVAS_ID: &str = "background-canvas";

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let canvas = match document.get_element_by_id(CANVAS_ID) {
        Some(element) => element.dyn_into::<HtmlCanvasElement>()?,
        None => return Ok(()),
    };

    let (width, height) = viewport_size(window);
    let renderer = Rc::new(CanvasRenderer::new(canvas)?);
    renderer.resize(width as u32, height as u32);

    let field = Rc::new(RefCell::new(ParticleField::new(width, height)));
    let pointer = Rc::new(Cell::new(PointerSnapshot::default()));

    // Draw first, then advance, matching the original frame cadence.
    let tick_field = Rc::clone(&field);
    let tick_pointer = Rc::clone(&pointer);
    let tick_renderer = Rc::clone(&renderer);
    let frame_loop = Rc::new(FrameLoop::new(move || {
        let mut field = tick_field.borrow_mut();
        if let Err(error) = tick_renderer.draw(&field) {
            console::error_2(&"backdrop draw failed".into(), &error);
        }
        field.step(tick_pointer.get());
    }));
    frame_loop.start();

    // Resizing rebuilds the whole population against the new surface.
    {
        let field = Rc::clone(&field);
        let renderer = Rc::clone(&renderer);
        let window_handle = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            let _timer = Timer::new("backdrop rebuild");
            let (width, height) = viewport_size(&window_handle);
            renderer.resize(width as u32, height as u32);
            field.borrow_mut().reset(width, height);
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Pointer coordinates are only recorded here; the frame loop snapshots
    // them once per tick.
    {
        let pointer = Rc::clone(&pointer);
        let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            pointer.set(PointerSnapshot {
                x: event.client_x() as f64,
                y: event.client_y() as f64,
            });
        }) as Box<dyn FnMut(MouseEvent)>);
        window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Suspend the animation while the tab is hidden.
    {
        let document_handle = document.clone();
        let frame_loop = Rc::clone(&frame_loop);
        let closure = Closure::wrap(Box::new(move || {
            if document_handle.hidden() {
                frame_loop.stop();
            } else {
                frame_loop.start();
            }
        }) as Box<dyn FnMut()>);
        document.add_event_listener_with_callback(
            "visibilitychange",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
    }

    Ok(())
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width, height)
}
