// requestAnimationFrame loop with an explicit lifecycle. The simulation
// itself never sees this type; tests drive `ParticleField::step` directly and
// the browser clock only exists here.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub struct FrameLoop {
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Wraps `tick` in a self-rescheduling frame callback. The loop is built
    /// stopped; call [`FrameLoop::start`] to begin.
    pub fn new<F>(mut tick: F) -> FrameLoop
    where
        F: FnMut() + 'static,
    {
        let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let inner_callback = Rc::clone(&callback);
        let inner_pending = Rc::clone(&pending);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // A frame firing after stop() is dropped on the floor.
            if inner_pending.get().is_none() {
                return;
            }
            tick();
            let borrowed = inner_callback.borrow();
            if let Some(closure) = borrowed.as_ref() {
                inner_pending.set(Some(request_animation_frame(closure)));
            }
        }) as Box<dyn FnMut()>));

        FrameLoop { callback, pending }
    }

    pub fn start(&self) {
        if self.pending.get().is_some() {
            return;
        }
        if let Some(closure) = self.callback.borrow().as_ref() {
            self.pending.set(Some(request_animation_frame(closure)));
        }
    }

    pub fn stop(&self) {
        if let Some(handle) = self.pending.take() {
            window().cancel_animation_frame(handle).ok();
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.get().is_some()
    }
}

fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

fn request_animation_frame(closure: &Closure<dyn FnMut()>) -> i32 {
    window()
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .expect("requestAnimationFrame failed")
}
