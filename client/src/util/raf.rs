//! Continuous `requestAnimationFrame` loop with cancel-on-drop.
//!
//! The overlay repaints every frame while a trail is decaying, so unlike a
//! one-shot "render requested" scheduler this keeps re-arming itself until
//! cancelled. The closure must stay alive for as long as the browser may call
//! it, hence the shared holder; dropping the loop cancels the pending frame
//! and releases the closure.

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Handle to a running animation-frame loop.
#[cfg(feature = "hydrate")]
pub struct RenderLoop {
    closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    frame_id: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
}

#[cfg(feature = "hydrate")]
impl RenderLoop {
    /// Start calling `frame` once per animation frame until cancelled.
    pub fn start(mut frame: impl FnMut() + 'static) -> Self {
        let closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));
        let cancelled = Rc::new(Cell::new(false));

        let closure_for_cb = Rc::clone(&closure);
        let frame_id_for_cb = Rc::clone(&frame_id);
        let cancelled_for_cb = Rc::clone(&cancelled);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            if cancelled_for_cb.get() {
                return;
            }
            frame();
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Some(cb) = closure_for_cb.borrow().as_ref()
                && let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref())
            {
                frame_id_for_cb.set(Some(id));
            }
        }) as Box<dyn FnMut(f64)>);

        if let Some(window) = web_sys::window()
            && let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref())
        {
            frame_id.set(Some(id));
        }
        *closure.borrow_mut() = Some(cb);

        Self { closure, frame_id, cancelled }
    }

    /// Stop the loop and cancel any pending frame.
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let (Some(window), Some(id)) = (web_sys::window(), self.frame_id.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.closure.borrow_mut().take();
    }
}

#[cfg(feature = "hydrate")]
impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
