use crate::canvas2d::CanvasSurface;
use crate::constants::*;
use crate::dom;
use instant::Instant;
use orb_core::FrameDriver;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: FrameDriver<CanvasSurface>,
    pub screen: CanvasSurface,
    pub document: web::Document,
    /// Set by the window resize listener, consumed at the next frame.
    pub resize_pending: Rc<Cell<bool>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(self.last_instant).as_secs_f64() * 1000.0;
        // High refresh displays call back more often than the target rate
        if elapsed_ms < FRAME_INTERVAL_MS * FRAME_EARLY_TOLERANCE {
            return;
        }
        if elapsed_ms > FRAME_STALL_MS {
            log::debug!("[frame] resumed after {:.0} ms", elapsed_ms);
        }
        self.last_instant = now;

        if self.resize_pending.replace(false) {
            self.apply_resize();
        }
        self.driver.frame(&mut self.screen);
    }

    fn apply_resize(&mut self) {
        let (w, h) = dom::sync_canvas_backing_size(self.screen.canvas());
        match CanvasSurface::offscreen(&self.document, w, h) {
            Ok(buffer) => self.driver.resize(buffer),
            Err(e) => log::error!("[frame] offscreen buffer error: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
