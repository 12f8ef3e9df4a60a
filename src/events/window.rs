use crate::detector::FaceDetectorBridge;
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// The first click, touch or key press anywhere requests fullscreen.
pub fn wire_first_interaction_fullscreen(document: &web::Document) {
    for event in ["click", "touchstart", "keydown"] {
        let doc = document.clone();
        dom::add_listener_once(document, event, move |_| dom::enter_fullscreen(&doc));
    }
}

/// Flag a resize for the frame loop; the work happens at the next frame.
pub fn wire_resize(window: &web::Window, resize_pending: Rc<Cell<bool>>) {
    dom::add_listener(window, "resize", move |_| resize_pending.set(true));
}

/// Release the camera when the page goes away.
pub fn wire_pagehide(window: &web::Window, detector: Rc<RefCell<Option<FaceDetectorBridge>>>) {
    dom::add_listener(window, "pagehide", move |_| {
        if let Some(bridge) = detector.borrow_mut().take() {
            log::info!("[detector] page hidden, stopping camera");
            bridge.stop();
        }
    });
}
