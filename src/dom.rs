use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window inner size in CSS pixels; the canvas runs at pixel density 1.
pub fn window_inner_size() -> (u32, u32) {
    let Some(w) = web::window() else {
        return (1, 1);
    };
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0) as u32
    };
    (px(w.inner_width()), px(w.inner_height()))
}

/// Match the canvas backing store to the window size. Returns the new size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = window_inner_size();
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

/// Attach `handler` to `target` for the lifetime of the page.
pub fn add_listener(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] {event} listener error: {:?}", e);
    }
    closure.forget();
}

/// Like [`add_listener`] but the browser drops the listener after one call.
pub fn add_listener_once(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[dom] {event} listener error: {:?}", e);
    }
    closure.forget();
}

pub fn is_fullscreen(document: &web::Document) -> bool {
    document.fullscreen_element().is_some()
}

pub fn enter_fullscreen(document: &web::Document) {
    if is_fullscreen(document) {
        return;
    }
    if let Some(root) = document.document_element() {
        // Browsers reject this outside a user gesture; nothing to recover.
        _ = root.request_fullscreen();
    }
}

pub fn toggle_fullscreen(document: &web::Document) {
    if is_fullscreen(document) {
        document.exit_fullscreen();
    } else {
        enter_fullscreen(document);
    }
}
