use super::keys::{action_for_key, KeyAction};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, document: &web::Document) {
    match action_for_key(&ev.key()) {
        Some(KeyAction::ToggleFullscreen) => {
            log::info!("[keys] toggle fullscreen");
            dom::toggle_fullscreen(document);
        }
        None => {}
    }
}

pub fn wire_global_keydown(document: &web::Document) {
    let doc = document.clone();
    dom::add_listener(document, "keydown", move |ev: web::Event| {
        if let Ok(kev) = ev.dyn_into::<web::KeyboardEvent>() {
            handle_global_keydown(&kev, &doc);
        }
    });
}
