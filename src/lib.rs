#![cfg(target_arch = "wasm32")]
use instant::Instant;
use orb_core::{DetectionMailbox, EngineConfig, FrameDriver};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas2d;
mod constants;
mod detector;
mod dom;
mod events;
mod frame;

use canvas2d::CanvasSurface;
use constants::CANVAS_ID;
use detector::FaceDetectorBridge;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orb-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (width, height) = dom::sync_canvas_backing_size(&canvas);
    let screen = CanvasSurface::new(canvas)?;
    let buffer = CanvasSurface::offscreen(&document, width, height)?;

    // Detector results arrive on MediaPipe callbacks; the frame loop drains them
    let mailbox = DetectionMailbox::new();
    let detector = Rc::new(RefCell::new(FaceDetectorBridge::start(&document, mailbox.clone())));

    let driver = FrameDriver::with_seed(EngineConfig::default(), buffer, mailbox, random_seed());
    log::info!("[init] canvas {width}x{height}, {} particles", driver.particles().len());

    let resize_pending = Rc::new(Cell::new(false));
    events::wire_resize(&window, resize_pending.clone());
    events::wire_pagehide(&window, detector);
    events::wire_first_interaction_fullscreen(&document);
    events::wire_global_keydown(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver,
        screen,
        document,
        resize_pending,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
