//! Bridge to the MediaPipe `FaceDetection` and `Camera` globals loaded by the
//! page. Everything here reports into a [`DetectionMailbox`]; no error ever
//! reaches the render loop.

use crate::constants::*;
use js_sys::{Array, Function, Object, Promise, Reflect};
use orb_core::{DetectionMailbox, DetectionSample, DetectorError, DetectorEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{future_to_promise, spawn_local, JsFuture};
use web_sys as web;

/// Best-effort human readable text for a thrown JS value.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(msg) = Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
    {
        return msg;
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn global_constructor(name: &str) -> Option<Function> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
}

fn set(obj: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(obj, &JsValue::from_str(key), value).map(|_| ())
}

fn call_method(target: &JsValue, name: &str, args: &Array) -> Result<JsValue, JsValue> {
    let method = Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str(&format!("{name} is not a function")))?;
    Reflect::apply(&method, target, args)
}

/// `results.detections.length > 0`, treating anything missing as no face.
fn faces_found(results: &JsValue) -> bool {
    Reflect::get(results, &JsValue::from_str("detections"))
        .ok()
        .filter(|d| !d.is_undefined() && !d.is_null())
        .and_then(|d| Reflect::get(&d, &JsValue::from_str("length")).ok())
        .and_then(|len| len.as_f64())
        .map(|len| len > 0.0)
        .unwrap_or(false)
}

pub struct FaceDetectorBridge {
    video: web::HtmlVideoElement,
    camera: JsValue,
    mailbox: DetectionMailbox,
    _locate_file: Closure<dyn FnMut(String) -> String>,
    _on_results: Closure<dyn FnMut(JsValue)>,
    _on_frame: Closure<dyn FnMut() -> Promise>,
}

impl FaceDetectorBridge {
    /// Create the hidden video element, detector and camera and start
    /// streaming. Missing globals are reported as `Unavailable` and yield
    /// `None`.
    pub fn start(document: &web::Document, mailbox: DetectionMailbox) -> Option<Self> {
        let Some(detector_ctor) = global_constructor(FACE_DETECTION_GLOBAL) else {
            mailbox.post_event(DetectorEvent::Failed(DetectorError::Unavailable(
                FACE_DETECTION_GLOBAL.to_string(),
            )));
            return None;
        };
        let Some(camera_ctor) = global_constructor(CAMERA_GLOBAL) else {
            mailbox.post_event(DetectorEvent::Failed(DetectorError::Unavailable(CAMERA_GLOBAL.to_string())));
            return None;
        };

        mailbox.post_event(DetectorEvent::Starting);
        match Self::build(document, &mailbox, &detector_ctor, &camera_ctor) {
            Ok(bridge) => {
                bridge.start_camera();
                Some(bridge)
            }
            Err(e) => {
                let msg = js_error_message(&e);
                mailbox.post_event(DetectorEvent::Failed(DetectorError::Acquisition(msg)));
                None
            }
        }
    }

    fn build(
        document: &web::Document,
        mailbox: &DetectionMailbox,
        detector_ctor: &Function,
        camera_ctor: &Function,
    ) -> Result<Self, JsValue> {
        let video = document
            .create_element("video")?
            .dyn_into::<web::HtmlVideoElement>()?;
        video.set_attribute("playsinline", "")?;
        video.set_muted(true);
        video.set_autoplay(true);
        let style = video.style();
        style.set_property("position", "fixed")?;
        style.set_property("left", "-9999px")?;
        document
            .body()
            .ok_or_else(|| JsValue::from_str("no document body"))?
            .append_child(&video)?;

        let locate_file = Closure::wrap(
            Box::new(|file: String| format!("{FACE_DETECTION_CDN}/{file}")) as Box<dyn FnMut(String) -> String>,
        );
        let ctor_opts = Object::new();
        set(&ctor_opts, "locateFile", locate_file.as_ref())?;
        let detector = Reflect::construct(detector_ctor, &Array::of1(&ctor_opts))?;

        let opts = Object::new();
        set(&opts, "model", &JsValue::from_str(FACE_MODEL))?;
        set(&opts, "minDetectionConfidence", &JsValue::from_f64(MIN_DETECTION_CONFIDENCE))?;
        call_method(&detector, "setOptions", &Array::of1(&opts))?;

        let results_box = mailbox.clone();
        let on_results = Closure::wrap(Box::new(move |results: JsValue| {
            results_box.post_sample(DetectionSample::new(faces_found(&results)));
        }) as Box<dyn FnMut(JsValue)>);
        call_method(&detector, "onResults", &Array::of1(on_results.as_ref()))?;

        let frame_box = mailbox.clone();
        let frame_detector = detector.clone();
        let frame_video = video.clone();
        let on_frame = Closure::wrap(Box::new(move || {
            let mailbox = frame_box.clone();
            let detector = frame_detector.clone();
            let video = frame_video.clone();
            future_to_promise(async move {
                let input = Object::new();
                set(&input, "image", &video)?;
                let sent = call_method(&detector, "send", &Array::of1(&input))
                    .and_then(|p| p.dyn_into::<Promise>().map_err(|_| JsValue::from_str("send did not return a promise")));
                let outcome = match sent {
                    Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
                    Err(e) => Err(e),
                };
                if let Err(e) = outcome {
                    mailbox.post_event(DetectorEvent::Failed(DetectorError::Sample(js_error_message(&e))));
                }
                Ok(JsValue::UNDEFINED)
            })
        }) as Box<dyn FnMut() -> Promise>);

        let cam_opts = Object::new();
        set(&cam_opts, "onFrame", on_frame.as_ref())?;
        set(&cam_opts, "width", &JsValue::from(CAMERA_WIDTH))?;
        set(&cam_opts, "height", &JsValue::from(CAMERA_HEIGHT))?;
        let camera = Reflect::construct(camera_ctor, &Array::of2(&video, &cam_opts))?;

        Ok(Self {
            video,
            camera,
            mailbox: mailbox.clone(),
            _locate_file: locate_file,
            _on_results: on_results,
            _on_frame: on_frame,
        })
    }

    fn start_camera(&self) {
        let started = call_method(&self.camera, "start", &Array::new())
            .and_then(|p| p.dyn_into::<Promise>().map_err(|_| JsValue::from_str("start did not return a promise")));
        let mailbox = self.mailbox.clone();
        match started {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    mailbox.post_event(DetectorEvent::Failed(DetectorError::Acquisition(js_error_message(&e))));
                }
            }),
            Err(e) => {
                mailbox.post_event(DetectorEvent::Failed(DetectorError::Acquisition(js_error_message(&e))));
            }
        }
    }

    /// Stop camera and tracks and remove the video element. Each step is
    /// independent so one failure does not skip the rest.
    pub fn stop(self) {
        if let Err(e) = call_method(&self.camera, "stop", &Array::new()) {
            log::warn!("[detector] error stopping camera: {}", js_error_message(&e));
        }

        if let Some(stream) = self.video.src_object() {
            let tracks = stream.get_tracks();
            for track in tracks.iter() {
                match track.dyn_into::<web::MediaStreamTrack>() {
                    Ok(t) => t.stop(),
                    Err(e) => log::warn!("[detector] unexpected track value: {:?}", e),
                }
            }
            self.video.set_src_object(None);
        }

        if let Some(parent) = self.video.parent_node() {
            if let Err(e) = parent.remove_child(&self.video) {
                log::warn!("[detector] error removing video element: {}", js_error_message(&e));
            }
        }

        self.mailbox.post_event(DetectorEvent::Stopped);

        // in-flight detector callbacks may still fire after stop
        let Self {
            _locate_file,
            _on_results,
            _on_frame,
            ..
        } = self;
        _locate_file.forget();
        _on_results.forget();
        _on_frame.forget();
    }
}
