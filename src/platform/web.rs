//! `requestAnimationFrame` scheduler for the browser

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{FrameScheduler, FrameToken};

/// Delivers frame tokens through `window.requestAnimationFrame`
pub struct RafScheduler {
    on_frame: Rc<dyn Fn(FrameToken, f64)>,
}

impl RafScheduler {
    /// `on_frame` receives the token and the rAF timestamp (ms)
    pub fn new(on_frame: impl Fn(FrameToken, f64) + 'static) -> Self {
        Self {
            on_frame: Rc::new(on_frame),
        }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = Option<i32>;

    fn request(&mut self, token: FrameToken) -> Option<i32> {
        let window = web_sys::window()?;
        let on_frame = self.on_frame.clone();
        // Frees itself once invoked
        let callback = Closure::once_into_js(move |time: f64| on_frame(token, time));
        match window.request_animation_frame(callback.unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: Option<i32>) {
        if let (Some(window), Some(id)) = (web_sys::window(), handle) {
            let _ = window.cancel_animation_frame(id);
        }
    }
}
