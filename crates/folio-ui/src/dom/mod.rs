//! Browser host capabilities
//!
//! Thin, panic-free wrappers over `web-sys` for the three things the page
//! needs from the browser: viewport observation, a clock, and frame
//! scheduling.

pub mod observer;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub use observer::DomObserver;

/// Seconds since page load, from the high-resolution timer when present.
#[must_use]
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or_else(|| js_sys::Date::now() / 1000.0, |p| p.now() / 1000.0)
}

/// Calendar year on the host clock.
#[must_use]
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Run `f` on the next animation frame.
///
/// Without a window or if scheduling fails, `f` runs immediately so
/// content is never left waiting.
pub fn next_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        f();
        return;
    };

    // The callback is shared so a failed request can still run it here.
    let pending = std::rc::Rc::new(std::cell::Cell::new(Some(f)));
    let scheduled = std::rc::Rc::clone(&pending);
    let callback = Closure::once_into_js(move || {
        if let Some(f) = scheduled.take() {
            f();
        }
    });

    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        web_sys::console::warn_1(&format!("requestAnimationFrame failed: {e:?}").into());
        if let Some(f) = pending.take() {
            f();
        }
    }
}
