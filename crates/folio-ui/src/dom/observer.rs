//! `IntersectionObserver` adapter
//!
//! Implements [`VisibilityObserver`] for DOM elements. Each subscription owns
//! one `IntersectionObserver` and its JS callback; releasing the
//! subscription disconnects the observer and frees the callback.

use folio_core::observer::{IntersectionCallback, Subscription, VisibilityObserver};
use folio_core::{Error, Intersection, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Callback signature the browser invokes with a batch of entries.
type EntriesClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Viewport observation backed by the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomObserver;

impl DomObserver {
    /// Whether the browser exposes `IntersectionObserver`.
    #[must_use]
    pub fn is_supported() -> bool {
        web_sys::window().is_some_and(|w| {
            js_sys::Reflect::has(w.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
    }
}

impl VisibilityObserver for DomObserver {
    type Target = Element;

    fn subscribe(
        &self,
        target: &Element,
        threshold: f64,
        mut on_change: IntersectionCallback,
    ) -> Result<Subscription> {
        if !Self::is_supported() {
            web_sys::console::warn_1(
                &"IntersectionObserver unavailable, showing content without animation".into(),
            );
            return Err(Error::observer_unavailable(
                "IntersectionObserver is not supported",
            ));
        }

        let callback: EntriesClosure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_change(Intersection::new(
                            entry.intersection_ratio(),
                            entry.is_intersecting(),
                        ));
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| {
                    web_sys::console::error_1(&format!("IntersectionObserver failed: {e:?}").into());
                    Error::observer_unavailable(format!("{e:?}"))
                })?;

        observer.observe(target);

        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod tests {
    use folio_core::RevealConfig;
    use folio_core::observer::RevealGate;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_element(id: &str) -> Option<Element> {
        let document = web_sys::window()?.document()?;
        let element = document.create_element("section").ok()?;
        element.set_id(id);
        document.body()?.append_child(&element).ok()?;
        Some(element)
    }

    #[wasm_bindgen_test]
    fn test_browser_supports_observer() {
        assert!(DomObserver::is_supported());
    }

    #[wasm_bindgen_test]
    fn test_subscribe_and_release() -> std::result::Result<(), String> {
        let element = test_element("observer-release").ok_or("no element")?;
        let mut sub = DomObserver
            .subscribe(&element, 0.1, Box::new(|_| {}))
            .map_err(|e| e.to_string())?;

        assert!(sub.is_active());
        sub.cancel();
        assert!(!sub.is_active());
        Ok(())
    }

    #[wasm_bindgen_test]
    fn test_gate_mounts_on_element() -> std::result::Result<(), String> {
        let element = test_element("observer-gate").ok_or("no element")?;
        let gate = RevealGate::mount(
            &DomObserver,
            &element,
            RevealConfig::default(),
            crate::dom::now_seconds,
        );

        assert!(gate.is_observing());
        drop(gate);
        Ok(())
    }
}
