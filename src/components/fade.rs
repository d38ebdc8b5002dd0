//! Scroll-triggered fade-in.
//!
//! An IntersectionObserver watches elements carrying `fade-hidden` and adds
//! `fade-visible` the first time they cross into view, then unobserves them.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub struct FadeObserver {
    observer: IntersectionObserver,
    // keeps the JS callback alive as long as the observer
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl FadeObserver {
    pub fn new() -> Option<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        let target = entry.target();
                        let _ = target.class_list().add_1("fade-visible");
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        options.set_root_margin("0px 0px -50px 0px");
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        Some(Self {
            observer,
            _callback: callback,
        })
    }

    /// Observe every not-yet-revealed element under `root`. Re-running after
    /// a render that appended cards is harmless: already-revealed elements
    /// just get `fade-visible` re-added.
    pub fn observe_all(&self, root: &Element) {
        let Ok(nodes) = root.query_selector_all(".fade-hidden") else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(node) = nodes.get(i) {
                if let Ok(el) = node.dyn_into::<Element>() {
                    self.observer.observe(&el);
                }
            }
        }
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}
