//! Studio stats band with count-up animation.
//!
//! The counters stay at 0 until the section scrolls into view (threshold
//! 0.5), then a single requestAnimationFrame loop drives every counter from
//! 0 to its data-target over ~2 seconds.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

const COUNTER_DURATION_MS: f64 = 2000.0;

const STATS: [(&str, u32); 4] = [
    ("Projects Delivered", 120),
    ("Happy Clients", 45),
    ("Years in Business", 8),
    ("Industry Awards", 12),
];

fn start_counters(section: &Element) {
    let Ok(nodes) = section.query_selector_all(".counter") else {
        return;
    };
    let mut counters: Vec<(HtmlElement, f64)> = Vec::new();
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else { continue };
        let Ok(el) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let target = el
            .get_attribute("data-target")
            .and_then(|t| t.parse::<f64>().ok())
            .unwrap_or(0.0);
        counters.push((el, target));
    }
    if counters.is_empty() {
        return;
    }

    let start = js_sys::Date::now();
    // The closure owns itself through the Rc so the loop survives until the
    // animation finishes; the cycle lives for the page, which is fine here.
    let raf: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_inner = raf.clone();
    *raf.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let t = ((js_sys::Date::now() - start) / COUNTER_DURATION_MS).min(1.0);
        for (el, target) in &counters {
            let value = (target * t).ceil() as u64;
            el.set_inner_text(&value.to_string());
        }
        if t < 1.0 {
            if let (Some(window), Some(cb)) = (web_sys::window(), raf_inner.borrow().as_ref()) {
                let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let (Some(window), Some(cb)) = (web_sys::window(), raf.borrow().as_ref()) {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_effect_with((), move |_| {
            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            let target = entry.target();
                            observer.unobserve(&target);
                            start_counters(&target);
                        }
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.5));
            let observer = IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok();
            if let (Some(observer), Some(section)) =
                (observer.as_ref(), section_ref.cast::<Element>())
            {
                observer.observe(&section);
            }
            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        });
    }

    html! {
        <section ref={section_ref} style="background:#0b1f3a; color:#fff; padding:56px 24px;">
            <div style="max-width:960px; margin:0 auto; display:grid; grid-template-columns:repeat(auto-fit, minmax(160px, 1fr)); gap:24px; text-align:center;">
                { for STATS.iter().map(|(label, target)| html! {
                    <div>
                        <div style="font-size:40px; font-weight:700;">
                            <span class="counter" data-target={target.to_string()}>{"0"}</span>
                            <span style="color:#ff7a45;">{"+"}</span>
                        </div>
                        <div style="margin-top:6px; font-size:13px; letter-spacing:0.08em; text-transform:uppercase; opacity:0.7;">{ *label }</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
