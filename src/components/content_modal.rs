//! Shared detail-modal shell for both collections.
//!
//! The shell is owned and constructed by this component for works and news
//! alike; whichever item the modal state names gets bound into it. The body
//! Markdown is converted to HTML and injected as-is. While the state is
//! `Closing` the shell stays mounted without the `show` class so the CSS
//! fade-out can play before the finalize timer unmounts it.

use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

use super::news_card;
use super::work_card;
use crate::markdown;
use crate::model::{Collection, Kind};
use crate::state::ModalState;

#[derive(Properties, PartialEq, Clone)]
pub struct ContentModalProps {
    pub modal: UseReducerHandle<ModalState>,
    pub works: Option<Rc<Collection>>,
    pub news: Option<Rc<Collection>>,
    pub on_close: Callback<()>,
}

#[function_component(ContentModal)]
pub fn content_modal(props: &ContentModalProps) -> Html {
    let scroll_ref = use_node_ref();
    let is_open = props.modal.is_open();
    let active: Option<(Kind, String)> = props
        .modal
        .active()
        .map(|(kind, id)| (kind, id.to_string()));

    // Escape closes while open.
    {
        let on_close = props.on_close.clone();
        use_effect_with(is_open, move |open| {
            let document = web_sys::window().and_then(|w| w.document());
            let callback = (*open).then(|| {
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(_)>)
            });
            if let (Some(doc), Some(cb)) = (&document, &callback) {
                let _ = doc.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
            }
            move || {
                if let (Some(doc), Some(cb)) = (document, callback) {
                    let _ =
                        doc.remove_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
                }
            }
        });
    }

    // Lock page scroll behind the open modal.
    use_effect_with(is_open, |open| {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = &body {
            if *open {
                let _ = body.class_list().add_1("modal-open");
            } else {
                let _ = body.class_list().remove_1("modal-open");
            }
        }
        || ()
    });

    // Every newly bound item starts scrolled to the top.
    {
        let scroll_ref = scroll_ref.clone();
        use_effect_with(active.clone(), move |active| {
            if active.is_some() {
                if let Some(el) = scroll_ref.cast::<Element>() {
                    el.set_scroll_top(0);
                }
            }
            || ()
        });
    }

    let Some((kind, id)) = active else {
        return html! {};
    };
    let collection = match kind {
        Kind::Works => &props.works,
        Kind::News => &props.news,
    };
    let Some(collection) = collection else {
        return html! {};
    };
    let (Some(item), Some(body)) = (collection.get(&id), collection.body(&id)) else {
        return html! {};
    };

    let body_html = Html::from_html_unchecked(AttrValue::from(markdown::to_html(body)));
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div id="content-modal" class={classes!("modal", is_open.then_some("show"))}>
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-content">
                <button class="modal-close" onclick={close} aria-label="close">{"✕"}</button>
                <div class="modal-scroll" ref={scroll_ref}>
                    <div class="modal-image-container">
                        <img class={classes!("modal-image-element", item.image_position.css_class())}
                            src={item.image.clone()} alt={item.title.clone()} />
                    </div>
                    <div class="modal-text">
                        <div style="display:flex; align-items:center; gap:12px; margin-bottom:14px;">
                            <span class="modal-date">{ &item.date }</span>
                            {
                                match kind {
                                    Kind::Works => html! {
                                        <span class={classes!("modal-badge", work_card::badge_class(&item.badge_color))}>
                                            { &item.badge }
                                        </span>
                                    },
                                    Kind::News => html! {
                                        <span class={classes!("news-badge", news_card::badge_class(&item.category_color))}>
                                            { &item.category }
                                        </span>
                                    },
                                }
                            }
                        </div>
                        <h2 class="modal-title">{ &item.title }</h2>
                        <div class="modal-body markdown-content">
                            { body_html }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
