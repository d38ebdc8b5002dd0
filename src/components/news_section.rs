//! News list: the latest few entries, newest first.

use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

use super::fade::FadeObserver;
use super::news_card::NewsCard;
use crate::model::{Collection, NEWS_DISPLAY_COUNT};

#[derive(Properties, PartialEq, Clone)]
pub struct NewsSectionProps {
    pub collection: Option<Rc<Collection>>,
    pub on_open: Callback<String>,
}

#[function_component(NewsSection)]
pub fn news_section(props: &NewsSectionProps) -> Html {
    let list_ref = use_node_ref();

    {
        let list_ref = list_ref.clone();
        use_effect_with(props.collection.clone(), move |_| {
            let observer = FadeObserver::new();
            if let (Some(observer), Some(list)) = (observer.as_ref(), list_ref.cast::<Element>()) {
                observer.observe_all(&list);
            }
            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
            }
        });
    }

    let Some(collection) = &props.collection else {
        return html! {
            <section id="news-section" style="padding:64px 24px; text-align:center; color:#94a3b8;">
                {"Loading news…"}
            </section>
        };
    };

    html! {
        <section id="news-section" style="padding:64px 24px;">
            <div style="max-width:960px; margin:0 auto;">
                <h2 style="font-size:28px; color:#0b1f3a; margin:0 0 24px 0;">{"News"}</h2>
                <div ref={list_ref} id="news-grid" style="display:flex; flex-direction:column; gap:20px;">
                    { for collection.items.iter().take(NEWS_DISPLAY_COUNT).map(|item| html! {
                        <NewsCard item={item.clone()} on_open={props.on_open.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
