//! Works grid: filter tabs, paginated cards, load-more control.

use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

use super::fade::FadeObserver;
use super::work_card::WorkCard;
use crate::model::{ALL_CATEGORIES, Collection, categories, visible};
use crate::state::{DisplayAction, DisplayState};
use crate::util::initial_display_count;

#[derive(Properties, PartialEq, Clone)]
pub struct WorksSectionProps {
    /// `None` while the collection is still loading.
    pub collection: Option<Rc<Collection>>,
    pub on_open: Callback<String>,
}

#[function_component(WorksSection)]
pub fn works_section(props: &WorksSectionProps) -> Html {
    let display = use_reducer(|| DisplayState::new(initial_display_count()));
    let grid_ref = use_node_ref();

    // Register freshly painted cards with the fade-in observer. Re-runs on
    // every filter/pagination/data change so appended cards are picked up.
    {
        let grid_ref = grid_ref.clone();
        use_effect_with(
            ((*display).clone(), props.collection.clone()),
            move |_| {
                let observer = FadeObserver::new();
                if let (Some(observer), Some(grid)) = (observer.as_ref(), grid_ref.cast::<Element>())
                {
                    observer.observe_all(&grid);
                }
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                }
            },
        );
    }

    let Some(collection) = &props.collection else {
        return html! {
            <section id="works-section" style="padding:64px 24px; text-align:center; color:#94a3b8;">
                {"Loading works…"}
            </section>
        };
    };

    let (items, has_more) = visible(&collection.items, &display.filter, display.shown);

    let mut tabs: Vec<String> = vec![ALL_CATEGORIES.to_string()];
    tabs.extend(categories(&collection.items));

    let on_filter = |category: String| {
        let display = display.clone();
        Callback::from(move |_: MouseEvent| {
            display.dispatch(DisplayAction::SetFilter(category.clone()))
        })
    };
    let on_load_more = {
        let display = display.clone();
        Callback::from(move |_: MouseEvent| display.dispatch(DisplayAction::LoadMore))
    };

    html! {
        <section id="works-section" style="padding:64px 24px; background:#f8fafc;">
            <div style="max-width:1080px; margin:0 auto;">
                <h2 style="font-size:28px; color:#0b1f3a; margin:0 0 24px 0;">{"Works"}</h2>
                <div style="display:flex; gap:10px; flex-wrap:wrap; margin-bottom:28px;">
                    { for tabs.iter().map(|tab| {
                        let active = *tab == display.filter;
                        let style = if active {
                            "padding:6px 16px; border-radius:18px; border:1px solid #0b1f3a; background:#0b1f3a; color:#fff; cursor:pointer; font-size:13px;"
                        } else {
                            "padding:6px 16px; border-radius:18px; border:1px solid #e2e8f0; background:#fff; color:#334155; cursor:pointer; font-size:13px;"
                        };
                        html! {
                            <button class="tab-btn" {style} onclick={on_filter(tab.clone())}>{ tab }</button>
                        }
                    }) }
                </div>
                <div ref={grid_ref} id="works-grid"
                    style="display:grid; grid-template-columns:repeat(auto-fill, minmax(280px, 1fr)); gap:24px;">
                    { for items.iter().map(|item| html! {
                        <WorkCard item={(*item).clone()} on_open={props.on_open.clone()} />
                    }) }
                </div>
                if has_more {
                    <div style="text-align:center; margin-top:32px;">
                        <button id="load-more-btn" onclick={on_load_more}
                            style="padding:10px 28px; border:1px solid #0b1f3a; border-radius:22px; background:#fff; color:#0b1f3a; cursor:pointer; font-size:14px;">
                            {"Load more"}
                        </button>
                    </div>
                }
            </div>
        </section>
    }
}
