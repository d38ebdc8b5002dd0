//! Root component: loads both collections, owns the modal state machine,
//! and keeps it in sync with the location hash.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::content_modal::ContentModal;
use super::expander::Expander;
use super::nav::Nav;
use super::news_section::NewsSection;
use super::stats_section::StatsSection;
use super::works_section::WorksSection;
use crate::content;
use crate::model::{Collection, Kind};
use crate::routing::{self, RouteOutcome};
use crate::state::{MODAL_CLOSE_MS, ModalAction, ModalState};
use crate::util::{cerror, clog};

const SERVICES: [(&str, &str); 6] = [
    ("Brand Identity", "Naming, logo systems and guidelines that scale."),
    ("Web Design", "Marketing sites and product surfaces, design to launch."),
    ("Art Direction", "Campaign visuals and photography direction."),
    ("Editorial", "Print and digital publications, end to end."),
    ("Motion", "Short-form motion graphics for product and social."),
    ("Consulting", "Design audits and in-house team coaching."),
];

#[function_component(App)]
pub fn app() -> Html {
    // `None` = still loading; an empty collection after a failed load keeps
    // the rest of the page usable and lets pending deep links give up.
    let works = use_state_eq(|| None::<Rc<Collection>>);
    let news = use_state_eq(|| None::<Rc<Collection>>);
    let modal = use_reducer(ModalState::default);
    let route = use_state_eq(routing::current_route);

    // One-shot content load for both collections.
    {
        let works = works.clone();
        let news = news.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match content::load(Kind::Works).await {
                    Ok(collection) => works.set(Some(Rc::new(collection))),
                    Err(err) => {
                        cerror(&format!("error loading works data: {err}"));
                        works.set(Some(Rc::new(Collection::default())));
                    }
                }
            });
            spawn_local(async move {
                match content::load(Kind::News).await {
                    Ok(collection) => news.set(Some(Rc::new(collection))),
                    Err(err) => {
                        cerror(&format!("error loading news data: {err}"));
                        news.set(Some(Rc::new(Collection::default())));
                    }
                }
            });
            || ()
        });
    }

    // Track the location hash; this is how back/forward and direct links
    // drive the modal.
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let callback = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                route.set(routing::current_route());
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
                .expect("hashchange listener");
            move || {
                let _ = window.remove_event_listener_with_callback(
                    "hashchange",
                    callback.as_ref().unchecked_ref(),
                );
            }
        });
    }

    let close_modal = {
        let modal = modal.clone();
        let route = route.clone();
        Callback::from(move |_: ()| {
            let ModalState::Open { kind, id } = (*modal).clone() else {
                return;
            };
            modal.dispatch(ModalAction::Close);
            routing::clear_hash(kind, &id);
            route.set(None);
            let modal = modal.clone();
            Timeout::new(MODAL_CLOSE_MS, move || {
                modal.dispatch(ModalAction::Finalize);
            })
            .forget();
        })
    };

    // Apply the current route once its collection is available. Runs again
    // whenever a collection finishes loading, so a deep link that arrived
    // early opens the moment its data does — no polling.
    {
        let modal = modal.clone();
        let close = close_modal.clone();
        use_effect_with(
            ((*route).clone(), (*works).clone(), (*news).clone()),
            move |(route, works, news)| {
                match routing::apply_route(route.as_ref(), works.as_deref(), news.as_deref()) {
                    RouteOutcome::Open { kind, id } => {
                        modal.dispatch(ModalAction::Open { kind, id });
                    }
                    RouteOutcome::Unknown => {
                        if let Some(r) = route {
                            clog(&format!(
                                "hash names unknown {} id '{}'",
                                r.kind.as_str(),
                                r.id
                            ));
                        }
                    }
                    RouteOutcome::Wait => {}
                    RouteOutcome::Close => close.emit(()),
                }
                || ()
            },
        );
    }

    // Opening from a card writes the hash as well, so the modal address is
    // shareable; the resulting hashchange re-open is a no-op.
    let open_from = |kind: Kind, collection: Option<Rc<Collection>>| {
        let modal = modal.clone();
        Callback::from(move |id: String| {
            let Some(collection) = &collection else {
                return;
            };
            if !collection.openable(&id) {
                clog(&format!("{} entry '{id}' has no loaded body", kind.as_str()));
                return;
            }
            modal.dispatch(ModalAction::Open {
                kind,
                id: id.clone(),
            });
            routing::set_hash(kind, &id);
        })
    };
    let open_work = open_from(Kind::Works, (*works).clone());
    let open_news = open_from(Kind::News, (*news).clone());

    html! {
        <>
            <Nav />
            <main id="top">
                <section style="padding:96px 24px 72px; text-align:center;">
                    <h1 style="font-size:40px; color:#0b1f3a; margin:0 0 16px 0;">{"Design that earns its keep."}</h1>
                    <p style="font-size:16px; color:#64748b; max-width:560px; margin:0 auto;">
                        {"Atelier Nord is a small studio for brand, web and editorial design. Selected projects and studio news below."}
                    </p>
                </section>
                <StatsSection />
                <WorksSection collection={(*works).clone()} on_open={open_work} />
                <NewsSection collection={(*news).clone()} on_open={open_news} />
                <section id="about" style="padding:64px 24px; background:#f8fafc;">
                    <div style="max-width:720px; margin:0 auto;">
                        <h2 style="font-size:28px; color:#0b1f3a; margin:0 0 24px 0;">{"Services"}</h2>
                        <Expander collapsed_count={3}>
                            { for SERVICES.iter().map(|(name, blurb)| html! {
                                <div style="background:#fff; border:1px solid #f1f5f9; border-radius:10px; padding:18px 22px;">
                                    <h3 style="margin:0 0 6px 0; font-size:16px; color:#0b1f3a;">{ *name }</h3>
                                    <p style="margin:0; font-size:13px; color:#64748b;">{ *blurb }</p>
                                </div>
                            }) }
                        </Expander>
                    </div>
                </section>
                <footer id="contact" style="padding:48px 24px; background:#0b1f3a; color:#cbd5e1; text-align:center; font-size:14px;">
                    <p style="margin:0 0 8px 0;">{"hello@ateliernord.example"}</p>
                    <p style="margin:0; opacity:0.6;">{"© 2026 Atelier Nord"}</p>
                </footer>
            </main>
            <ContentModal
                modal={modal.clone()}
                works={(*works).clone()}
                news={(*news).clone()}
                on_close={close_modal}
            />
        </>
    }
}
