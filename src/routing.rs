//! Hash-fragment routing for the detail modals.
//!
//! The URL hash is the only addressable state on the page. Grammar:
//! `#works/<id>` opens a work modal, `#news/<id>` opens a news modal,
//! anything else (including an absent hash) means "no modal". Browser
//! back/forward and direct link entry both go through [`parse_hash`].

use wasm_bindgen::JsValue;

use crate::model::{Collection, Kind};

/// A parsed modal address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub kind: Kind,
    pub id: String,
}

/// Parse a location hash (with or without the leading `#`). Returns `None`
/// for anything outside the `works/<id>` / `news/<id>` grammar.
pub fn parse_hash(hash: &str) -> Option<Route> {
    let frag = hash.strip_prefix('#').unwrap_or(hash);
    let (kind, id) = frag.split_once('/')?;
    if id.is_empty() {
        return None;
    }
    let kind = match kind {
        "works" => Kind::Works,
        "news" => Kind::News,
        _ => return None,
    };
    Some(Route {
        kind,
        id: id.to_string(),
    })
}

/// What the current route asks the modal to do, given the collections
/// loaded so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The route names a loaded item with a cached body; open it.
    Open { kind: Kind, id: String },
    /// The route's collection has not loaded yet; re-apply once it arrives.
    Wait,
    /// The collection is loaded but holds no openable item with that id;
    /// leave the modal state untouched.
    Unknown,
    /// No modal route; anything open should close.
    Close,
}

/// Decide how a (possibly pending) route resolves against the collections.
/// Called again whenever the route or a collection changes, so a deep link
/// that arrived before its data opens as soon as loading completes, and a
/// failed load (stored as an empty collection) lets it give up instead of
/// waiting forever.
pub fn apply_route(
    route: Option<&Route>,
    works: Option<&Collection>,
    news: Option<&Collection>,
) -> RouteOutcome {
    let Some(route) = route else {
        return RouteOutcome::Close;
    };
    let collection = match route.kind {
        Kind::Works => works,
        Kind::News => news,
    };
    let Some(collection) = collection else {
        return RouteOutcome::Wait;
    };
    if collection.openable(&route.id) {
        RouteOutcome::Open {
            kind: route.kind,
            id: route.id.clone(),
        }
    } else {
        RouteOutcome::Unknown
    }
}

pub fn format_hash(kind: Kind, id: &str) -> String {
    format!("{}/{}", kind.as_str(), id)
}

/// The route named by the current location hash, if any.
pub fn current_route() -> Option<Route> {
    let hash = web_sys::window()?.location().hash().ok()?;
    parse_hash(&hash)
}

/// Point the location hash at a modal. Fires a `hashchange` event, so the
/// hash listener sees its own writes (open is idempotent, this is fine).
pub fn set_hash(kind: Kind, id: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(&format_hash(kind, id));
    }
}

/// Clear the hash iff it still names the given modal. Uses
/// `history.replaceState` rather than navigation so no history entry is
/// added and the viewport does not jump.
pub fn clear_hash(kind: Kind, id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let Ok(hash) = location.hash() else {
        return;
    };
    match parse_hash(&hash) {
        Some(route) if route.kind == kind && route.id == id => {}
        _ => return,
    }
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("{path}{search}")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentItem, ImagePosition};

    fn collection(id: &str, with_body: bool) -> Collection {
        let item = ContentItem {
            id: id.to_string(),
            title: format!("title {id}"),
            date: "2024.01.01".to_string(),
            category: String::new(),
            badge: String::new(),
            badge_color: String::new(),
            category_color: String::new(),
            image: String::new(),
            image_position: ImagePosition::default(),
            content_file: format!("assets/content/{id}.md"),
            description: None,
        };
        let mut out = Collection {
            items: vec![item],
            bodies: Default::default(),
        };
        if with_body {
            out.bodies.insert(id.to_string(), "# body".to_string());
        }
        out
    }

    fn route(kind: Kind, id: &str) -> Option<Route> {
        Some(Route {
            kind,
            id: id.to_string(),
        })
    }

    #[test]
    fn no_route_closes() {
        assert_eq!(apply_route(None, None, None), RouteOutcome::Close);
        let works = collection("abc", true);
        assert_eq!(apply_route(None, Some(&works), None), RouteOutcome::Close);
    }

    #[test]
    fn pending_route_waits_for_its_own_collection() {
        let news = collection("launch", true);
        // the works collection is still loading; a loaded news collection
        // does not resolve a works route
        assert_eq!(
            apply_route(route(Kind::Works, "abc").as_ref(), None, Some(&news)),
            RouteOutcome::Wait
        );
    }

    #[test]
    fn pending_route_opens_once_its_collection_arrives() {
        let works = collection("abc", true);
        assert_eq!(
            apply_route(route(Kind::Works, "abc").as_ref(), Some(&works), None),
            RouteOutcome::Open {
                kind: Kind::Works,
                id: "abc".to_string()
            }
        );
    }

    #[test]
    fn failed_load_terminates_a_pending_route() {
        // a failed load is stored as an empty collection; the route stops
        // waiting instead of hanging
        let empty = Collection::default();
        assert_eq!(
            apply_route(route(Kind::News, "launch").as_ref(), None, Some(&empty)),
            RouteOutcome::Unknown
        );
    }

    #[test]
    fn unknown_id_and_missing_body_leave_modals_closed() {
        let works = collection("abc", true);
        assert_eq!(
            apply_route(route(Kind::Works, "nope").as_ref(), Some(&works), None),
            RouteOutcome::Unknown
        );
        let bodyless = collection("abc", false);
        assert_eq!(
            apply_route(route(Kind::Works, "abc").as_ref(), Some(&bodyless), None),
            RouteOutcome::Unknown
        );
    }

    #[test]
    fn parses_works_and_news_routes() {
        assert_eq!(
            parse_hash("#works/abc123"),
            Some(Route {
                kind: Kind::Works,
                id: "abc123".to_string()
            })
        );
        assert_eq!(
            parse_hash("news/launch-2024"),
            Some(Route {
                kind: Kind::News,
                id: "launch-2024".to_string()
            })
        );
    }

    #[test]
    fn id_may_itself_contain_slashes() {
        let route = parse_hash("#works/a/b").expect("route");
        assert_eq!(route.id, "a/b");
    }

    #[test]
    fn rejects_everything_outside_the_grammar() {
        assert_eq!(parse_hash(""), None);
        assert_eq!(parse_hash("#"), None);
        assert_eq!(parse_hash("#about"), None);
        assert_eq!(parse_hash("#works/"), None);
        assert_eq!(parse_hash("#blog/post-1"), None);
    }

    #[test]
    fn format_round_trips_through_parse() {
        let hash = format_hash(Kind::News, "xyz");
        assert_eq!(hash, "news/xyz");
        let route = parse_hash(&hash).expect("route");
        assert_eq!(route.kind, Kind::News);
        assert_eq!(route.id, "xyz");
    }
}
