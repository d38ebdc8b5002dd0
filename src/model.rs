//! Content data model for the portfolio site.
//!
//! Two independent collections ("works" and "news") are loaded once at
//! startup and are read-only afterwards. Everything here is plain data and
//! pure functions so it can be unit tested off the DOM.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Category value that matches every item.
pub const ALL_CATEGORIES: &str = "all";
/// How many extra work cards each "load more" click reveals.
pub const LOAD_MORE_COUNT: usize = 3;
/// How many news entries the news section shows.
pub const NEWS_DISPLAY_COUNT: usize = 3;

/// Which of the two content collections an item belongs to. The collections
/// are independent namespaces; a works id and a news id may collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Works,
    News,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Works => "works",
            Kind::News => "news",
        }
    }

    pub fn index_url(self) -> &'static str {
        match self {
            Kind::Works => "assets/data/works.json",
            Kind::News => "assets/data/news.json",
        }
    }
}

/// Vertical crop anchor for card and modal images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Top,
    #[default]
    Center,
    Bottom,
}

impl ImagePosition {
    pub fn css_class(self) -> &'static str {
        match self {
            ImagePosition::Top => "img-position-top",
            ImagePosition::Center => "img-position-center",
            ImagePosition::Bottom => "img-position-bottom",
        }
    }
}

/// One card/modal-worthy entry as it appears in the JSON index files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    /// Free-form date string, normally `YYYY.MM.DD`. Kept verbatim for
    /// display; parsed only for ordering.
    pub date: String,
    #[serde(default)]
    pub category: String,
    /// Badge text shown over work card images.
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub badge_color: String,
    /// News badge tint (blue/orange/green/purple/pink/red).
    #[serde(default)]
    pub category_color: String,
    pub image: String,
    #[serde(default)]
    pub image_position: ImagePosition,
    /// Path of the Markdown body fetched separately.
    pub content_file: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A fully loaded collection: sorted metadata plus the id-keyed body cache.
/// Populated once by the content loader and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collection {
    pub items: Vec<ContentItem>,
    pub bodies: HashMap<String, String>,
}

impl Collection {
    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn body(&self, id: &str) -> Option<&str> {
        self.bodies.get(id).map(String::as_str)
    }

    /// An id can open a modal only when both its metadata and its cached
    /// Markdown body are present.
    pub fn openable(&self, id: &str) -> bool {
        self.get(id).is_some() && self.body(id).is_some()
    }
}

/// Parse a free-form date like `2024.01.10` (also tolerates `-` and `/`
/// separators). Returns `None` for anything unparseable.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let normalized = raw.trim().replace(['.', '/'], "-");
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").ok()
}

/// Sort newest first. The sort is stable so items sharing a date keep their
/// index-file order; unparseable dates sink to the end.
pub fn sort_by_date_desc(items: &mut [ContentItem]) {
    items.sort_by(|a, b| match (parse_date(&a.date), parse_date(&b.date)) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// Items matching the current filter, in collection order.
pub fn filtered<'a>(items: &'a [ContentItem], filter: &str) -> Vec<&'a ContentItem> {
    items
        .iter()
        .filter(|item| filter == ALL_CATEGORIES || item.category == filter)
        .collect()
}

/// The window of the filtered sequence the grid currently shows, plus
/// whether a "load more" control should be offered.
pub fn visible<'a>(
    items: &'a [ContentItem],
    filter: &str,
    shown: usize,
) -> (Vec<&'a ContentItem>, bool) {
    let mut matching = filtered(items, filter);
    let has_more = shown < matching.len();
    matching.truncate(shown);
    (matching, has_more)
}

/// Distinct categories in collection order, for building the filter tabs.
pub fn categories(items: &[ContentItem]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !item.category.is_empty() && !out.iter().any(|c| c == &item.category) {
            out.push(item.category.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, date: &str, category: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: format!("title {id}"),
            date: date.to_string(),
            category: category.to_string(),
            badge: String::new(),
            badge_color: String::new(),
            category_color: String::new(),
            image: String::new(),
            image_position: ImagePosition::default(),
            content_file: format!("assets/content/{id}.md"),
            description: None,
        }
    }

    #[test]
    fn sorts_newest_first() {
        let mut items = vec![
            item("a", "2024.01.10", "web"),
            item("b", "2024.03.01", "web"),
            item("c", "2023.12.31", "web"),
        ];
        sort_by_date_desc(&mut items);
        let order: Vec<&str> = items.iter().map(|i| i.date.as_str()).collect();
        assert_eq!(order, vec!["2024.03.01", "2024.01.10", "2023.12.31"]);
    }

    #[test]
    fn sort_is_stable_for_equal_dates_and_sinks_bad_dates() {
        let mut items = vec![
            item("bad", "someday", "web"),
            item("x", "2024.02.02", "web"),
            item("y", "2024.02.02", "web"),
        ];
        sort_by_date_desc(&mut items);
        let order: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec!["x", "y", "bad"]);
    }

    #[test]
    fn parse_date_accepts_dot_dash_and_slash_separators() {
        assert!(parse_date("2024.01.10").is_some());
        assert!(parse_date("2024-01-10").is_some());
        assert!(parse_date("2024/01/10").is_some());
        assert!(parse_date("next tuesday").is_none());
    }

    #[test]
    fn filter_exact_match_on_category() {
        let items: Vec<ContentItem> = (0..10)
            .map(|i| {
                let cat = if i % 3 == 0 { "design" } else { "web" };
                item(&format!("i{i}"), "2024.01.01", cat)
            })
            .collect();
        let design = filtered(&items, "design");
        assert_eq!(design.len(), 4);
        assert!(design.iter().all(|i| i.category == "design"));
        assert_eq!(filtered(&items, ALL_CATEGORIES).len(), 10);
    }

    #[test]
    fn load_more_hidden_once_all_filtered_items_shown() {
        let items: Vec<ContentItem> = (0..10)
            .map(|i| {
                let cat = if i < 4 { "design" } else { "web" };
                item(&format!("i{i}"), "2024.01.01", cat)
            })
            .collect();
        let (shown, has_more) = visible(&items, "design", 6);
        assert_eq!(shown.len(), 4);
        assert!(!has_more);
    }

    #[test]
    fn pagination_windows() {
        let items: Vec<ContentItem> = (0..9)
            .map(|i| item(&format!("i{i}"), "2024.01.01", "web"))
            .collect();
        // 6 is the desktop initial display count
        let (first, has_more) = visible(&items, ALL_CATEGORIES, 6);
        assert_eq!(first.len(), 6);
        assert!(has_more);
        let (second, has_more) = visible(&items, ALL_CATEGORIES, 6 + LOAD_MORE_COUNT);
        assert_eq!(second.len(), 9);
        assert!(!has_more);
    }

    #[test]
    fn deserializes_index_entry_with_camel_case_fields() {
        let raw = r#"{
            "id": "abc123",
            "title": "Rebrand",
            "date": "2024.05.01",
            "category": "design",
            "badge": "NEW",
            "badgeColor": "accent-500",
            "image": "assets/images/rebrand.jpg",
            "imagePosition": "top",
            "contentFile": "assets/content/abc123.md"
        }"#;
        let item: ContentItem = serde_json::from_str(raw).expect("parse");
        assert_eq!(item.id, "abc123");
        assert_eq!(item.image_position, ImagePosition::Top);
        assert_eq!(item.description, None);
        // omitted position defaults to center
        let raw = r#"{"id":"x","title":"t","date":"2024.01.01",
                      "image":"i.jpg","contentFile":"x.md"}"#;
        let item: ContentItem = serde_json::from_str(raw).expect("parse");
        assert_eq!(item.image_position, ImagePosition::Center);
    }

    #[test]
    fn categories_are_distinct_and_ordered() {
        let items = vec![
            item("a", "2024.01.01", "web"),
            item("b", "2024.01.01", "design"),
            item("c", "2024.01.01", "web"),
        ];
        assert_eq!(categories(&items), vec!["web", "design"]);
    }
}
