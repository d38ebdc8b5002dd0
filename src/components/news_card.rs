//! One row in the news list.

use yew::prelude::*;

use crate::model::ContentItem;

/// Map the index file's `categoryColor` to a badge style class. Unknown
/// colours fall back to the neutral slate badge.
pub fn badge_class(category_color: &str) -> &'static str {
    match category_color {
        "blue" => "badge-blue",
        "orange" => "badge-orange",
        "green" => "badge-green",
        "purple" => "badge-purple",
        "pink" => "badge-pink",
        "red" => "badge-red",
        _ => "badge-slate",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct NewsCardProps {
    pub item: ContentItem,
    pub on_open: Callback<String>,
}

#[function_component(NewsCard)]
pub fn news_card(props: &NewsCardProps) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        let id = props.item.id.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
    };

    let item = &props.item;
    html! {
        <div class="news-item fade-hidden" {onclick}
            style="display:flex; gap:20px; background:#fff; border:1px solid #f1f5f9; border-radius:10px; overflow:hidden; cursor:pointer;">
            <div class="card-image" style="flex:0 0 25%; overflow:hidden;">
                <img src={item.image.clone()} alt={item.title.clone()}
                    class={item.image_position.css_class()}
                    style="width:100%; height:100%; object-fit:cover;" />
            </div>
            <div style="padding:18px 20px 18px 0; display:flex; flex-direction:column; justify-content:center; gap:6px;">
                <div style="display:flex; align-items:center; gap:10px;">
                    <span style="font-size:12px; color:#94a3b8; font-family:monospace;">{ &item.date }</span>
                    <span class={classes!("news-badge", badge_class(&item.category_color))}>
                        { &item.category }
                    </span>
                </div>
                <h3 style="margin:0; font-size:16px; color:#0b1f3a;">{ &item.title }</h3>
                if let Some(description) = &item.description {
                    <p style="margin:0; font-size:13px; color:#64748b;">{ description }</p>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_colors_map_to_their_badge() {
        assert_eq!(badge_class("blue"), "badge-blue");
        assert_eq!(badge_class("red"), "badge-red");
    }

    #[test]
    fn unknown_color_falls_back_to_slate() {
        assert_eq!(badge_class(""), "badge-slate");
        assert_eq!(badge_class("chartreuse"), "badge-slate");
    }
}
