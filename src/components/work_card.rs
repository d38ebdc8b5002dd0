//! One card in the works grid.

use yew::prelude::*;

use crate::model::ContentItem;

/// Map the index file's `badgeColor` token to a badge background class.
/// An absent token and unknown tokens both get the default accent badge.
pub fn badge_class(badge_color: &str) -> &'static str {
    match badge_color {
        "navy-900" => "work-badge-navy",
        "slate-600" => "work-badge-slate",
        _ => "work-badge-accent",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct WorkCardProps {
    pub item: ContentItem,
    pub on_open: Callback<String>,
}

#[function_component(WorkCard)]
pub fn work_card(props: &WorkCardProps) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        let id = props.item.id.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(id.clone()))
    };

    let item = &props.item;
    html! {
        <div class="work-item fade-hidden" {onclick}
            style="background:#fff; border:1px solid #f1f5f9; border-radius:10px; overflow:hidden; cursor:pointer; box-shadow:0 1px 2px rgba(0,0,0,0.04);">
            <div class="card-image" style="position:relative; aspect-ratio:16/9; overflow:hidden;">
                <img src={item.image.clone()} alt={item.title.clone()}
                    class={item.image_position.css_class()}
                    style="width:100%; height:100%; object-fit:cover;" />
                if !item.badge.is_empty() {
                    <span class={classes!("work-badge", badge_class(&item.badge_color))}>
                        { &item.badge }
                    </span>
                }
            </div>
            <div style="padding:16px 20px;">
                <div style="font-size:12px; color:#94a3b8; margin-bottom:4px;">{ &item.date }</div>
                <h3 style="margin:0; font-size:16px; color:#0b1f3a;">{ &item.title }</h3>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_map_to_their_badge() {
        assert_eq!(badge_class("navy-900"), "work-badge-navy");
        assert_eq!(badge_class("slate-600"), "work-badge-slate");
    }

    #[test]
    fn absent_or_unknown_token_falls_back_to_accent() {
        assert_eq!(badge_class(""), "work-badge-accent");
        assert_eq!(badge_class("accent-500"), "work-badge-accent");
        assert_eq!(badge_class("chartreuse"), "work-badge-accent");
    }
}
