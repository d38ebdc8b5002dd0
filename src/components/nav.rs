//! Site header with the mobile menu toggle.

use yew::prelude::*;

const LINKS: [(&str, &str); 4] = [
    ("About", "#about"),
    ("Works", "#works-section"),
    ("News", "#news-section"),
    ("Contact", "#contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    // tapping any link collapses the menu
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header id="top-bar" style="position:sticky; top:0; z-index:40; background:rgba(255,255,255,0.95); border-bottom:1px solid #e2e8f0;">
            <div style="max-width:1080px; margin:0 auto; padding:14px 24px; display:flex; align-items:center; justify-content:space-between;">
                <a href="#top" style="font-weight:700; font-size:18px; color:#0b1f3a; text-decoration:none;">{"Atelier Nord"}</a>
                <nav class="desktop-nav" style="display:flex; gap:24px;">
                    { for LINKS.iter().map(|(label, href)| html! {
                        <a href={*href} style="color:#334155; text-decoration:none; font-size:14px;">{ *label }</a>
                    }) }
                </nav>
                <button class="menu-btn" onclick={toggle_menu} aria-label="menu"
                    style="background:none; border:none; font-size:22px; cursor:pointer;">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <nav class="mobile-menu" style="display:flex; flex-direction:column; padding:12px 24px; gap:12px; background:#fff; border-bottom:1px solid #e2e8f0;">
                    { for LINKS.iter().map(|(label, href)| html! {
                        <a href={*href} onclick={close_menu.clone()} class="mobile-link"
                            style="color:#334155; text-decoration:none;">{ *label }</a>
                    }) }
                </nav>
            }
        </header>
    }
}
