//! Expand/collapse panel: shows the first few children, the rest behind a
//! toggle button whose label flips with the state.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ExpanderProps {
    /// How many children stay visible while collapsed.
    pub collapsed_count: usize,
    pub children: Children,
}

#[function_component(Expander)]
pub fn expander(props: &ExpanderProps) -> Html {
    let expanded = use_state(|| false);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let children: Vec<Html> = props.children.iter().collect();
    let cutoff = props.collapsed_count.min(children.len());
    let shown: Vec<Html> = if *expanded {
        children
    } else {
        children[..cutoff].to_vec()
    };
    let label = if *expanded { "▲ Collapse" } else { "▼ Show more" };
    let has_hidden = cutoff < props.children.len();

    html! {
        <div style="display:flex; flex-direction:column; gap:16px;">
            { for shown }
            if has_hidden {
                <button onclick={toggle}
                    style="align-self:center; padding:8px 20px; border:1px solid #cbd5e1; border-radius:20px; background:#fff; cursor:pointer; font-size:13px;">
                    { label }
                </button>
            }
        </div>
    }
}
