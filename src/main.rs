mod components;
mod content;
mod markdown;
mod model;
mod routing;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
