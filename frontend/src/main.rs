use components::planner_form::TripPlannerForm;
use yew::prelude::*;

mod api;
mod components;
mod config;

#[function_component]
fn App() -> Html {
    html! {
        <TripPlannerForm api_base_url={config::api_base_url()} />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
