use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod contact;
pub mod content;
pub mod score;

pub mod components {
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod outcomes_chart;
    pub mod section;
    pub mod vibe_score;
}

pub mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

pub fn run() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting {}", config::get_brand_name());
    yew::Renderer::<App>::new().render();
}
