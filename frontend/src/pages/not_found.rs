use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page has no vibes at all."}</p>
            <Link<Route> to={Route::Home}>{"Back to the homepage"}</Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
                    color: #0f172a;
                }

                .not-found a {
                    color: #0369a1;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
