use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::section::Card;
use crate::config;
use crate::content::{COMMON_VIBES, HERO_STATS};

// Delay in ms before each hero block fades in, in display order.
const REVEAL_DELAYS: [u32; 2] = [0, 100];

#[function_component(Hero)]
pub fn hero() -> Html {
    let stage = use_state(|| 0u8);

    {
        let stage = stage.clone();
        use_effect_with_deps(
            move |_| {
                let timers: Vec<Timeout> = REVEAL_DELAYS
                    .iter()
                    .enumerate()
                    .map(|(i, delay)| {
                        let stage = stage.clone();
                        Timeout::new(*delay, move || stage.set(i as u8 + 1))
                    })
                    .collect();
                move || drop(timers)
            },
            (),
        );
    }

    let reveal = |block: u8| classes!("reveal", (*stage >= block).then(|| "visible"));

    html! {
        <section id="top" class="hero">
            <div class="hero-grid">
                <div class={reveal(1)}>
                    <div class="hero-kicker">{"Senior/Staff Full-stack Consulting"}</div>
                    <h1 class="hero-title">
                        {"Ship fast "}<span class="accent">{"without the weird vibes"}</span>{"."}
                    </h1>
                    <p class="hero-lead">
                        {"I stabilize and accelerate codebases built too quickly with AI scaffolding. Outcome-focused audits, targeted refactors, and guardrails so your team moves confidently."}
                    </p>
                    <div class="button-row">
                        <a href={config::get_booking_url()} class="btn btn-primary">{"⚡ Get a fit call"}</a>
                        <a href="#offers" class="btn btn-outline">{"See offers →"}</a>
                    </div>
                </div>
                <div class={reveal(2)}>
                    <Card>
                        <div class="card-heading">
                            <span class="warn-icon">{"⚠"}</span>
                            <h3>{"Common vibes I fix"}</h3>
                        </div>
                        <ul class="check-grid">
                            { for COMMON_VIBES.iter().map(|vibe| html! {
                                <li><span class="check">{"✓"}</span><span>{*vibe}</span></li>
                            }) }
                        </ul>
                        <div class="stat-grid">
                            { for HERO_STATS.iter().map(|(value, caption)| html! {
                                <div class="stat-tile">
                                    <div class="stat-value">{*value}</div>
                                    <div class="stat-caption">{*caption}</div>
                                </div>
                            }) }
                        </div>
                    </Card>
                </div>
            </div>
        </section>
    }
}
