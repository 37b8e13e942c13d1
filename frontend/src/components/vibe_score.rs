use log::{debug, error, warn};
use stylist::yew::styled_component;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::section::Card;
use crate::config;
use crate::contact::score_mailto_href;
use crate::content::CHECKLIST_ITEMS;
use crate::score::{RiskLabel, ScoreError, ScoreWidget};

#[derive(Properties, PartialEq)]
pub struct VibeScoreProps {
    #[prop_or(&CHECKLIST_ITEMS)]
    pub items: &'static [&'static str],
}

pub enum VibeScoreMsg {
    Set(usize, bool),
    Reset,
}

/// Checklist card plus the live score card. Owns the page's only mutable state.
pub struct VibeScore {
    widget: Option<ScoreWidget>,
}

impl VibeScore {
    fn apply(widget: &mut ScoreWidget, msg: VibeScoreMsg) -> Result<(), ScoreError> {
        match msg {
            VibeScoreMsg::Set(index, flagged) => widget.set(index, flagged),
            VibeScoreMsg::Reset => {
                widget.reset();
                Ok(())
            }
        }
    }
}

impl Component for VibeScore {
    type Message = VibeScoreMsg;
    type Properties = VibeScoreProps;

    fn create(ctx: &Context<Self>) -> Self {
        let widget = match ScoreWidget::new(ctx.props().items.len()) {
            Ok(widget) => Some(widget),
            Err(e) => {
                error!("Vibe Score disabled: {}", e);
                None
            }
        };
        Self { widget }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(widget) = self.widget.as_mut() else {
            return false;
        };
        match Self::apply(widget, msg) {
            Ok(()) => {
                debug!(
                    "Vibe Score changed: {}",
                    serde_json::to_string(&widget.snapshot()).unwrap_or_default()
                );
                true
            }
            Err(e) => {
                warn!("Ignoring checklist change: {}", e);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(widget) = self.widget.as_ref() else {
            return html! {};
        };
        let snapshot = widget.snapshot();
        let items = ctx.props().items;

        let on_reset = ctx.link().callback(|_: MouseEvent| VibeScoreMsg::Reset);

        html! {
            <div class="score-grid">
                <Card class={classes!("span-2")}>
                    <div class="muted">{"Tick anything that sounds familiar. Your score updates live."}</div>
                    <ul class="checklist">
                        { for items.iter().zip(snapshot.flags.iter()).enumerate().map(|(i, (text, flagged))| {
                            let onchange = ctx.link().callback(move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                VibeScoreMsg::Set(i, input.checked())
                            });
                            let id = format!("c-{}", i);
                            html! {
                                <li>
                                    <input id={id.clone()} type="checkbox" checked={*flagged} {onchange} />
                                    <label for={id}>{*text}</label>
                                </li>
                            }
                        }) }
                    </ul>
                </Card>

                <Card>
                    <div class="score-caption">{"Your score"}</div>
                    <div class="score-value">{format!("{}%", snapshot.risk_percent)}</div>
                    <RiskBadge label={snapshot.label} />
                    <p class="muted">{snapshot.label.guidance()}</p>
                    <div class="button-column">
                        <a href={config::get_booking_url()} class="btn btn-dark">
                            {"📅 Book a 20-min fit call"}
                        </a>
                        <a href={score_mailto_href(config::get_contact_email(), &snapshot)} class="btn btn-outline">
                            {"✉ Email me my score"}
                        </a>
                        <button
                            class="btn btn-link"
                            onclick={on_reset}
                            disabled={widget.issues() == 0}
                        >
                            {"Clear answers"}
                        </button>
                    </div>
                </Card>
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RiskBadgeProps {
    pub label: RiskLabel,
}

#[styled_component(RiskBadge)]
pub fn risk_badge(props: &RiskBadgeProps) -> Html {
    let badge = css!(
        r#"
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 1rem;
        padding: 0.25rem 0.75rem;
        border-radius: 0.5rem;
        background: #f1f5f9;
        font-size: 0.875rem;
        font-weight: 600;

        .badge-icon {
            color: ${accent};
        }
        "#,
        accent = props.label.accent()
    );

    html! {
        <div class={badge}>
            <span class="badge-icon">{"⚠"}</span>
            <span>{format!("{} risk", props.label.as_str())}</span>
        </div>
    }
}
