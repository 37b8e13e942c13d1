use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::{
    footer::Footer,
    hero::Hero,
    nav::Nav,
    outcomes_chart::OutcomesChart,
    section::{Card, Section},
    vibe_score::VibeScore,
};
use crate::config;
use crate::contact::mailto_href;
use crate::content::{OFFERS, PAPERWORK, PLAYBOOK, PROCESS_STEPS, RESOURCES, SKILLS};

#[function_component(Offers)]
fn offers() -> Html {
    html! {
        <Section id="offers" kicker="Productized services" title="Pick your path to calmer delivery">
            <div class="offer-grid">
                { for OFFERS.iter().map(|offer| html! {
                    <Card>
                        <div class="pill">{offer.icon}{" "}{offer.name}</div>
                        <p class="muted">{offer.terms}</p>
                        <ul class="bullet-list">
                            { for offer.bullets.iter().map(|(icon, text)| html! {
                                <li><span class="bullet-icon">{*icon}</span>{*text}</li>
                            }) }
                        </ul>
                        <a href={config::get_booking_url()} class="text-link">{offer.cta}{" →"}</a>
                    </Card>
                }) }
            </div>
        </Section>
    }
}

#[function_component(Process)]
fn process() -> Html {
    html! {
        <Section id="process" kicker="How we work" title="Diagnose → Stabilize → Guardrail">
            <div class="three-grid">
                { for PROCESS_STEPS.iter().map(|(icon, step, text)| html! {
                    <Card>
                        <div class="step-heading"><span>{*icon}</span><strong>{*step}</strong></div>
                        <p class="muted">{*text}</p>
                    </Card>
                }) }
            </div>
        </Section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <Section id="about" kicker="About" title="Senior/Staff full-stack. Node · TypeScript · Python · Postgres · AWS">
            <div class="two-grid">
                <Card>
                    <p>
                        {"I help teams that moved fast with AI scaffolding stabilize, speed up, and regain confidence. I combine pragmatic refactoring with strong platform and reliability practices so you can ship features without firefighting."}
                    </p>
                    <ul class="skill-grid">
                        { for SKILLS.iter().map(|(icon, skill)| html! {
                            <li><span class="bullet-icon">{*icon}</span>{*skill}</li>
                        }) }
                    </ul>
                </Card>
                <Card>
                    <div class="score-caption">{"Implementation playbook includes"}</div>
                    <ul class="bullet-list">
                        { for PLAYBOOK.iter().map(|item| html! {
                            <li><span class="check">{"✓"}</span>{*item}</li>
                        }) }
                    </ul>
                </Card>
            </div>
        </Section>
    }
}

#[function_component(Resources)]
fn resources() -> Html {
    html! {
        <Section kicker="For engineering leaders" title="Resources I rely on">
            <div class="resource-grid">
                { for RESOURCES.iter().map(|resource| html! {
                    <a href={resource.href} target="_blank" rel="noreferrer" class="resource-link">
                        <div class="resource-name">
                            <span>{resource.name}</span>
                            <span class="external">{"↗"}</span>
                        </div>
                        <div class="fine-print">{"Opens in new tab"}</div>
                    </a>
                }) }
            </div>
        </Section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let email = config::get_contact_email();
    html! {
        <Section id="contact" kicker="Get started" title="Let's fix the vibes">
            <div class="score-grid">
                <Card class={classes!("span-2")}>
                    <p>
                        {"Send over a sentence on your stack and which outcomes matter most (deploy frequency, MTTR, performance, cost). I'll confirm fit and propose the right time-boxed option."}
                    </p>
                    <div class="button-row">
                        <a href={config::get_booking_url()} class="btn btn-primary">{"📅 Book a 20-min fit call"}</a>
                        <a href={mailto_href(email)} class="btn btn-outline">{"✉ "}{email}</a>
                    </div>
                </Card>
                <Card>
                    <div class="score-caption">{"Paperwork"}</div>
                    <ul class="bullet-list">
                        { for PAPERWORK.iter().map(|item| html! {
                            <li><span class="check">{"✓"}</span>{*item}</li>
                        }) }
                    </ul>
                </Card>
            </div>
        </Section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_title(format!(
        "{} · Ship fast without the weird vibes",
        config::get_brand_name()
    ));

    html! {
        <div class="site">
            <Nav />
            <Hero />
            <Offers />
            <Process />
            <Section kicker="Outcomes" title="Typical 30-day snapshot">
                <Card>
                    <OutcomesChart />
                </Card>
            </Section>
            <Section id="score" kicker="Self-assessment" title="Check your Vibe Score in 60 seconds">
                <VibeScore />
            </Section>
            <About />
            <Resources />
            <Contact />
            <Footer />

            <style>
                {r#"
                .site {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #f0f9ff, #ffffff 40%, #ffffff);
                    color: #1e293b;
                    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
                }

                .site a {
                    text-decoration: none;
                }

                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    border-bottom: 1px solid #e2e8f0;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(8px);
                    transition: background 0.2s ease;
                }

                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 1px 4px rgba(15, 23, 42, 0.06);
                }

                .nav-content,
                .section-inner,
                .hero-grid,
                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding-left: 1.5rem;
                    padding-right: 1.5rem;
                }

                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding-top: 1rem;
                    padding-bottom: 1rem;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 600;
                    color: #0f172a;
                }

                .logo-mark {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.5rem;
                    background: #0284c7;
                    color: #ffffff;
                }

                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .nav-link {
                    font-size: 0.875rem;
                    color: #475569;
                }

                .nav-link:hover {
                    color: #0f172a;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #0f172a;
                }

                .btn {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 0.75rem;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .btn-primary {
                    background: #0284c7;
                    color: #ffffff;
                }

                .btn-primary:hover {
                    background: #0369a1;
                }

                .btn-dark {
                    background: #0f172a;
                    color: #ffffff;
                }

                .btn-dark:hover {
                    background: #1e293b;
                }

                .btn-outline {
                    border: 1px solid #cbd5e1;
                    background: #ffffff;
                    color: #1e293b;
                }

                .btn-link {
                    border: none;
                    background: none;
                    color: #0369a1;
                    padding-left: 0;
                }

                .btn-link:disabled {
                    color: #94a3b8;
                    cursor: default;
                }

                .button-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }

                .button-column {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 0.75rem;
                }

                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    align-items: center;
                    gap: 2.5rem;
                    padding-top: 5rem;
                    padding-bottom: 4rem;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(12px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: none;
                }

                .hero-kicker,
                .section-kicker {
                    margin-bottom: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #0369a1;
                }

                .hero-title {
                    margin-bottom: 1rem;
                    font-size: 3rem;
                    font-weight: 800;
                    line-height: 1.15;
                    color: #0f172a;
                }

                .accent {
                    color: #0369a1;
                }

                .hero-lead {
                    margin-bottom: 1.5rem;
                    font-size: 1.125rem;
                    color: #475569;
                }

                .page-section {
                    padding: 5rem 0;
                }

                .section-title {
                    margin-bottom: 2rem;
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #0f172a;
                }

                .card {
                    border: 1px solid #e2e8f0;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.7);
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                    backdrop-filter: blur(8px);
                }

                .card-heading,
                .step-heading {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    color: #0f172a;
                }

                .warn-icon {
                    color: #d97706;
                }

                .check,
                .bullet-icon {
                    margin-right: 0.5rem;
                    color: #0284c7;
                }

                .check-grid,
                .skill-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.5rem;
                    padding: 0;
                    list-style: none;
                    font-size: 0.875rem;
                    color: #475569;
                }

                .stat-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin-top: 1rem;
                    text-align: center;
                }

                .stat-tile {
                    border-radius: 0.75rem;
                    background: #f8fafc;
                    padding: 0.75rem;
                }

                .stat-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #0f172a;
                }

                .stat-caption,
                .fine-print {
                    font-size: 0.75rem;
                    color: #64748b;
                }

                .offer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .three-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .two-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }

                .pill {
                    display: inline-flex;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                    border-radius: 0.5rem;
                    background: #f0f9ff;
                    padding: 0.25rem 0.625rem;
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: #0369a1;
                }

                .muted {
                    margin-bottom: 1rem;
                    font-size: 0.875rem;
                    color: #475569;
                }

                .bullet-list {
                    margin-bottom: 1rem;
                    padding: 0;
                    list-style: none;
                    font-size: 0.875rem;
                    color: #334155;
                }

                .bullet-list li {
                    margin-bottom: 0.5rem;
                }

                .text-link {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #0369a1;
                }

                .text-link:hover {
                    text-decoration: underline;
                }

                .outcomes-chart {
                    width: 100%;
                }

                .score-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .span-2 {
                    grid-column: span 2;
                }

                .checklist {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                    padding: 0;
                    list-style: none;
                }

                .checklist li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                }

                .checklist input {
                    margin-top: 0.25rem;
                    width: 1rem;
                    height: 1rem;
                    accent-color: #0284c7;
                }

                .checklist label {
                    cursor: pointer;
                    font-size: 0.875rem;
                    color: #334155;
                }

                .score-caption {
                    margin-bottom: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #64748b;
                }

                .score-value {
                    margin-bottom: 0.5rem;
                    font-size: 2.25rem;
                    font-weight: 800;
                    color: #0f172a;
                }

                .resource-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }

                .resource-link {
                    border: 1px solid #e2e8f0;
                    border-radius: 0.75rem;
                    background: #ffffff;
                    padding: 1rem;
                    font-size: 0.875rem;
                    color: #334155;
                }

                .resource-link:hover {
                    border-color: #bae6fd;
                    background: #f0f9ff;
                }

                .resource-name {
                    display: flex;
                    justify-content: space-between;
                    font-weight: 600;
                    color: #0f172a;
                }

                .external {
                    color: #94a3b8;
                }

                .site-footer {
                    border-top: 1px solid #e2e8f0;
                    background: rgba(255, 255, 255, 0.7);
                    padding: 2.5rem 0;
                }

                .footer-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }

                .footer-links {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.875rem;
                }

                .footer-links a {
                    color: #475569;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-links {
                        display: none;
                    }

                    .nav-links.mobile-menu-open {
                        display: flex;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1rem 1.5rem;
                        background: #ffffff;
                        border-bottom: 1px solid #e2e8f0;
                    }

                    .nav-cta {
                        display: none;
                    }

                    .hero-grid,
                    .offer-grid,
                    .three-grid,
                    .two-grid,
                    .score-grid,
                    .resource-grid,
                    .checklist,
                    .check-grid {
                        grid-template-columns: 1fr;
                    }

                    .span-2 {
                        grid-column: auto;
                    }

                    .hero-title {
                        font-size: 2.25rem;
                    }

                    .footer-inner {
                        flex-direction: column;
                        align-items: flex-start;
                    }
                }
                "#}
            </style>
        </div>
    }
}
