use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::config;
use crate::content::{NAV_LINKS, ONENDA_URL};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::get_brand_name())
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div>
                    <div class="nav-logo">
                        <span class="logo-mark">{"VB"}</span>
                        {config::get_brand_name()}
                    </div>
                    <p class="fine-print">{copyright_line(Utc::now().year())}</p>
                </div>
                <div class="footer-links">
                    { for NAV_LINKS.iter().map(|(href, text)| html! {
                        <a href={*href}>{*text}</a>
                    }) }
                    <a href={ONENDA_URL} target="_blank" rel="noreferrer">{"oneNDA"}</a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::copyright_line;

    #[test]
    fn copyright_names_year_and_brand() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Vibe Debugging. All rights reserved."
        );
    }
}
