// Contact identifiers can be overridden at build time, e.g.
// VIBE_BOOKING_URL=https://cal.com/me/intro trunk build --release

pub fn get_brand_name() -> &'static str {
    "Vibe Debugging"
}

pub fn get_contact_email() -> &'static str {
    match option_env!("VIBE_CONTACT_EMAIL") {
        Some(email) if !email.is_empty() => email,
        _ => "hello@vibedebugging.ai",
    }
}

pub fn get_booking_url() -> &'static str {
    match option_env!("VIBE_BOOKING_URL") {
        Some(url) if !url.is_empty() => url,
        _ => "https://cal.com/your-handle/vibe-debugging",
    }
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> log::Level {
    log::Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_identifiers_are_usable() {
        assert!(get_contact_email().contains('@'));
        assert!(get_booking_url().starts_with("https://"));
    }
}
