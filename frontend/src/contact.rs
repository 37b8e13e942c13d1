use crate::score::ScoreSnapshot;

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email)
}

/// Mail link with the current score prefilled in subject and body.
pub fn score_mailto_href(email: &str, snapshot: &ScoreSnapshot) -> String {
    let flagged = snapshot.flags.iter().filter(|f| **f).count();
    let subject = format!(
        "Vibe Score: {}% ({} risk)",
        snapshot.risk_percent,
        snapshot.label.as_str()
    );
    let body = format!(
        "Hi,\n\nI took the Vibe Score self-assessment: {} of {} items flagged, {}% ({} risk).\n\nOur stack: ",
        flagged,
        snapshot.flags.len(),
        snapshot.risk_percent,
        snapshot.label.as_str()
    );
    format!(
        "mailto:{}?subject={}&body={}",
        email,
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::ScoreWidget;

    #[test]
    fn plain_mailto() {
        assert_eq!(mailto_href("a@b.io"), "mailto:a@b.io");
    }

    #[test]
    fn score_mailto_encodes_subject_and_body() {
        let mut widget = ScoreWidget::new(12).unwrap();
        for i in 0..4 {
            widget.toggle(i).unwrap();
        }
        let href = score_mailto_href("a@b.io", &widget.snapshot());

        assert!(href.starts_with("mailto:a@b.io?subject="));
        assert!(href.contains("subject=Vibe%20Score%3A%2033%25%20%28Medium%20risk%29"));
        assert!(href.contains("4%20of%2012%20items%20flagged"));
        assert!(!href.contains(' '));
        assert!(!href.contains('\n'));
    }
}
