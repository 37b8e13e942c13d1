use vibe_debugging::config;
use vibe_debugging::contact::score_mailto_href;
use vibe_debugging::content::CHECKLIST_ITEMS;
use vibe_debugging::score::{RiskLabel, ScoreError, ScoreWidget};

fn page_widget() -> ScoreWidget {
    ScoreWidget::new(CHECKLIST_ITEMS.len()).unwrap()
}

#[test]
fn page_checklist_starts_at_zero() {
    let widget = page_widget();
    let snapshot = widget.snapshot();
    assert_eq!(snapshot.risk_percent, 0);
    assert_eq!(snapshot.label, RiskLabel::Low);
    assert_eq!(snapshot.flags, vec![false; 12]);
}

#[test]
fn ticking_through_the_checklist_walks_every_label() {
    let mut widget = page_widget();
    let mut seen = Vec::new();
    for i in 0..CHECKLIST_ITEMS.len() {
        widget.set(i, true).unwrap();
        let label = widget.risk_label();
        if seen.last() != Some(&label) {
            seen.push(label);
        }
    }
    assert_eq!(seen, vec![RiskLabel::Low, RiskLabel::Medium, RiskLabel::High]);
    assert_eq!(widget.risk_percent(), 100);
}

#[test]
fn flag_order_does_not_matter() {
    let mut front = page_widget();
    let mut back = page_widget();
    for i in 0..4 {
        front.toggle(i).unwrap();
        back.toggle(11 - i).unwrap();
    }
    assert_eq!(front.risk_percent(), 33);
    assert_eq!(front.risk_percent(), back.risk_percent());
    assert_eq!(front.risk_label(), back.risk_label());
}

#[test]
fn rejected_indices_keep_state() {
    let mut widget = page_widget();
    widget.toggle(5).unwrap();
    let before = widget.snapshot();

    for bad in [-1i64, 12, i64::MAX, i64::MIN] {
        assert!(matches!(
            widget.toggle_signed(bad),
            Err(ScoreError::InvalidIndex { len: 12, .. })
        ));
    }
    assert_eq!(widget.snapshot(), before);
}

#[test]
fn empty_checklist_cannot_be_built() {
    let err = ScoreWidget::new(0).unwrap_err();
    assert!(matches!(err, ScoreError::InvalidConfiguration(_)));
    assert!(err.to_string().contains("at least one item"));
}

#[test]
fn emailed_score_tracks_the_widget() {
    let mut widget = page_widget();
    for i in 0..8 {
        widget.set(i, true).unwrap();
    }
    let href = score_mailto_href(config::get_contact_email(), &widget.snapshot());
    assert!(href.contains("67%25%20%28High%20risk%29"));

    widget.reset();
    let href = score_mailto_href(config::get_contact_email(), &widget.snapshot());
    assert!(href.contains("0%25%20%28Low%20risk%29"));
}
