use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("checklist index {index} is out of range for {len} items")]
    InvalidIndex { index: i64, len: usize },
    #[error("invalid checklist configuration: {0}")]
    InvalidConfiguration(String),
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLabel {
    Low,
    Medium,
    High,
}

impl RiskLabel {
    /// Classifies a percentage with two inclusive cut points, High checked first.
    pub fn from_percent(percent: u8) -> Self {
        if percent >= 66 {
            RiskLabel::High
        } else if percent >= 33 {
            RiskLabel::Medium
        } else {
            RiskLabel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::Medium => "Medium",
            RiskLabel::High => "High",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Nice! Let's add a few guardrails and raise deploy frequency.",
            RiskLabel::Medium => "You'll benefit from a 1-week Firebreak to stabilize and a 30-day plan.",
            RiskLabel::High => "We should start with Firebreak immediately, then a 2-week Audit & Roadmap.",
        }
    }

    /// Badge icon color.
    pub fn accent(&self) -> &'static str {
        match self {
            RiskLabel::Low => "#059669",
            RiskLabel::Medium => "#d97706",
            RiskLabel::High => "#e11d48",
        }
    }
}

/// What the score card draws after every change.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScoreSnapshot {
    pub risk_percent: u8,
    pub label: RiskLabel,
    pub flags: Vec<bool>,
}

/// Flag per checklist item. Percent and label are recomputed on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreWidget {
    flags: Vec<bool>,
}

impl ScoreWidget {
    pub fn new(item_count: usize) -> Result<Self, ScoreError> {
        if item_count == 0 {
            return Err(ScoreError::InvalidConfiguration(
                "checklist must contain at least one item".to_string(),
            ));
        }
        Ok(Self {
            flags: vec![false; item_count],
        })
    }

    pub fn toggle(&mut self, index: usize) -> Result<(), ScoreError> {
        let flag = self.flag_mut(index)?;
        *flag = !*flag;
        Ok(())
    }

    /// Same as `toggle` for indices coming from untyped sources such as DOM ids.
    pub fn toggle_signed(&mut self, index: i64) -> Result<(), ScoreError> {
        let index = usize::try_from(index).map_err(|_| ScoreError::InvalidIndex {
            index,
            len: self.flags.len(),
        })?;
        self.toggle(index)
    }

    pub fn set(&mut self, index: usize, flagged: bool) -> Result<(), ScoreError> {
        *self.flag_mut(index)? = flagged;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.flags.iter_mut().for_each(|flag| *flag = false);
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    pub fn issues(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    pub fn risk_percent(&self) -> u8 {
        percent_of(self.issues(), self.flags.len())
    }

    pub fn risk_label(&self) -> RiskLabel {
        RiskLabel::from_percent(self.risk_percent())
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            risk_percent: self.risk_percent(),
            label: self.risk_label(),
            flags: self.flags.clone(),
        }
    }

    fn flag_mut(&mut self, index: usize) -> Result<&mut bool, ScoreError> {
        let len = self.flags.len();
        self.flags.get_mut(index).ok_or(ScoreError::InvalidIndex {
            index: index as i64,
            len,
        })
    }
}

// round(100 * part / whole) with halves rounded up, in integers. `whole` is never zero here.
fn percent_of(part: usize, whole: usize) -> u8 {
    ((200 * part + whole) / (2 * whole)) as u8
}

#[cfg(test)]
mod tests {
    use super::{RiskLabel, ScoreError, ScoreWidget};

    fn widget_with(flagged: usize) -> ScoreWidget {
        let mut widget = ScoreWidget::new(12).unwrap();
        for i in 0..flagged {
            widget.toggle(i).unwrap();
        }
        widget
    }

    #[test]
    fn fresh_widget_is_low_risk() {
        for n in [1, 2, 7, 12, 100] {
            let widget = ScoreWidget::new(n).unwrap();
            assert_eq!(widget.risk_percent(), 0);
            assert_eq!(widget.risk_label(), RiskLabel::Low);
            assert_eq!(widget.flags().len(), n);
        }
    }

    #[test]
    fn zero_items_is_rejected() {
        assert!(matches!(
            ScoreWidget::new(0),
            Err(ScoreError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn thresholds_for_twelve_items() {
        let cases = [
            (0, 0, RiskLabel::Low),
            (3, 25, RiskLabel::Low),
            (4, 33, RiskLabel::Medium),
            (7, 58, RiskLabel::Medium),
            (8, 67, RiskLabel::High),
            (12, 100, RiskLabel::High),
        ];
        for (flagged, percent, label) in cases {
            let widget = widget_with(flagged);
            assert_eq!(widget.risk_percent(), percent, "{} flagged", flagged);
            assert_eq!(widget.risk_label(), label, "{} flagged", flagged);
        }
    }

    #[test]
    fn boundary_percentages_fall_on_the_upper_side() {
        assert_eq!(RiskLabel::from_percent(32), RiskLabel::Low);
        assert_eq!(RiskLabel::from_percent(33), RiskLabel::Medium);
        assert_eq!(RiskLabel::from_percent(65), RiskLabel::Medium);
        assert_eq!(RiskLabel::from_percent(66), RiskLabel::High);
    }

    #[test]
    fn double_toggle_restores_score() {
        let mut widget = widget_with(5);
        for i in 0..12 {
            let before = (widget.risk_percent(), widget.risk_label());
            widget.toggle(i).unwrap();
            assert_ne!(widget.risk_percent(), before.0);
            widget.toggle(i).unwrap();
            assert_eq!((widget.risk_percent(), widget.risk_label()), before);
        }
    }

    #[test]
    fn percent_matches_recount_for_every_state() {
        // Walk all 2^6 states of a six item checklist via a Gray code.
        let mut widget = ScoreWidget::new(6).unwrap();
        for step in 1u32..64 {
            widget.toggle(step.trailing_zeros() as usize).unwrap();
            let count = widget.flags().iter().filter(|f| **f).count();
            let expected = (100.0 * count as f64 / 6.0).round() as u8;
            assert_eq!(widget.issues(), count);
            assert_eq!(widget.risk_percent(), expected);
        }
    }

    #[test]
    fn half_percentages_round_up() {
        // 1/8 = 12.5%, 3/8 = 37.5%
        let mut widget = ScoreWidget::new(8).unwrap();
        widget.toggle(0).unwrap();
        assert_eq!(widget.risk_percent(), 13);
        widget.toggle(1).unwrap();
        widget.toggle(2).unwrap();
        assert_eq!(widget.risk_percent(), 38);
    }

    #[test]
    fn out_of_range_toggle_leaves_flags_untouched() {
        let mut widget = widget_with(2);
        let before = widget.flags().to_vec();

        assert_eq!(
            widget.toggle(12),
            Err(ScoreError::InvalidIndex { index: 12, len: 12 })
        );
        assert_eq!(
            widget.toggle_signed(-1),
            Err(ScoreError::InvalidIndex { index: -1, len: 12 })
        );
        assert!(widget.set(99, true).is_err());
        assert_eq!(widget.flags(), before.as_slice());
    }

    #[test]
    fn toggle_signed_accepts_valid_indices() {
        let mut widget = widget_with(0);
        widget.toggle_signed(11).unwrap();
        assert!(widget.flags()[11]);
    }

    #[test]
    fn set_is_idempotent_and_reset_clears() {
        let mut widget = widget_with(0);
        widget.set(3, true).unwrap();
        widget.set(3, true).unwrap();
        assert_eq!(widget.issues(), 1);
        widget.set(3, false).unwrap();
        assert_eq!(widget.issues(), 0);

        let mut widget = widget_with(9);
        widget.reset();
        assert_eq!(widget.risk_percent(), 0);
        assert_eq!(widget.risk_label(), RiskLabel::Low);
    }

    #[test]
    fn guidance_is_distinct_per_label() {
        let all = [RiskLabel::Low, RiskLabel::Medium, RiskLabel::High];
        for label in all {
            assert!(!label.guidance().is_empty());
        }
        assert_ne!(RiskLabel::Low.guidance(), RiskLabel::Medium.guidance());
        assert_ne!(RiskLabel::Medium.guidance(), RiskLabel::High.guidance());
        assert_ne!(RiskLabel::Low.guidance(), RiskLabel::High.guidance());
    }

    #[test]
    fn snapshot_serializes_label_by_name() {
        let snapshot = widget_with(8).snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["label"], "High");
        assert_eq!(json["risk_percent"], 67);
        assert_eq!(json["flags"].as_array().unwrap().len(), 12);
    }
}
