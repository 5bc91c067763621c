//! The five-level impact scale and its ordinal mapping.

/// Ordinal severity of mood-swing impact on daily tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImpactLevel {
    NotAtAll,
    OnlySlightly,
    Moderately,
    Severely,
    Completely,
}

/// All levels in ascending severity order.
pub const IMPACT_LEVELS: [ImpactLevel; 5] = [
    ImpactLevel::NotAtAll,
    ImpactLevel::OnlySlightly,
    ImpactLevel::Moderately,
    ImpactLevel::Severely,
    ImpactLevel::Completely,
];

impl ImpactLevel {
    /// Integer code, 0 (not at all) through 4 (completely).
    pub fn code(&self) -> u8 {
        match self {
            ImpactLevel::NotAtAll => 0,
            ImpactLevel::OnlySlightly => 1,
            ImpactLevel::Moderately => 2,
            ImpactLevel::Severely => 3,
            ImpactLevel::Completely => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        IMPACT_LEVELS.get(code as usize).copied()
    }

    /// The answer text as it appears in the survey export.
    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::NotAtAll => "Not at all",
            ImpactLevel::OnlySlightly => "Only slightly",
            ImpactLevel::Moderately => "Moderately",
            ImpactLevel::Severely => "Severely",
            ImpactLevel::Completely => "Completely",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        IMPACT_LEVELS.iter().copied().find(|l| l.label() == label)
    }

    /// Whether this level counts as severe impact (Severely or Completely).
    pub fn is_severe(&self) -> bool {
        matches!(self, ImpactLevel::Severely | ImpactLevel::Completely)
    }
}

/// Map textual impact answers to ordinal codes.
///
/// Values outside the five-level vocabulary become NaN rather than an error,
/// so a stray free-text answer degrades the group mean instead of aborting
/// the run.
pub fn map_impact_column(values: &[String]) -> Vec<f64> {
    values
        .iter()
        .map(|v| match ImpactLevel::from_label(v.trim()) {
            Some(level) => level.code() as f64,
            None => f64::NAN,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_round_trips_for_all_five_levels() {
        for level in IMPACT_LEVELS {
            assert_eq!(ImpactLevel::from_code(level.code()), Some(level));
            assert_eq!(ImpactLevel::from_label(level.label()), Some(level));
        }
    }

    #[test]
    fn codes_ascend_with_severity() {
        let codes: Vec<u8> = IMPACT_LEVELS.iter().map(|l| l.code()).collect();
        assert_eq!(codes, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn unknown_labels_never_map_to_a_code() {
        assert_eq!(ImpactLevel::from_label("Somewhat"), None);
        assert_eq!(ImpactLevel::from_label("severely"), None); // case-sensitive
        assert_eq!(ImpactLevel::from_code(5), None);
    }

    #[test]
    fn unknown_answers_degrade_to_nan() {
        let col = vec![
            "Moderately".to_string(),
            "Prefer not to say".to_string(),
            " Completely ".to_string(),
        ];
        let codes = map_impact_column(&col);
        assert_eq!(codes[0], 2.0);
        assert!(codes[1].is_nan());
        assert_eq!(codes[2], 4.0);
    }

    #[test]
    fn severity_covers_exactly_the_top_two_levels() {
        let severe: Vec<ImpactLevel> = IMPACT_LEVELS.iter().copied().filter(|l| l.is_severe()).collect();
        assert_eq!(severe, [ImpactLevel::Severely, ImpactLevel::Completely]);
    }
}
