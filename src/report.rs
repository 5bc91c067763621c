//! Three-line stdout summary of the prevalence percentages.

use crate::analysis::aggregate::SurveySummary;

/// Format the summary, one labelled percentage per line, two decimals, in
/// fixed order: high-frequency, long-duration, severe-impact.
pub fn format_summary(summary: &SurveySummary) -> String {
    format!(
        "Percentage of respondents with high mood swing frequency (>=7): {:.2}%\n\
         Percentage of respondents with long-duration mood swings: {:.2}%\n\
         Percentage of respondents who report severe impact on daily activities: {:.2}%\n",
        summary.pct_high_frequency, summary.pct_long_duration, summary.pct_severe_impact,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_three_lines_with_two_decimals() {
        let text = format_summary(&SurveySummary {
            pct_high_frequency: 30.0,
            pct_long_duration: 10.0,
            pct_severe_impact: 20.0,
        });
        assert_eq!(
            text,
            "Percentage of respondents with high mood swing frequency (>=7): 30.00%\n\
             Percentage of respondents with long-duration mood swings: 10.00%\n\
             Percentage of respondents who report severe impact on daily activities: 20.00%\n"
        );
    }

    #[test]
    fn fractional_percentages_round_to_two_decimals() {
        let text = format_summary(&SurveySummary {
            pct_high_frequency: 100.0 / 3.0,
            pct_long_duration: 0.0,
            pct_severe_impact: 66.666,
        });
        assert!(text.contains("(>=7): 33.33%"));
        assert!(text.contains("long-duration mood swings: 0.00%"));
        assert!(text.contains("daily activities: 66.67%"));
    }
}
