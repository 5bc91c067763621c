//! Trend grouping and prevalence percentages over the survey table.

use tracing::debug;

use crate::analysis::impact::{self, ImpactLevel};
use crate::data::survey::{SurveyColumn, SurveyTable};
use crate::error::{AnalysisError, Result};

/// Frequency values at or above this count as high mood-swing frequency.
pub const HIGH_FREQUENCY_THRESHOLD: f64 = 7.0;

/// Duration answer that counts as long-duration. Exact match only; no other
/// duration bucket qualifies even if it reads as longer.
pub const LONG_DURATION_LABEL: &str = "A week or longer";

/// One point of the frequency-vs-mean-impact trend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub frequency: f64,
    /// Mean ordinal impact code among rows at this frequency. NaN when every
    /// impact answer in the group failed to map.
    pub mean_impact: f64,
}

/// The three prevalence percentages, each over the full respondent count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurveySummary {
    pub pct_high_frequency: f64,
    pub pct_long_duration: f64,
    pub pct_severe_impact: f64,
}

/// Group rows by exact frequency value and average the mapped impact codes.
///
/// NaN frequencies are dropped; a frequency with no rows yields no point (no
/// interpolation, no zero-fill). Output is ascending by frequency.
pub fn trend_series(frequencies: &[f64], impact_codes: &[f64]) -> Vec<TrendPoint> {
    let mut distinct: Vec<f64> = frequencies.iter().copied().filter(|f| f.is_finite()).collect();
    distinct.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    distinct.dedup();

    distinct
        .into_iter()
        .map(|freq| {
            let mut sum = 0.0;
            let mut n = 0usize;
            for (f, code) in frequencies.iter().zip(impact_codes) {
                if *f == freq && code.is_finite() {
                    sum += code;
                    n += 1;
                }
            }
            // Every answer in the group unmapped: the mean is undefined.
            let mean_impact = if n > 0 { sum / n as f64 } else { f64::NAN };
            TrendPoint { frequency: freq, mean_impact }
        })
        .collect()
}

/// Compute the trend series straight from a survey table.
pub fn trend_from_table(table: &SurveyTable) -> Result<Vec<TrendPoint>> {
    let frequencies = table.mood_frequencies()?;
    let impact_codes = impact::map_impact_column(table.column(SurveyColumn::Impact)?);
    Ok(trend_series(&frequencies, &impact_codes))
}

/// Compute the three prevalence percentages.
///
/// The long-duration and severe-impact subsets are nested inside the
/// high-frequency subset, but every percentage is taken over the full
/// respondent count, not the subset size.
pub fn prevalence(table: &SurveyTable) -> Result<SurveySummary> {
    let total = table.row_count();
    if total == 0 {
        return Err(AnalysisError::EmptyDataset);
    }

    let frequencies = table.mood_frequencies()?;
    let durations = table.column(SurveyColumn::Duration)?;
    // The severity test reads the original answer text, not the ordinal
    // codes, so it stays correct no matter when the remapping runs.
    let impacts = table.column(SurveyColumn::Impact)?;

    let mut high = 0usize;
    let mut long_duration = 0usize;
    let mut severe = 0usize;

    for ((freq, duration), impact) in frequencies.iter().zip(durations).zip(impacts) {
        // NaN never satisfies the threshold, so unparseable answers drop out.
        if freq.is_nan() || *freq < HIGH_FREQUENCY_THRESHOLD {
            continue;
        }
        high += 1;
        if duration.trim() == LONG_DURATION_LABEL {
            long_duration += 1;
        }
        if ImpactLevel::from_label(impact.trim()).is_some_and(|l| l.is_severe()) {
            severe += 1;
        }
    }

    debug!(total, high, long_duration, severe, "prevalence counts");

    let pct = |count: usize| 100.0 * count as f64 / total as f64;
    Ok(SurveySummary {
        pct_high_frequency: pct(high),
        pct_long_duration: pct(long_duration),
        pct_severe_impact: pct(severe),
    })
}
