//! Column keys and checked access for the mood-swing survey table.

use crate::data::loader::{self, LoadedData};
use crate::error::{AnalysisError, Result};

/// The six survey questions this analysis reads.
///
/// The header text is load-bearing: exports use the full question wording as
/// the column name, and lookups must match it verbatim. Keeping the literals
/// here isolates the rest of the pipeline from the exact header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyColumn {
    /// Self-reported frequency, 1 (rarely) to 10 (constantly).
    MoodFrequency,
    /// Typical duration bucket of a mood swing.
    Duration,
    /// Impact on daily tasks, one of the five ordinal levels.
    Impact,
    /// Multi-select contributing factors.
    ContributingFactors,
    /// Whether treatment or support was sought.
    TreatmentSought,
    /// Multi-select areas where changes are noticed.
    NoticeChanges,
}

impl SurveyColumn {
    pub fn header(&self) -> &'static str {
        match self {
            SurveyColumn::MoodFrequency => {
                "How frequently do you experience significant changes in your mood, such as feeling very high and excited or very low and depressed? (1 - Rarely, 10 - Constantly)"
            }
            SurveyColumn::Duration => {
                "When you experience mood swings, how long do they typically last?"
            }
            SurveyColumn::Impact => {
                "Do these mood swings affect your ability to perform daily tasks (e.g., work, study, social activities)?"
            }
            SurveyColumn::ContributingFactors => {
                "Which, if any, of the following factors do you feel contribute to your mood swings? (Select all that apply)"
            }
            SurveyColumn::TreatmentSought => {
                "Have you sought any treatment or support for mood swings?"
            }
            SurveyColumn::NoticeChanges => {
                "When experiencing a mood swing, do you notice changes in any of the following areas? (Select all that apply)"
            }
        }
    }
}

/// One loaded survey export with header-checked column access.
pub struct SurveyTable {
    data: LoadedData,
}

impl SurveyTable {
    pub fn new(data: LoadedData) -> Self {
        Self { data }
    }

    /// Total respondent count.
    pub fn row_count(&self) -> usize {
        self.data.row_count
    }

    /// Raw string cells for a question column.
    pub fn column(&self, key: SurveyColumn) -> Result<&[String]> {
        let header = key.header();
        let idx = self
            .data
            .columns
            .iter()
            .position(|c| c == header)
            .ok_or_else(|| AnalysisError::MissingColumn {
                header: header.to_string(),
            })?;
        Ok(&self.data.column_data[idx])
    }

    /// The mood-frequency column parsed to numbers; unparseable cells are NaN.
    pub fn mood_frequencies(&self) -> Result<Vec<f64>> {
        Ok(loader::column_to_f64(self.column(SurveyColumn::MoodFrequency)?))
    }
}

#[cfg(test)]
pub(crate) fn table_from_columns(columns: Vec<(&str, Vec<&str>)>) -> SurveyTable {
    let row_count = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
    SurveyTable::new(LoadedData {
        columns: columns.iter().map(|(h, _)| h.to_string()).collect(),
        column_data: columns
            .iter()
            .map(|(_, cells)| cells.iter().map(|s| s.to_string()).collect())
            .collect(),
        row_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup_resolves_exact_header() {
        let table = table_from_columns(vec![
            ("unrelated", vec!["q"]),
            (SurveyColumn::Duration.header(), vec!["A week or longer"]),
        ]);
        let col = table.column(SurveyColumn::Duration).unwrap();
        assert_eq!(col, ["A week or longer"]);
    }

    #[test]
    fn absent_header_is_a_missing_column_error() {
        let table = table_from_columns(vec![("unrelated", vec!["q"])]);
        let err = table.column(SurveyColumn::Impact).unwrap_err();
        match err {
            AnalysisError::MissingColumn { header } => {
                assert_eq!(header, SurveyColumn::Impact.header());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn mood_frequencies_parse_with_nan_for_junk() {
        let table = table_from_columns(vec![(
            SurveyColumn::MoodFrequency.header(),
            vec!["7", "2", "sometimes"],
        )]);
        let freqs = table.mood_frequencies().unwrap();
        assert_eq!(freqs[0], 7.0);
        assert_eq!(freqs[1], 2.0);
        assert!(freqs[2].is_nan());
    }
}
