//! Error types for the survey analysis pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors the pipeline can abort with.
///
/// Impact answers outside the known five-level vocabulary are deliberately
/// NOT represented here: they degrade to missing values during the ordinal
/// mapping instead of failing the run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input file is missing, unreadable, or not a valid spreadsheet.
    #[error("cannot load '{}': {message}", path.display())]
    DataLoad { path: PathBuf, message: String },

    /// An expected question header is absent from the file.
    #[error("survey column not found: '{header}'")]
    MissingColumn { header: String },

    /// The file parsed but holds zero respondent rows.
    #[error("dataset contains no respondent rows")]
    EmptyDataset,

    /// The plot window could not be opened (e.g. no display backend).
    /// Raised after the text report has already been printed.
    #[error("cannot open plot window: {0}")]
    Render(String),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
