mod analysis;
mod app;
mod data;
mod error;
mod report;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::data::loader;
use crate::data::survey::SurveyTable;
use crate::error::Result;

/// Descriptive statistics and a trend chart for a mood-swing survey export.
#[derive(Parser)]
#[command(name = "moodtrend", version)]
#[command(about = "Summarize mood-swing survey responses and chart frequency vs. impact")]
struct Cli {
    /// Survey spreadsheet to analyze (.xlsx, .xls or .csv)
    #[arg(default_value = "data.xlsx")]
    file: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let table = SurveyTable::new(loader::load_file(&cli.file)?);
    info!(file = %cli.file.display(), rows = table.row_count(), "survey loaded");

    // Print the text report before touching the display, so the percentages
    // survive a failed window launch.
    let summary = analysis::aggregate::prevalence(&table)?;
    print!("{}", report::format_summary(&summary));

    let trend = analysis::aggregate::trend_from_table(&table)?;
    info!(points = trend.len(), "trend series ready");

    app::run_viewer(trend)
}
