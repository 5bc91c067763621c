use std::path::Path;

use crate::error::{AnalysisError, Result};

/// Result of loading a survey export: column headers and column data as strings.
#[derive(Debug)]
pub struct LoadedData {
    pub columns: Vec<String>,
    pub column_data: Vec<Vec<String>>, // column-major: column_data[col_idx][row_idx]
    pub row_count: usize,
}

/// Load a CSV or Excel file and return the header names and raw string data.
///
/// The first row is taken as the header row; survey exports put the question
/// text there.
pub fn load_file(path: &Path) -> Result<LoadedData> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => load_csv(path),
        "xls" | "xlsx" => load_excel(path),
        _ => Err(load_error(path, format!("unsupported file format: .{ext}"))),
    }
}

fn load_error(path: &Path, message: impl Into<String>) -> AnalysisError {
    AnalysisError::DataLoad {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

fn load_csv(path: &Path) -> Result<LoadedData> {
    // Try UTF-8 first, then latin1 (each byte maps to the same code point)
    let content = std::fs::read(path).map_err(|e| load_error(path, format!("cannot read file: {e}")))?;
    let text = String::from_utf8(content.clone())
        .unwrap_or_else(|_| content.iter().map(|&b| b as char).collect());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut all_rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| load_error(path, format!("invalid CSV: {e}")))?;
        all_rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    table_from_rows(path, all_rows)
}

fn load_excel(path: &Path) -> Result<LoadedData> {
    use calamine::{open_workbook_auto, Data, Reader};

    let mut workbook =
        open_workbook_auto(path).map_err(|e| load_error(path, format!("cannot open Excel file: {e}")))?;

    // Responses always live on the first worksheet.
    let sheet_name = workbook
        .sheet_names()
        .first()
        .ok_or_else(|| load_error(path, "no sheets found"))?
        .clone();

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| load_error(path, format!("cannot read sheet '{sheet_name}': {e}")))?;

    let all_rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => String::new(),
                    Data::String(s) => s.clone(),
                    Data::Float(f) => f.to_string(),
                    Data::Int(i) => i.to_string(),
                    Data::Bool(b) => b.to_string(),
                    Data::DateTime(dt) => dt.to_string(),
                    Data::DateTimeIso(s) => s.clone(),
                    Data::DurationIso(s) => s.clone(),
                    Data::Error(e) => format!("{e:?}"),
                })
                .collect()
        })
        .collect();

    table_from_rows(path, all_rows)
}

/// Split the header row from the data rows and convert to column-major storage.
/// Short rows are padded with empty cells so every column has `row_count` entries.
fn table_from_rows(path: &Path, all_rows: Vec<Vec<String>>) -> Result<LoadedData> {
    let Some((header, data_rows)) = all_rows.split_first() else {
        return Err(load_error(path, "file contains no rows"));
    };

    if data_rows.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let columns: Vec<String> = header.iter().map(|s| s.trim().to_string()).collect();
    let num_cols = columns.len();
    let row_count = data_rows.len();

    let mut column_data: Vec<Vec<String>> = vec![Vec::with_capacity(row_count); num_cols];
    for row in data_rows {
        for (col_idx, col_data) in column_data.iter_mut().enumerate() {
            col_data.push(row.get(col_idx).cloned().unwrap_or_default());
        }
    }

    Ok(LoadedData {
        columns,
        column_data,
        row_count,
    })
}

/// Extract numeric f64 values from a string column. Invalid entries become NaN.
pub fn column_to_f64(data: &[String]) -> Vec<f64> {
    data.iter()
        .map(|s| s.trim().parse::<f64>().unwrap_or(f64::NAN))
        .collect()
}
