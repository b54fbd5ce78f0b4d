use std::path::Path;

use ndarray::Array2;

use crate::input::{InputError, open_reader, path_display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
}

impl Delimiter {
    /// `.csv` and `.csv.gz` are comma separated, everything else is TSV.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let name = name.strip_suffix(".gz").unwrap_or(name.as_str());
        if name.ends_with(".csv") {
            Delimiter::Comma
        } else {
            Delimiter::Tab
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Tab => "tab",
            Delimiter::Comma => "comma",
        }
    }
}

/// Reads a headerless dense numeric matrix, one row per line.
///
/// Lines starting with `#` are skipped. Every row must have the width of the
/// first one.
pub fn read_dense(path: &Path) -> Result<Array2<f64>, InputError> {
    let delimiter = Delimiter::from_path(path);
    let reader = open_reader(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter.as_byte())
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut values = Vec::new();
    let mut n_cols: Option<usize> = None;
    let mut n_rows = 0usize;

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        let expected = *n_cols.get_or_insert(record.len());
        if record.len() != expected {
            return Err(InputError::RaggedRow {
                line,
                expected,
                found: record.len(),
            });
        }

        for (column, field) in record.iter().enumerate() {
            let value = parse_value(field).ok_or_else(|| InputError::InvalidValue {
                line,
                column: column + 1,
                value: field.to_string(),
            })?;
            values.push(value);
        }
        n_rows += 1;
    }

    let n_cols = match n_cols {
        Some(n) if n_rows > 0 => n,
        _ => return Err(InputError::EmptyMatrix(path_display(path).to_string())),
    };

    Array2::from_shape_vec((n_rows, n_cols), values)
        .map_err(|_| InputError::EmptyMatrix(path_display(path).to_string()))
}

fn parse_value(field: &str) -> Option<f64> {
    if field.is_empty() {
        return None;
    }
    field.parse::<f64>().ok()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/dense.rs"]
mod tests;
