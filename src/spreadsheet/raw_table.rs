use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::error::{LoaderError, Result};

/// Storage class a raw column is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
}

impl ColumnType {
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text => "TEXT",
        }
    }

    /// Narrowest type that holds every non-empty value of a column.
    /// A column without any value is text.
    fn infer<'a>(values: impl Iterator<Item = &'a str>) -> Self {
        let mut values = values.map(str::trim).filter(|v| !v.is_empty()).peekable();
        if values.peek().is_none() {
            return ColumnType::Text;
        }

        let mut column_type = ColumnType::Integer;
        for value in values {
            if column_type == ColumnType::Integer && value.parse::<i64>().is_err() {
                column_type = ColumnType::Real;
            }
            if column_type == ColumnType::Real && value.parse::<f64>().is_err() {
                return ColumnType::Text;
            }
        }

        column_type
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl CellValue {
    fn parse(raw: String, column_type: ColumnType) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Null;
        }

        // Inference already checked that every non-empty value parses.
        match column_type {
            ColumnType::Integer => trimmed
                .parse()
                .map(CellValue::Integer)
                .unwrap_or(CellValue::Text(raw)),
            ColumnType::Real => trimmed
                .parse()
                .map(CellValue::Real)
                .unwrap_or(CellValue::Text(raw)),
            ColumnType::Text => CellValue::Text(raw),
        }
    }
}

/// A spreadsheet kept as-is: named columns, typed per column, rows in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub column_types: Vec<ColumnType>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn from_reader<R: Read>(reader: R, path: &Path) -> Result<Self> {
        let csv_error = |source| LoaderError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers().map_err(csv_error)?;
        let columns = normalize_headers(headers.iter());
        if columns.is_empty() {
            return Err(LoaderError::EmptySpreadsheet {
                path: path.to_path_buf(),
            });
        }

        // Short rows are padded with empty cells; long rows are rejected.
        let mut records = Vec::new();
        for (index, record) in rdr.records().enumerate() {
            let record = record.map_err(csv_error)?;
            if record.len() > columns.len() {
                return Err(LoaderError::MalformedRow {
                    path: path.to_path_buf(),
                    row: index + 1,
                    found: record.len(),
                    expected: columns.len(),
                });
            }

            let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
            cells.resize(columns.len(), String::new());
            records.push(cells);
        }

        let column_types: Vec<ColumnType> = (0..columns.len())
            .map(|i| ColumnType::infer(records.iter().map(|r| r[i].as_str())))
            .collect();

        let rows = records
            .into_iter()
            .map(|record| {
                record
                    .into_iter()
                    .zip(&column_types)
                    .map(|(raw, column_type)| CellValue::parse(raw, *column_type))
                    .collect()
            })
            .collect();

        Ok(Self {
            columns,
            column_types,
            rows,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Give blank headers a positional name and suffix repeated ones with `.1`, `.2`, ...
pub(crate) fn normalize_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();

    for (index, header) in headers.enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {}", index)
        } else {
            header.to_string()
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{}.{}", base, suffix);
            suffix += 1;
        }

        seen.insert(name.clone());
        columns.push(name);
    }

    columns
}
