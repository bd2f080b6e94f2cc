use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{LoaderError, Result};

pub mod merge;
pub mod raw_table;

pub use merge::{derive_shipment_products, derive_shipments, inner_join, shipment_conflicts};
pub use raw_table::{CellValue, ColumnType, RawTable};

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoaderError::FileNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => LoaderError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Read a spreadsheet whose columns are passed through untouched.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let file = open_file(path)?;
    RawTable::from_reader(file, path)
}

/// Read a spreadsheet into typed rows.
///
/// Every name in `required` must appear in the header; other columns are ignored.
pub fn read_records<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>> {
    let file = open_file(path)?;
    let csv_error = |source| LoaderError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = rdr.headers().map_err(csv_error)?;
    if let Some(column) = required
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(LoaderError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        });
    }

    let mut records = Vec::new();
    for record in rdr.deserialize() {
        records.push(record.map_err(csv_error)?);
    }

    Ok(records)
}
