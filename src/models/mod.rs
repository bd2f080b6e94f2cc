pub mod spreadsheet;

pub use spreadsheet::{LocationRow, MergedRow, ProductRow};
