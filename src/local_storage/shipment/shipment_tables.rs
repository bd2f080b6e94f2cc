/// Provides constants and utilities for working with
/// the "Shipment" database table.
pub struct ShipmentTable;

impl ShipmentTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "Shipment";

    /// The column name for the shipment identifier shared with `ShipmentProduct`.
    pub const COLUMN_SHIPMENT_ID: &'static str = "shipment_id";

    /// The column name for storing where the shipment starts.
    pub const COLUMN_ORIGIN_LOCATION: &'static str = "origin_location";

    /// The column name for storing where the shipment ends.
    pub const COLUMN_DESTINATION_LOCATION: &'static str = "destination_location";

    /// The column name for storing the shipment date as written in the spreadsheet.
    pub const COLUMN_SHIPMENT_DATE: &'static str = "shipment_date";

    /// SQL statement for creating the Shipment table with the defined schema.
    ///
    /// The same shipment id may appear with different locations, so it is
    /// not a primary key.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} TEXT NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_SHIPMENT_ID,
            Self::COLUMN_ORIGIN_LOCATION,
            Self::COLUMN_DESTINATION_LOCATION,
            Self::COLUMN_SHIPMENT_DATE
        )
    }

    /// SQL statement appending one row.
    pub fn insert_row() -> String {
        format!(
            "INSERT INTO {} ({}, {}, {}, {}) VALUES (?, ?, ?, ?)",
            Self::TABLE_NAME,
            Self::COLUMN_SHIPMENT_ID,
            Self::COLUMN_ORIGIN_LOCATION,
            Self::COLUMN_DESTINATION_LOCATION,
            Self::COLUMN_SHIPMENT_DATE
        )
    }
}
