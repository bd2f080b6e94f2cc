use crate::local_storage::shipment::ShipmentTable;

/// Provides the junction between shipments and the products they carry.
pub struct ShipmentProductTable;

impl ShipmentProductTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "ShipmentProduct";

    /// The column name for the shipment the product belongs to.
    pub const COLUMN_SHIPMENT_ID: &'static str = ShipmentTable::COLUMN_SHIPMENT_ID;

    /// The column name for the product.
    pub const COLUMN_PRODUCT: &'static str = "product";

    /// The column name for the quantity of the product in the shipment.
    pub const COLUMN_QUANTITY: &'static str = "quantity";

    /// SQL statement for creating the ShipmentProduct table with the defined
    /// schema. No foreign key: shipment ids are not unique in `Shipment`.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} TEXT NOT NULL,
                {} TEXT NOT NULL,
                {} INTEGER NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_SHIPMENT_ID,
            Self::COLUMN_PRODUCT,
            Self::COLUMN_QUANTITY
        )
    }

    pub fn insert_row() -> String {
        format!(
            "INSERT INTO {} ({}, {}, {}) VALUES (?, ?, ?)",
            Self::TABLE_NAME,
            Self::COLUMN_SHIPMENT_ID,
            Self::COLUMN_PRODUCT,
            Self::COLUMN_QUANTITY
        )
    }
}
