use serde::Deserialize;

/// One row of `spreadsheet_1.csv`: a product carried by a shipment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRow {
    pub shipment_id: String,
    pub product: String,
    pub quantity: i64,
}

impl ProductRow {
    pub const COLUMNS: &'static [&'static str] = &["shipment_id", "product", "quantity"];
}

/// One row of `spreadsheet_2.csv`: where a shipment travels and when.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationRow {
    pub shipment_id: String,
    pub origin: String,
    pub destination: String,
    pub shipment_date: String,
}

impl LocationRow {
    pub const COLUMNS: &'static [&'static str] =
        &["shipment_id", "origin", "destination", "shipment_date"];
}

/// A product row joined with the location row sharing its `shipment_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub shipment_id: String,
    pub product: String,
    pub quantity: i64,
    pub origin: String,
    pub destination: String,
    pub shipment_date: String,
}

impl MergedRow {
    pub fn new(product: &ProductRow, location: &LocationRow) -> Self {
        Self {
            shipment_id: product.shipment_id.clone(),
            product: product.product.clone(),
            quantity: product.quantity,
            origin: location.origin.clone(),
            destination: location.destination.clone(),
            shipment_date: location.shipment_date.clone(),
        }
    }
}
