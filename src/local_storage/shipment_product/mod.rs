pub mod shipment_product_local_storage;
pub mod shipment_product_tables;

pub use shipment_product_local_storage::{ShipmentProduct, ShipmentProductLocalStorage};
pub use shipment_product_tables::ShipmentProductTable;
