pub mod shipment_local_storage;
pub mod shipment_tables;

pub use shipment_local_storage::{Shipment, ShipmentLocalStorage};
pub use shipment_tables::ShipmentTable;
