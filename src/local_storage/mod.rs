pub mod core_local_storage;
pub mod shipment;
pub mod shipment_product;

pub use core_local_storage::CoreLocalStorage;
