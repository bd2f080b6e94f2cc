use std::collections::{HashMap, HashSet};

use crate::local_storage::{shipment::Shipment, shipment_product::ShipmentProduct};
use crate::models::{LocationRow, MergedRow, ProductRow};

/// Inner join on `shipment_id`.
///
/// Output follows product order; a product matching several location rows
/// yields one merged row per match, in location order. Ids present on only
/// one side are dropped.
pub fn inner_join(products: &[ProductRow], locations: &[LocationRow]) -> Vec<MergedRow> {
    let mut by_id: HashMap<&str, Vec<&LocationRow>> = HashMap::new();
    for location in locations {
        by_id
            .entry(location.shipment_id.as_str())
            .or_default()
            .push(location);
    }

    products
        .iter()
        .flat_map(|product| {
            by_id
                .get(product.shipment_id.as_str())
                .into_iter()
                .flatten()
                .map(move |location| MergedRow::new(product, location))
        })
        .collect()
}

/// Shipment rows of the merge, exact duplicates removed (first occurrence kept).
pub fn derive_shipments(merged: &[MergedRow]) -> Vec<Shipment> {
    let mut seen = HashSet::new();

    merged
        .iter()
        .map(Shipment::from)
        .filter(|shipment| seen.insert(shipment.clone()))
        .collect()
}

pub fn derive_shipment_products(merged: &[MergedRow]) -> Vec<ShipmentProduct> {
    merged.iter().map(ShipmentProduct::from).collect()
}

/// Shipment ids that occur in more than one deduplicated shipment row,
/// paired with the number of distinct variants, in first-seen order.
pub fn shipment_conflicts(shipments: &[Shipment]) -> Vec<(String, usize)> {
    let mut order = Vec::new();
    let mut variants: HashMap<&str, usize> = HashMap::new();

    for shipment in shipments {
        let count = variants.entry(shipment.shipment_id.as_str()).or_insert(0);
        if *count == 0 {
            order.push(shipment.shipment_id.as_str());
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|id| {
            let count = variants[id];
            (count > 1).then(|| (id.to_string(), count))
        })
        .collect()
}
