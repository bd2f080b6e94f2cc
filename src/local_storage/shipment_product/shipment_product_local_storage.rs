use crate::error::Result;
use crate::local_storage::core_local_storage::CoreLocalStorage;
use crate::local_storage::shipment_product::shipment_product_tables::ShipmentProductTable;
use crate::models::MergedRow;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ShipmentProduct {
    pub shipment_id: String,
    pub product: String,
    pub quantity: i64,
}

impl From<&MergedRow> for ShipmentProduct {
    fn from(row: &MergedRow) -> Self {
        ShipmentProduct {
            shipment_id: row.shipment_id.clone(),
            product: row.product.clone(),
            quantity: row.quantity,
        }
    }
}

pub struct ShipmentProductLocalStorage {
    core_storage: Arc<CoreLocalStorage>,
}

impl ShipmentProductLocalStorage {
    pub fn new(core_storage: Arc<CoreLocalStorage>) -> Self {
        ShipmentProductLocalStorage { core_storage }
    }

    pub async fn append_shipment_products(
        &self,
        conn: &mut SqliteConnection,
        products: &[ShipmentProduct],
    ) -> Result<u64> {
        let query = ShipmentProductTable::insert_row();
        let mut inserted = 0;

        for product in products {
            inserted += sqlx::query(&query)
                .bind(&product.shipment_id)
                .bind(&product.product)
                .bind(product.quantity)
                .execute(&mut *conn)
                .await?
                .rows_affected();
        }

        Ok(inserted)
    }

    pub async fn get_shipment_products(&self, shipment_id: &str) -> Result<Vec<ShipmentProduct>> {
        let query = format!(
            "SELECT {}, {}, {} FROM {} WHERE {} = ? ORDER BY rowid",
            ShipmentProductTable::COLUMN_SHIPMENT_ID,
            ShipmentProductTable::COLUMN_PRODUCT,
            ShipmentProductTable::COLUMN_QUANTITY,
            ShipmentProductTable::TABLE_NAME,
            ShipmentProductTable::COLUMN_SHIPMENT_ID
        );

        let products = sqlx::query_as::<_, ShipmentProduct>(&query)
            .bind(shipment_id)
            .fetch_all(self.core_storage.pool())
            .await?;

        Ok(products)
    }

    pub async fn count(&self) -> Result<i64> {
        self.core_storage
            .count_rows(ShipmentProductTable::TABLE_NAME)
            .await
    }
}
