use crate::error::Result;
use crate::local_storage::core_local_storage::CoreLocalStorage;
use crate::local_storage::shipment::shipment_tables::ShipmentTable;
use crate::models::MergedRow;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow)]
pub struct Shipment {
    pub shipment_id: String,
    pub origin_location: String,
    pub destination_location: String,
    pub shipment_date: String,
}

impl From<&MergedRow> for Shipment {
    fn from(row: &MergedRow) -> Self {
        Shipment {
            shipment_id: row.shipment_id.clone(),
            origin_location: row.origin.clone(),
            destination_location: row.destination.clone(),
            shipment_date: row.shipment_date.clone(),
        }
    }
}

pub struct ShipmentLocalStorage {
    core_storage: Arc<CoreLocalStorage>,
}

impl ShipmentLocalStorage {
    pub fn new(core_storage: Arc<CoreLocalStorage>) -> Self {
        ShipmentLocalStorage { core_storage }
    }

    /// Append rows to the existing table. Nothing is deduplicated against
    /// rows already stored.
    pub async fn append_shipments(
        &self,
        conn: &mut SqliteConnection,
        shipments: &[Shipment],
    ) -> Result<u64> {
        let query = ShipmentTable::insert_row();
        let mut inserted = 0;

        for shipment in shipments {
            inserted += sqlx::query(&query)
                .bind(&shipment.shipment_id)
                .bind(&shipment.origin_location)
                .bind(&shipment.destination_location)
                .bind(&shipment.shipment_date)
                .execute(&mut *conn)
                .await?
                .rows_affected();
        }

        Ok(inserted)
    }

    pub async fn get_all_shipments(&self) -> Result<Vec<Shipment>> {
        let query = format!(
            "SELECT {}, {}, {}, {} FROM {} ORDER BY rowid",
            ShipmentTable::COLUMN_SHIPMENT_ID,
            ShipmentTable::COLUMN_ORIGIN_LOCATION,
            ShipmentTable::COLUMN_DESTINATION_LOCATION,
            ShipmentTable::COLUMN_SHIPMENT_DATE,
            ShipmentTable::TABLE_NAME
        );

        let shipments = sqlx::query_as::<_, Shipment>(&query)
            .fetch_all(self.core_storage.pool())
            .await?;

        Ok(shipments)
    }

    pub async fn count(&self) -> Result<i64> {
        self.core_storage.count_rows(ShipmentTable::TABLE_NAME).await
    }
}
