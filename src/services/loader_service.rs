use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::db::{self, DbPool};
use crate::error::Result;
use crate::local_storage::{
    CoreLocalStorage, shipment::ShipmentLocalStorage,
    shipment_product::ShipmentProductLocalStorage,
};
use crate::models::{LocationRow, MergedRow, ProductRow};
use crate::spreadsheet::{self, RawTable};

/// Table receiving `spreadsheet_0.csv` verbatim.
pub const RAW_TABLE_NAME: &str = "shipping_data_0";

/// Row counts written by one successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub raw_rows: u64,
    pub merged_rows: u64,
    pub shipments: u64,
    pub shipment_products: u64,
}

struct Spreadsheets {
    raw: RawTable,
    merged: Vec<MergedRow>,
}

pub struct LoaderService {
    config: Config,
}

impl LoaderService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the whole load once.
    ///
    /// Failures are reported on the console before returning. Once the
    /// database is open it is closed on every path.
    pub async fn run(&self) -> Result<LoadSummary> {
        let pool = match db::init_db_pool(&self.config.database_path).await {
            Ok(pool) => pool,
            Err(e) => {
                e.report();
                return Err(e);
            }
        };
        info!("Successfully connected to the database.");

        let result = self.populate(&pool).await;
        if let Err(e) = &result {
            e.report();
        }

        pool.close().await;
        info!("Database connection closed.");

        result
    }

    async fn populate(&self, pool: &DbPool) -> Result<LoadSummary> {
        // Everything is read before the first write so a bad input leaves
        // the database untouched.
        let spreadsheets = self.read_spreadsheets()?;

        if self.config.create_missing_tables {
            db::setup_tables(pool).await?;
        }

        let core_storage = Arc::new(CoreLocalStorage::new(pool.clone()));
        let shipment_storage = ShipmentLocalStorage::new(core_storage.clone());
        let shipment_product_storage = ShipmentProductLocalStorage::new(core_storage.clone());

        let mut tx = core_storage.begin().await?;

        let raw_rows = core_storage
            .replace_table(&mut *tx, RAW_TABLE_NAME, &spreadsheets.raw)
            .await?;
        info!("Data from spreadsheet_0 inserted successfully.");

        let shipments = spreadsheet::derive_shipments(&spreadsheets.merged);
        for (shipment_id, variants) in spreadsheet::shipment_conflicts(&shipments) {
            warn!(
                %shipment_id,
                variants, "Shipment id appears with differing origin, destination or date"
            );
        }
        let shipment_count = shipment_storage
            .append_shipments(&mut *tx, &shipments)
            .await?;
        info!("Unique shipments inserted into 'Shipment' table.");

        let shipment_products = spreadsheet::derive_shipment_products(&spreadsheets.merged);
        let shipment_product_count = shipment_product_storage
            .append_shipment_products(&mut *tx, &shipment_products)
            .await?;
        info!("Product data inserted into 'ShipmentProduct' table.");

        tx.commit().await?;

        let summary = LoadSummary {
            raw_rows,
            merged_rows: spreadsheets.merged.len() as u64,
            shipments: shipment_count,
            shipment_products: shipment_product_count,
        };
        info!(
            raw_rows = summary.raw_rows,
            shipments = summary.shipments,
            shipment_products = summary.shipment_products,
            "Database has been successfully populated!"
        );

        Ok(summary)
    }

    fn read_spreadsheets(&self) -> Result<Spreadsheets> {
        info!("Processing spreadsheet_0...");
        let raw = spreadsheet::read_raw_table(&self.config.spreadsheet_path(0))?;

        info!("Processing spreadsheet_1 and spreadsheet_2...");
        let products: Vec<ProductRow> =
            spreadsheet::read_records(&self.config.spreadsheet_path(1), ProductRow::COLUMNS)?;
        let locations: Vec<LocationRow> =
            spreadsheet::read_records(&self.config.spreadsheet_path(2), LocationRow::COLUMNS)?;

        let merged = spreadsheet::inner_join(&products, &locations);
        debug!(rows = merged.len(), "merged product and location rows");
        info!("Spreadsheets 1 and 2 merged successfully.");

        Ok(Spreadsheets { raw, merged })
    }
}
