use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::path::Path;
use std::time::Duration;

use crate::{
    error::Result,
    local_storage::{shipment::ShipmentTable, shipment_product::ShipmentProductTable},
};

pub type DbPool = Pool<Sqlite>;

/// Open the database file, creating it if it doesn't exist.
///
/// The pool holds a single connection; every statement of a run goes
/// through it in order.
pub async fn init_db_pool(database_path: &Path) -> Result<DbPool> {
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Create the `Shipment` and `ShipmentProduct` tables when they are missing.
pub async fn setup_tables(pool: &DbPool) -> Result<()> {
    sqlx::query(&ShipmentTable::create_table())
        .execute(pool)
        .await?;

    sqlx::query(&ShipmentProductTable::create_table())
        .execute(pool)
        .await?;

    Ok(())
}

/// Whether a table with exactly this name exists in the database.
pub async fn table_exists(pool: &DbPool, table_name: &str) -> Result<bool> {
    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(table_name)
            .fetch_one(pool)
            .await?;

    Ok(count.0 > 0)
}
