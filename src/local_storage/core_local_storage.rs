use sqlx::{
    Sqlite, SqliteConnection, Transaction,
    query::Query,
    sqlite::SqliteArguments,
};

use crate::db::DbPool;
use crate::error::Result;
use crate::spreadsheet::{CellValue, RawTable};

pub struct CoreLocalStorage {
    pool: DbPool,
}

impl CoreLocalStorage {
    pub fn new(pool: DbPool) -> Self {
        CoreLocalStorage { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin().await?)
    }

    /// Drop `table_name` if present, recreate it from the columns of `table`
    /// and insert every row. Returns the number of rows written.
    pub async fn replace_table(
        &self,
        conn: &mut SqliteConnection,
        table_name: &str,
        table: &RawTable,
    ) -> Result<u64> {
        let table_ident = quote_identifier(table_name);

        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table_ident))
            .execute(&mut *conn)
            .await?;

        let column_defs: Vec<String> = table
            .columns
            .iter()
            .zip(&table.column_types)
            .map(|(column, column_type)| {
                format!("{} {}", quote_identifier(column), column_type.sql_type())
            })
            .collect();

        sqlx::query(&format!(
            "CREATE TABLE {} ({})",
            table_ident,
            column_defs.join(", ")
        ))
        .execute(&mut *conn)
        .await?;

        let column_str = table
            .columns
            .iter()
            .map(|column| quote_identifier(column))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholder_str = vec!["?"; table.columns.len()].join(", ");
        let insert = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table_ident, column_str, placeholder_str
        );

        let mut inserted = 0;
        for row in &table.rows {
            let query = row
                .iter()
                .fold(sqlx::query(&insert), |query, value| bind_cell(query, value));
            inserted += query.execute(&mut *conn).await?.rows_affected();
        }

        Ok(inserted)
    }

    pub async fn count_rows(&self, table_name: &str) -> Result<i64> {
        let count: (i64,) =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", quote_identifier(table_name)))
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }
}

fn bind_cell<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &'q CellValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        CellValue::Null => query.bind(Option::<String>::None),
        CellValue::Integer(v) => query.bind(*v),
        CellValue::Real(v) => query.bind(*v),
        CellValue::Text(v) => query.bind(v.as_str()),
    }
}

pub(crate) fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
