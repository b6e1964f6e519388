//! Repository for the `passengers` table.

use sqlx::PgPool;

use crate::models::passenger::Passenger;

/// The dashboard's only statement. No filter, no ordering, no limit: rows
/// come back in whatever order the store scans them.
const LIST_ALL: &str = "SELECT id, name, location FROM passengers";

/// Provides read access to passengers. Rows are written out-of-band only.
pub struct PassengerRepo;

impl PassengerRepo {
    /// Fetch every passenger in store-native order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Passenger>, sqlx::Error> {
        let rows = sqlx::query_as::<_, Passenger>(LIST_ALL)
            .fetch_all(pool)
            .await?;
        tracing::debug!(count = rows.len(), "Fetched passengers");
        Ok(rows)
    }

    /// Whether the `passengers` table is visible on the current search path.
    pub async fn table_exists(pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT to_regclass('passengers') IS NOT NULL")
            .fetch_one(pool)
            .await
    }
}
