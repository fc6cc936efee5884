use std::sync::Arc;

use tracing::debug;

use crate::databases::{PostgresConfig, PostgresDatabase};
use crate::error::Result;
use crate::query::{Action, Query, Schema};
use crate::traits::{Database, Serializer};
use crate::types::{rows_to_value, Row, Value};

/// PostgreSQL driver for a Fluent-style ORM.
///
/// Translates abstract queries and schemas into executed statements and maps
/// the results back into the generic [`Value`] representation. The driver is
/// stateless: every operation acquires its own connection from the backend
/// and releases it when the operation completes.
pub struct PostgresDriver {
    database: Arc<dyn Database>,
}

impl std::fmt::Debug for PostgresDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresDriver").finish_non_exhaustive()
    }
}

impl PostgresDriver {
    /// Build a driver from explicit connection parameters.
    ///
    /// No connection is opened here; connections are acquired lazily, one per
    /// operation. Fails with `DriverError::InvalidConfig` if the
    /// configuration is rejected (e.g. port 0).
    pub fn new(config: PostgresConfig) -> Result<Self> {
        Ok(Self::with_database(Arc::new(PostgresDatabase::new(config)?)))
    }

    /// Build a driver over an already-constructed database handle.
    /// Useful for testing or for alternative backends.
    pub fn with_database(database: Arc<dyn Database>) -> Self {
        Self { database }
    }

    /// Execute an abstract query and return its result.
    ///
    /// `Create` queries issue a follow-up `SELECT LASTVAL();` on the same
    /// connection and return the generated id when one is found; `Count`
    /// queries reduce the result to a single integer, defaulting to zero.
    /// Every other action returns the converted result set unchanged.
    pub async fn query(&self, query: &Query) -> Result<Value> {
        let (statement, values) = query.serialize();
        debug!(action = ?query.action(), sql = %statement, "executing query");

        // One connection for the whole operation: the create path reads
        // session-local sequence state after the insert.
        let mut conn = self.database.connection().await?;
        let result = conn.execute(&statement, &values).await?;

        match query.action() {
            Action::Create => {
                let lastval = conn.execute("SELECT LASTVAL();", &[]).await?;
                match last_inserted_id(&lastval) {
                    Some(id) => Ok(Value::Int(id)),
                    // No generated id to report; hand back whatever the
                    // insert itself produced.
                    None => Ok(rows_to_value(result)),
                }
            }
            Action::Count => {
                let count = result
                    .first()
                    .and_then(Row::first)
                    .and_then(Value::as_int)
                    .unwrap_or(0);
                Ok(Value::Int(count))
            }
            Action::Fetch | Action::Modify | Action::Delete => Ok(rows_to_value(result)),
        }
    }

    /// Apply an abstract schema operation, discarding the result.
    pub async fn schema(&self, schema: &Schema) -> Result<()> {
        let (statement, values) = schema.serialize();
        debug!(sql = %statement, "executing schema");

        let mut conn = self.database.connection().await?;
        conn.execute(&statement, &values).await?;
        Ok(())
    }

    /// Execute literal SQL directly, bypassing the serializer.
    /// Escape hatch for callers needing raw access outside the ORM.
    pub async fn raw(&self, sql: &str, values: &[Value]) -> Result<Value> {
        debug!(%sql, "executing raw statement");

        let mut conn = self.database.connection().await?;
        let result = conn.execute(sql, values).await?;
        Ok(rows_to_value(result))
    }
}

/// Reads the generated id out of a `SELECT LASTVAL();` result, if present.
fn last_inserted_id(rows: &[Row]) -> Option<i64> {
    rows.first()
        .and_then(|row| row.get("lastval"))
        .and_then(Value::as_int)
}
