use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Row, Value};

/// A single database session.
///
/// Takes `&mut self` so a caller holding a connection has exclusive use of
/// the session for the duration of an operation; session-local state such as
/// the last generated sequence value is only meaningful under that exclusivity.
#[async_trait]
pub trait Connection: Send {
    /// Execute a SQL statement with the given parameters and return the
    /// decoded result rows. Fails with `DriverError::ExecutionFailed`.
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>>;
}

/// Connection factory for a database backend.
///
/// Implementations own connection management entirely: the driver acquires
/// one handle per operation and drops it when the operation completes.
#[async_trait]
pub trait Database: Send + Sync {
    /// Produce a connection ready to execute statements.
    /// Fails with `DriverError::ConnectionFailed`.
    async fn connection(&self) -> Result<Box<dyn Connection>>;
}
