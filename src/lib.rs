//! fluent-postgres - A PostgreSQL driver adapter for Fluent-style ORMs
//!
//! Binds an ORM's abstract query and schema objects to PostgreSQL: the ORM
//! renders them to SQL through the [`Serializer`] contract, the driver
//! executes the statements over a connection from the backend, and the result
//! rows come back as the generic [`Value`] representation.
//!
//! # Example
//! ```ignore
//! use fluent_postgres::{Action, PostgresConfig, PostgresDriver, Query, Value};
//!
//! // Build a driver; no connection is opened until the first operation.
//! let driver = PostgresDriver::new(PostgresConfig::new("mydb", "user", "secret"))?;
//!
//! // Raw escape hatch
//! driver.raw("CREATE TABLE users (id SERIAL PRIMARY KEY, name VARCHAR(16))", &[]).await?;
//!
//! // Abstract queries carry an action tag plus an ORM-rendered statement.
//! let insert = Query::new(Action::Create, orm_rendered_insert);
//! let id = driver.query(&insert).await?;
//! assert_eq!(id, Value::Int(1));
//! ```

pub mod databases;
pub mod error;
pub mod query;
pub mod traits;
pub mod types;

mod driver;

// Re-export main types for convenient access
pub use databases::{PostgresConfig, PostgresDatabase};
pub use driver::PostgresDriver;
pub use error::{DriverError, Result};
pub use query::{Action, Query, Schema, SqlStatement};
pub use traits::{Connection, Database, Serializer};
pub use types::{Row, Value};
