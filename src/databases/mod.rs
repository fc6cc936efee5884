mod tokio_postgres;

pub use self::in_memory_test::{InMemoryDatabase, RecordedStatement, ResponseBuilder};
pub use self::tokio_postgres::{PostgresConfig, PostgresConnection, PostgresDatabase};
