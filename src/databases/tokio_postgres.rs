use std::error::Error as StdError;

use async_trait::async_trait;
use bytes::BytesMut;
use tokio_postgres::types::{to_sql_checked, IsNull, ToSql, Type};
use tokio_postgres::{Client, NoTls};
use tracing::error;

use crate::error::{DriverError, Result};
use crate::traits::{Connection, Database};
use crate::types::{Row, Value};

/// Connection parameters for the PostgreSQL backend.
///
/// # Example
/// ```ignore
/// let config = PostgresConfig::new("mydb", "user", "secret")
///     .host("db.internal")
///     .port(5433);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    host: String,
    port: u16,
    dbname: String,
    user: String,
    password: String,
}

impl PostgresConfig {
    /// Parameters for a database, defaulting to host "localhost" and
    /// port 5432.
    pub fn new(
        dbname: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            dbname: dbname.into(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// Override the host. May be a host name or an IP address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the port. Can't be 0.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// PostgreSQL connection factory backed by tokio-postgres.
///
/// Holds only validated configuration; each `connection()` call dials the
/// server, so connection lifetime matches one driver operation.
pub struct PostgresDatabase {
    config: tokio_postgres::Config,
}

impl PostgresDatabase {
    /// Validate the parameters and build the factory.
    /// No connection is opened here.
    pub fn new(config: PostgresConfig) -> Result<Self> {
        if config.port == 0 {
            return Err(DriverError::InvalidConfig(
                "port must not be 0".to_string(),
            ));
        }

        let mut pg_config = tokio_postgres::Config::new();
        pg_config
            .host(&config.host)
            .port(config.port)
            .dbname(&config.dbname)
            .user(&config.user)
            .password(&config.password);

        Ok(Self { config: pg_config })
    }

    /// Build the factory from an already-constructed client configuration.
    pub fn from_config(config: tokio_postgres::Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Database for PostgresDatabase {
    async fn connection(&self) -> Result<Box<dyn Connection>> {
        let (client, connection) = self
            .config
            .connect(NoTls)
            .await
            .map_err(|e| DriverError::ConnectionFailed(e.to_string()))?;

        // The connection task drives the socket until the client drops.
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("postgres connection error: {e}");
            }
        });

        Ok(Box::new(PostgresConnection { client }))
    }
}

/// One live PostgreSQL session.
pub struct PostgresConnection {
    client: Client,
}

#[async_trait]
impl Connection for PostgresConnection {
    async fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        let refs: Vec<&(dyn ToSql + Sync)> =
            params.iter().map(|p| p as &(dyn ToSql + Sync)).collect();

        let rows = self
            .client
            .query(sql, &refs)
            .await
            .map_err(|e| DriverError::ExecutionFailed(e.to_string()))?;

        rows.iter().map(decode_row).collect()
    }
}

fn decode_row(pg_row: &tokio_postgres::Row) -> Result<Row> {
    let mut columns = Vec::with_capacity(pg_row.len());
    let mut values = Vec::with_capacity(pg_row.len());

    for (idx, column) in pg_row.columns().iter().enumerate() {
        columns.push(column.name().to_string());
        values.push(decode_value(pg_row, idx, column.type_())?);
    }

    Ok(Row::new(columns, values))
}

/// Decode one column, dispatching on its declared type.
/// SQL NULL decodes to `Value::Null` for every type.
fn decode_value(row: &tokio_postgres::Row, idx: usize, ty: &Type) -> Result<Value> {
    let value = if *ty == Type::BOOL {
        row.try_get::<_, Option<bool>>(idx)
            .map_err(decode_error)?
            .map(Value::Bool)
    } else if *ty == Type::INT2 {
        row.try_get::<_, Option<i16>>(idx)
            .map_err(decode_error)?
            .map(|v| Value::Int(i64::from(v)))
    } else if *ty == Type::INT4 {
        row.try_get::<_, Option<i32>>(idx)
            .map_err(decode_error)?
            .map(|v| Value::Int(i64::from(v)))
    } else if *ty == Type::INT8 {
        row.try_get::<_, Option<i64>>(idx)
            .map_err(decode_error)?
            .map(Value::Int)
    } else if *ty == Type::FLOAT4 {
        row.try_get::<_, Option<f32>>(idx)
            .map_err(decode_error)?
            .map(|v| Value::Float(f64::from(v)))
    } else if *ty == Type::FLOAT8 {
        row.try_get::<_, Option<f64>>(idx)
            .map_err(decode_error)?
            .map(Value::Float)
    } else if is_text_type(ty) {
        row.try_get::<_, Option<String>>(idx)
            .map_err(decode_error)?
            .map(Value::Text)
    } else {
        // Unfamiliar type: take it as text when the client can, else Null.
        row.try_get::<_, Option<String>>(idx)
            .ok()
            .flatten()
            .map(Value::Text)
    };

    Ok(value.unwrap_or(Value::Null))
}

fn is_text_type(ty: &Type) -> bool {
    *ty == Type::TEXT || *ty == Type::VARCHAR || *ty == Type::BPCHAR || *ty == Type::NAME
}

fn decode_error(e: tokio_postgres::Error) -> DriverError {
    DriverError::ExecutionFailed(e.to_string())
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn StdError + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(b) => b.to_sql(ty, out),
            Value::Int(i) => {
                // Narrow to the placeholder's width; lastval and friends are
                // carried as i64 even when the column is INT4.
                if *ty == Type::INT2 {
                    (*i as i16).to_sql(ty, out)
                } else if *ty == Type::INT4 {
                    (*i as i32).to_sql(ty, out)
                } else {
                    i.to_sql(ty, out)
                }
            }
            Value::Float(f) => {
                if *ty == Type::FLOAT4 {
                    (*f as f32).to_sql(ty, out)
                } else {
                    f.to_sql(ty, out)
                }
            }
            Value::Text(s) => s.to_sql(ty, out),
            Value::Array(_) | Value::Object(_) => {
                Err("array and object values cannot be bound as statement parameters".into())
            }
        }
    }

    fn accepts(ty: &Type) -> bool {
        *ty == Type::BOOL
            || *ty == Type::INT2
            || *ty == Type::INT4
            || *ty == Type::INT8
            || *ty == Type::FLOAT4
            || *ty == Type::FLOAT8
            || is_text_type(ty)
    }

    to_sql_checked!();
}
