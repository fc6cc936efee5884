mod database;
mod serializer;

pub use database::{Connection, Database};
pub use serializer::Serializer;
