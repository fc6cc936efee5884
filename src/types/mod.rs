mod row;
mod value;

pub use row::{rows_to_value, Row};
pub use value::Value;
