use std::collections::BTreeMap;

use crate::types::Value;

/// A single decoded result row.
///
/// Column order from the result set is preserved, so "first column" is
/// well-defined even before the row is flattened into a mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    /// Creates a new Row from column names and decoded values in column order.
    pub fn new(columns: Vec<String>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    /// Gets a value by column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }

    /// Returns the first column's value, if the row has any columns.
    pub fn first(&self) -> Option<&Value> {
        self.values.first()
    }

    /// Returns the column names in result-set order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the number of columns in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Flattens the row into a column-name-to-value mapping.
    pub fn into_object(self) -> BTreeMap<String, Value> {
        self.columns.into_iter().zip(self.values).collect()
    }
}

impl From<Row> for Value {
    fn from(row: Row) -> Self {
        Value::Object(row.into_object())
    }
}

/// Converts a full result set into the generic representation:
/// an array of one object per row.
pub fn rows_to_value(rows: Vec<Row>) -> Value {
    Value::Array(rows.into_iter().map(Value::from).collect())
}
