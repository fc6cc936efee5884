use crate::traits::Serializer;
use crate::types::Value;

/// The kind of data operation an abstract query describes.
///
/// Kept exhaustive so the driver's dispatch is a closed match: `Create` and
/// `Count` carry special result handling, the rest return the result set
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fetch,
    Create,
    Modify,
    Delete,
    Count,
}

/// An abstract query: an action tag plus the ORM-rendered statement.
///
/// The driver reads only the action and the serialized (sql, parameters)
/// pair; everything else about the query stays on the ORM side.
pub struct Query {
    action: Action,
    statement: Box<dyn Serializer>,
}

impl Query {
    pub fn new(action: Action, statement: impl Serializer + 'static) -> Self {
        Self {
            action,
            statement: Box::new(statement),
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }
}

impl Serializer for Query {
    fn serialize(&self) -> (String, Vec<Value>) {
        self.statement.serialize()
    }
}

/// An abstract schema operation (create/alter/drop table and the like).
pub struct Schema {
    statement: Box<dyn Serializer>,
}

impl Schema {
    pub fn new(statement: impl Serializer + 'static) -> Self {
        Self {
            statement: Box::new(statement),
        }
    }
}

impl Serializer for Schema {
    fn serialize(&self) -> (String, Vec<Value>) {
        self.statement.serialize()
    }
}

/// A pre-rendered SQL statement; the degenerate serializer.
///
/// Useful when the caller already holds SQL text, and as the statement type
/// for hand-built queries in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    sql: String,
    values: Vec<Value>,
}

impl SqlStatement {
    pub fn new(sql: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            values,
        }
    }
}

impl Serializer for SqlStatement {
    fn serialize(&self) -> (String, Vec<Value>) {
        (self.sql.clone(), self.values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_statement_serializes_verbatim() {
        let statement = SqlStatement::new(
            "SELECT * FROM users WHERE id = $1",
            vec![Value::Int(1)],
        );
        let (sql, values) = statement.serialize();
        assert_eq!(sql, "SELECT * FROM users WHERE id = $1");
        assert_eq!(values, vec![Value::Int(1)]);
    }

    #[test]
    fn test_query_delegates_to_statement() {
        let query = Query::new(
            Action::Count,
            SqlStatement::new("SELECT COUNT(*) FROM users", Vec::new()),
        );
        assert_eq!(query.action(), Action::Count);
        let (sql, values) = query.serialize();
        assert_eq!(sql, "SELECT COUNT(*) FROM users");
        assert!(values.is_empty());
    }
}
