use crate::types::Value;

/// Contract for the external SQL serializer.
///
/// The ORM layer renders an abstract query or schema into dialect-specific
/// SQL text plus an ordered parameter list; the driver consumes the rendered
/// pair and never inspects the SQL itself.
pub trait Serializer: Send + Sync {
    /// Render to SQL text and ordered bound parameters.
    /// Parameters use PostgreSQL-style placeholders ($1, $2, etc.)
    fn serialize(&self) -> (String, Vec<Value>);
}
