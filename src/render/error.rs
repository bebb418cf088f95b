use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("`{0}` is not a valid type name")]
    InvalidName(String),

    #[error("payload field `{0}` is not a valid field name")]
    InvalidFieldName(String),

    #[error("payload field `{0}` is declared more than once")]
    DuplicateField(String),

    #[error("payload field `{field}` has an invalid type `{ty}`: {reason}")]
    InvalidFieldType {
        field: String,
        ty: String,
        reason: &'static str,
    },

    #[error("generated item `{item}` clashes with {other}")]
    NameCollision { item: String, other: String },
}
