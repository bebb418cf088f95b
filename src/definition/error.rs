//! Errors raised while reading the definition document.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not JSON, or not shaped like a definition set.
    #[error("failed to unmarshal error definitions: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("error `{0}` is defined more than once")]
    DuplicateName(String),

    #[error("error `{name}` has an invalid HTTP code {code}")]
    InvalidHttpCode { name: String, code: u16 },
}
