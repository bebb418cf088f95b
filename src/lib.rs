pub mod compose;
pub mod config;
pub mod definition;
pub mod error;
pub mod format;
pub mod identifier;
pub mod io;
pub mod pipeline;
pub mod render;
pub mod runtime;

pub use error::GenerateError;
