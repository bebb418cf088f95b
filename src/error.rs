use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{definition::ParseError, format::FormatError, render::RenderError};

/// First failure of a generation run. Nothing is written once one of these
/// is produced.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read the file {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to generate code for the error {name}: {source}")]
    Render {
        name: String,
        #[source]
        source: RenderError,
    },

    #[error("code formatting failed: {0}")]
    Format(#[from] FormatError),

    #[error("failed to write the result to the file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
