//! File access around the generator.

use std::{fs, path::Path};

use crate::error::GenerateError;

pub fn read_definitions(path: &Path) -> Result<Vec<u8>, GenerateError> {
    fs::read(path).map_err(|source| GenerateError::SourceRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Replaces the content of `path` with `contents`.
pub fn write_generated(path: &Path, contents: &str) -> Result<(), GenerateError> {
    fs::write(path, contents).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
