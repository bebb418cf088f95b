use std::{
    env,
    path::{Path, PathBuf},
};

pub const DEFAULT_DEFINITIONS_PATH: &str = "errors.json";
pub const DEFAULT_OUTPUT_PATH: &str = "src/errors.rs";

pub const DEFINITIONS_ENV: &str = "ERRGEN_DEFINITIONS";
pub const OUTPUT_ENV: &str = "ERRGEN_OUTPUT";

/// Where a run reads definitions from and writes the module to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub definitions_path: PathBuf,
    pub output_path: PathBuf,
    pub module_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEFINITIONS_PATH, DEFAULT_OUTPUT_PATH)
    }
}

impl GeneratorConfig {
    pub fn new(definitions_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        let output_path = output_path.into();
        Self {
            definitions_path: definitions_path.into(),
            module_name: module_name_for(&output_path),
            output_path,
        }
    }

    /// Defaults, with paths overridden by `ERRGEN_DEFINITIONS` and
    /// `ERRGEN_OUTPUT` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key).map(PathBuf::from))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<PathBuf>) -> Self {
        Self::new(
            lookup(DEFINITIONS_ENV).unwrap_or_else(|| PathBuf::from(DEFAULT_DEFINITIONS_PATH)),
            lookup(OUTPUT_ENV).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        )
    }
}

fn module_name_for(output_path: &Path) -> String {
    output_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("errors")
        .to_string()
}
