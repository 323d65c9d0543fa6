use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::model::COL_KEYWORDS;
use crate::data::paginate::DEFAULT_PAGE_SIZE;
use crate::error::ConfigError;

pub const ENV_SOURCE: &str = "RESOURCE_DB_SOURCE";
pub const ENV_PAGE_SIZE: &str = "RESOURCE_DB_PAGE_SIZE";
pub const ENV_TAG_COLUMN: &str = "RESOURCE_DB_TAG_COLUMN";

/// Engine settings. Every field has a default, so an empty JSON object is a
/// valid config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// CSV file holding the resources.
    pub source: PathBuf,
    /// Rows per page.
    pub page_size: usize,
    /// Column whose comma-separated values are the tags.
    pub tag_column: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("resources.csv"),
            page_size: DEFAULT_PAGE_SIZE,
            tag_column: COL_KEYWORDS.to_string(),
        }
    }
}

impl EngineConfig {
    /// Read a JSON config file. Fields it leaves out keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `RESOURCE_DB_*` overrides from the process environment.
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps an env var name to its value.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(source) = lookup(ENV_SOURCE) {
            self.source = PathBuf::from(source);
        }
        if let Some(size) = lookup(ENV_PAGE_SIZE) {
            self.page_size = size.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{ENV_PAGE_SIZE}={size:?} is not a number"))
            })?;
        }
        if let Some(col) = lookup(ENV_TAG_COLUMN) {
            self.tag_column = col;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".into()));
        }
        if self.tag_column.trim().is_empty() {
            return Err(ConfigError::Invalid("tag_column must not be empty".into()));
        }
        Ok(())
    }

    /// Optional file, then env overrides, then validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(p) => Self::from_json_file(p)?,
            None => Self::default(),
        }
        .with_env()?;
        config.validate()?;
        Ok(config)
    }
}
