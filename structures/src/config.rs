//! Settings for the demonstration runner.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::data_structures::hash_table::DEFAULT_BUCKETS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Bucket count of the demo hash table.
    pub bucket_count: usize,
    /// Whether the demo graph is directed.
    pub directed: bool,
    /// Values fed to the binary tree, in insertion order.
    pub tree_values: Vec<i64>,
    pub expressions: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKETS,
            directed: false,
            tree_values: (1..=10).collect(),
            expressions: [
                "3 + 4",
                "3 + 4 * 2",
                "(3 + 4) * 2",
                "10 / (2 + 3)",
                "3.5 + 2.5 * 2",
                "10 / 0",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl DemoConfig {
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }
}
