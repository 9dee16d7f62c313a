//! Optional YAML configuration file.
//!
//! ```yaml
//! log:
//!   level: info
//!   json: false
//!   components:
//!     topicfoundry-core: debug
//! ddl:
//!   target: clickhouse
//!   schema: chain_data
//! filters:
//!   address_placeholder: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"
//!   topic_placeholder: "null"
//! ```
//!
//! Every key is optional. Command-line flags win over file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use topicfoundry_codegen::{FilterPlaceholders, SqlDialect};
use topicfoundry_observability::LogConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundryConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub ddl: DdlConfig,
    #[serde(default)]
    pub filters: FilterPlaceholders,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DdlConfig {
    /// Default target when `--target` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<SqlDialect>,
    /// PostgreSQL schema namespace
    #[serde(default = "default_schema")]
    pub schema: String,
}

fn default_schema() -> String {
    "public".into()
}

impl Default for DdlConfig {
    fn default() -> Self {
        Self {
            target: None,
            schema: default_schema(),
        }
    }
}

impl FoundryConfig {
    /// Load from `path`, or return defaults when no file was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config file '{}'", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("parse config file '{}'", path.display()))
    }
}
