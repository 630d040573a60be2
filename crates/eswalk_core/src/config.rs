//! Traversal configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::registry::SchemaRegistry;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Config file names looked up by [`TraverseConfig::discover`], in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".eswalk.jsonc", ".eswalk.json"];

/// How the engine treats a node whose type has no registry entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTypePolicy {
    /// Abort the traversal with [`TraverseError::UnknownNodeType`](crate::TraverseError::UnknownNodeType).
    #[default]
    Strict,
    /// Emit enter/leave for the node and treat it as having no children.
    Lenient,
}

/// Configuration for a [`Traverser`](crate::Traverser).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraverseConfig {
    /// Policy for node types missing from the registry.
    #[serde(default)]
    pub unknown_types: UnknownTypePolicy,

    /// Maximum nesting depth. The root is at depth 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Extra visitor keys by node type, layered over the standard table.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub keys: BTreeMap<String, Vec<String>>,

    /// Directory containing the configuration file, if loaded from disk.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl TraverseConfig {
    /// Creates the default configuration: strict, unlimited depth, no extra keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unknown-type policy.
    pub fn unknown_types(mut self, policy: UnknownTypePolicy) -> Self {
        self.unknown_types = policy;
        self
    }

    /// Shorthand for [`UnknownTypePolicy::Lenient`].
    pub fn lenient(self) -> Self {
        self.unknown_types(UnknownTypePolicy::Lenient)
    }

    /// Sets the maximum depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Adds visitor keys for `node_type`.
    pub fn key<I, S>(mut self, node_type: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys
            .insert(node_type.into(), keys.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if unknown node types are tolerated.
    pub fn is_lenient(&self) -> bool {
        self.unknown_types == UnknownTypePolicy::Lenient
    }

    /// Loads configuration from a file.
    ///
    /// Supports `.eswalk.jsonc` and `.eswalk.json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let mut config = Self::from_json(&content)?;

        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from a JSON (or JSONC) string with schema validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| ConfigError::Syntax(e.to_string()))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        // Initialize and check schema
        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            return Err(ConfigError::Validation(format!(
                "{} at {}",
                e,
                e.instance_path()
            )));
        }

        serde_json::from_value(value).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Finds a configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        let found = CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file());

        if let Some(path) = &found {
            info!("Found config: {}", path.display());
        }
        found
    }

    /// Builds a registry with the configured keys over the standard table.
    pub fn registry(&self) -> SchemaRegistry {
        SchemaRegistry::builder()
            .entries(
                self.keys
                    .iter()
                    .map(|(node_type, keys)| (node_type.clone(), keys.clone())),
            )
            .build()
    }
}
