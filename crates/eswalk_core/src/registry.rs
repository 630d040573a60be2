//! Schema registry: node type tag to ordered child fields.
//!
//! The standard ESTree table lives in [`NodeType::child_keys`]. A registry
//! layers extension entries (JSX, TypeScript, experimental proposals) over
//! that table. Extension entries take precedence, so a standard entry can be
//! overridden as well. Once built, a registry is immutable.

use std::collections::HashMap;
use std::sync::OnceLock;

use eswalk_ast::NodeType;
use tracing::debug;

static STANDARD: OnceLock<SchemaRegistry> = OnceLock::new();

/// Maps node type tags to the child fields visited for them.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    extensions: HashMap<String, Vec<String>>,
}

/// Ordered child fields of one registry entry.
#[derive(Debug, Clone, Copy)]
pub enum Fields<'r> {
    /// Entry from the standard ESTree table.
    Standard(&'static [&'static str]),
    /// Entry added through [`RegistryBuilder`].
    Extension(&'r [String]),
}

impl<'r> Fields<'r> {
    /// Number of child fields.
    pub fn len(&self) -> usize {
        match self {
            Fields::Standard(keys) => keys.len(),
            Fields::Extension(keys) => keys.len(),
        }
    }

    /// Returns true if the entry has no child fields.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the field name at `index`.
    pub fn get(&self, index: usize) -> Option<&'r str> {
        match *self {
            Fields::Standard(keys) => keys.get(index).copied(),
            Fields::Extension(keys) => keys.get(index).map(String::as_str),
        }
    }

    /// Iterates over field names in traversal order.
    pub fn iter(self) -> impl DoubleEndedIterator<Item = &'r str> + ExactSizeIterator + 'r {
        (0..self.len()).map(move |i| self.get(i).unwrap_or_default())
    }

    /// Collects field names into a vector.
    pub fn to_vec(self) -> Vec<&'r str> {
        self.iter().collect()
    }
}

impl SchemaRegistry {
    /// Returns the process-wide registry holding only the standard table.
    pub fn standard() -> &'static SchemaRegistry {
        STANDARD.get_or_init(|| {
            debug!(
                "Initialized standard schema registry ({} node types)",
                NodeType::ALL.len()
            );
            SchemaRegistry::default()
        })
    }

    /// Starts building a registry with extension entries.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Returns the child fields for `node_type`, or `None` if the type is unknown.
    ///
    /// A known type with no children returns an empty [`Fields`], which is
    /// distinct from `None`.
    pub fn fields_for(&self, node_type: &str) -> Option<Fields<'_>> {
        if let Some(keys) = self.extensions.get(node_type) {
            return Some(Fields::Extension(keys));
        }
        node_type
            .parse::<NodeType>()
            .ok()
            .map(|known| Fields::Standard(known.child_keys()))
    }

    /// Returns true if `node_type` has an entry.
    pub fn contains(&self, node_type: &str) -> bool {
        self.fields_for(node_type).is_some()
    }

    /// Number of distinct node types with an entry.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        let added = self
            .extensions
            .keys()
            .filter(|name| name.parse::<NodeType>().is_err())
            .count();
        NodeType::ALL.len() + added
    }

    /// Returns every registered type name, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = NodeType::ALL.iter().map(NodeType::as_str).collect();
        names.extend(self.extensions.keys().map(String::as_str));
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Returns true if `node_type` is served by an extension entry.
    pub fn is_extension(&self, node_type: &str) -> bool {
        self.extensions.contains_key(node_type)
    }
}

/// Builder for a [`SchemaRegistry`] with extension entries.
///
/// # Example
///
/// ```rust
/// use eswalk_core::SchemaRegistry;
///
/// let registry = SchemaRegistry::builder()
///     .entry("JSXElement", ["openingElement", "children", "closingElement"])
///     .build();
///
/// assert_eq!(
///     registry.fields_for("JSXElement").unwrap().to_vec(),
///     vec!["openingElement", "children", "closingElement"]
/// );
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    extensions: HashMap<String, Vec<String>>,
}

impl RegistryBuilder {
    /// Adds or replaces the entry for `node_type`.
    pub fn entry<I, S>(mut self, node_type: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions
            .insert(node_type.into(), keys.into_iter().map(Into::into).collect());
        self
    }

    /// Adds every entry from `entries`.
    pub fn entries<I, K>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: Into<String>,
    {
        for (node_type, keys) in entries {
            self.extensions.insert(node_type.into(), keys);
        }
        self
    }

    /// Freezes the registry.
    pub fn build(self) -> SchemaRegistry {
        debug!(
            "Built schema registry with {} extension entries",
            self.extensions.len()
        );
        SchemaRegistry {
            extensions: self.extensions,
        }
    }
}
