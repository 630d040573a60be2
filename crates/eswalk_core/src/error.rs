//! Traversal and configuration error types.

use thiserror::Error;

/// Errors raised by the traversal engine itself.
///
/// Visitor errors never pass through this type; they reach the caller of
/// [`Traverser::traverse`](crate::Traverser::traverse) as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraverseError {
    /// A visited value has no usable `type` tag.
    #[error("malformed node at {path}: missing `type` tag")]
    MalformedNode {
        /// Location of the value, e.g. `body[0].declaration`.
        path: String,
    },

    /// A `type` tag has no schema entry and the policy is strict.
    #[error("unknown node type `{node_type}` at {path}")]
    UnknownNodeType {
        /// The unresolved tag.
        node_type: String,
        /// Location of the node.
        path: String,
    },

    /// The tree is nested deeper than the configured limit.
    #[error("depth limit of {limit} exceeded at {path}")]
    DepthLimitExceeded {
        /// The configured maximum depth.
        limit: usize,
        /// Location of the first node beyond the limit.
        path: String,
    },
}

impl TraverseError {
    /// Returns the location of the offending node.
    pub fn path(&self) -> &str {
        match self {
            TraverseError::MalformedNode { path }
            | TraverseError::UnknownNodeType { path, .. }
            | TraverseError::DepthLimitExceeded { path, .. } => path,
        }
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON or JSONC.
    #[error("Invalid JSON: {0}")]
    Syntax(String),

    /// The configuration does not match the schema.
    #[error("Config validation failed: {0}")]
    Validation(String),

    /// The configuration could not be deserialized.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TraverseError::MalformedNode {
            path: "body[0]".to_string(),
        };
        insta::assert_snapshot!(err.to_string(), @"malformed node at body[0]: missing `type` tag");

        let err = TraverseError::UnknownNodeType {
            node_type: "JSXElement".to_string(),
            path: "<root>".to_string(),
        };
        insta::assert_snapshot!(err.to_string(), @"unknown node type `JSXElement` at <root>");
    }

    #[test]
    fn test_path_accessor() {
        let err = TraverseError::DepthLimitExceeded {
            limit: 2,
            path: "body[0].expression".to_string(),
        };
        assert_eq!(err.path(), "body[0].expression");
    }
}
