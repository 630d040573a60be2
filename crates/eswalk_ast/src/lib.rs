//! # eswalk_ast
//!
//! ESTree node model for eswalk.
//!
//! This crate provides:
//! - [`NodeType`], the closed set of standard ESTree node kinds together with
//!   the child fields the traverser visits for each kind
//! - The [`Node`] trait, the minimal capability a tree must expose to be walked
//! - A [`Node`] implementation for `serde_json::Value`, so parser output can be
//!   traversed without conversion
//!
//! ## Example
//!
//! ```rust
//! use eswalk_ast::NodeType;
//!
//! let node_type: NodeType = "ClassDeclaration".parse().unwrap();
//! assert_eq!(node_type.child_keys(), &["id", "superClass", "body"]);
//! assert!(NodeType::Super.is_leaf());
//! ```

mod node;
mod node_type;

pub use node::{Node, NodeValue};
pub use node_type::{NodeType, ParseNodeTypeError};
