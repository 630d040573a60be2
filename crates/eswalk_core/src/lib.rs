//! # eswalk_core
//!
//! Schema-driven traversal engine for ESTree syntax trees.
//!
//! This crate provides:
//! - The [`SchemaRegistry`] mapping node types to the child fields visited
//! - The [`Traverser`], an explicit-stack depth-first walker emitting paired
//!   enter/leave events to a [`Visitor`]
//! - [`TraverseConfig`] loading (unknown-type policy, depth limit, extra keys)
//! - [`Trace`] recording and rendering for tests and tooling
//!
//! ## Example
//!
//! ```rust
//! use eswalk_core::Trace;
//! use serde_json::json;
//!
//! let tree = json!({
//!     "type": "AssignmentPattern",
//!     "left": { "type": "Identifier", "name": "hello" },
//!     "right": { "type": "Literal", "value": "world" }
//! });
//!
//! let trace = Trace::dump(&tree).unwrap();
//! assert_eq!(trace.render(), "\
//! enter - AssignmentPattern
//! enter - Identifier
//! leave - Identifier
//! enter - Literal
//! leave - Literal
//! leave - AssignmentPattern");
//! ```

mod config;
mod error;
mod registry;
pub mod trace;
mod traverser;
pub mod visitor;

pub use config::{CONFIG_FILE_NAMES, TraverseConfig, UnknownTypePolicy};
pub use error::{ConfigError, TraverseError};
pub use registry::{Fields, RegistryBuilder, SchemaRegistry};
pub use trace::{Phase, Trace, TraceEvent, TraceParseError, Tracer};
pub use traverser::{Traverser, traverse};
pub use visitor::{Callbacks, Context, Outcome, VisitAction, Visitor};

pub use eswalk_ast::{Node, NodeType, NodeValue};
