//! Node abstraction.
//!
//! The traversal engine never depends on a concrete tree representation.
//! Anything that can report a `type` tag and look up a field by name can be
//! walked, including plain `serde_json::Value` trees as emitted by espree.

use serde_json::Value;

/// A node in an ESTree-shaped syntax tree.
///
/// # Example
///
/// ```rust
/// use eswalk_ast::{Node, NodeValue};
/// use serde_json::json;
///
/// let node = json!({
///     "type": "RestElement",
///     "argument": { "type": "Identifier", "name": "hello" }
/// });
///
/// assert_eq!(node.node_type(), Some("RestElement"));
/// match node.field("argument") {
///     NodeValue::Node(child) => assert_eq!(child.node_type(), Some("Identifier")),
///     _ => panic!("expected a child node"),
/// }
/// ```
pub trait Node {
    /// Returns the `type` tag, or `None` when the node carries no usable tag.
    fn node_type(&self) -> Option<&str>;

    /// Reads the field named `name`.
    ///
    /// Missing fields are reported as [`NodeValue::Absent`].
    fn field(&self, name: &str) -> NodeValue<'_, Self>
    where
        Self: Sized;

    /// Returns true if this value stands for "no node" (e.g. JSON `null`).
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

/// The value of a node field.
#[derive(Debug)]
pub enum NodeValue<'a, N> {
    /// Null or missing.
    Absent,
    /// A single child node.
    Node(&'a N),
    /// An ordered list. `Absent` elements are holes (e.g. `[, a]`).
    Sequence(Vec<NodeValue<'a, N>>),
    /// A string, number or boolean. Never traversed.
    Scalar,
}

impl<'a, N> NodeValue<'a, N> {
    /// Returns true for [`NodeValue::Absent`].
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, NodeValue::Absent)
    }

    /// Returns the child node, if this value is a single node.
    #[inline]
    pub fn as_node(&self) -> Option<&'a N> {
        match self {
            NodeValue::Node(node) => Some(*node),
            _ => None,
        }
    }
}

impl Node for Value {
    fn node_type(&self) -> Option<&str> {
        match self.get("type") {
            Some(Value::String(tag)) if !tag.is_empty() => Some(tag.as_str()),
            _ => None,
        }
    }

    fn field(&self, name: &str) -> NodeValue<'_, Self> {
        match self.get(name) {
            Some(value) => classify(value),
            None => NodeValue::Absent,
        }
    }

    #[inline]
    fn is_null(&self) -> bool {
        Value::is_null(self)
    }
}

fn classify(value: &Value) -> NodeValue<'_, Value> {
    match value {
        Value::Null => NodeValue::Absent,
        Value::Object(_) => NodeValue::Node(value),
        Value::Array(items) => NodeValue::Sequence(items.iter().map(classify).collect()),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => NodeValue::Scalar,
    }
}
