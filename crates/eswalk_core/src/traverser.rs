//! Schema-driven depth-first traversal.
//!
//! The walk uses an explicit work stack instead of native recursion, so the
//! depth of the tree is bounded only by memory. Each node occupies two
//! stack entries: one for entering it and one for leaving it.
//!
//! Traversal order:
//! 1. `enter` is called for the node
//! 2. Child fields are visited in registry order; list fields in index order
//! 3. `leave` is called for the node
//!
//! Null fields and null list elements produce no events.

use eswalk_ast::{Node, NodeValue};
use tracing::{debug, warn};

use crate::config::{TraverseConfig, UnknownTypePolicy};
use crate::error::TraverseError;
use crate::registry::SchemaRegistry;
use crate::visitor::{Context, Outcome, VisitAction, Visitor};

/// Walks ESTree-shaped trees using a [`SchemaRegistry`].
///
/// A `Traverser` holds no per-traversal state and can be shared between
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct Traverser<'r> {
    registry: &'r SchemaRegistry,
    unknown_types: UnknownTypePolicy,
    max_depth: Option<usize>,
}

impl Default for Traverser<'static> {
    fn default() -> Self {
        Self::new(SchemaRegistry::standard())
    }
}

enum Frame<'t, 'r, N> {
    Enter {
        node: &'t N,
        key: Option<&'r str>,
        index: Option<usize>,
    },
    Leave {
        node: &'t N,
        node_type: &'t str,
        key: Option<&'r str>,
        index: Option<usize>,
    },
}

type Step<'r> = (Option<&'r str>, Option<usize>);

impl<'r> Traverser<'r> {
    /// Creates a strict traverser over `registry`.
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self {
            registry,
            unknown_types: UnknownTypePolicy::Strict,
            max_depth: None,
        }
    }

    /// Creates a traverser with the policy and depth limit from `config`.
    ///
    /// Extra keys in `config` are not applied here; build the registry with
    /// [`TraverseConfig::registry`] for that.
    pub fn with_config(registry: &'r SchemaRegistry, config: &TraverseConfig) -> Self {
        Self {
            registry,
            unknown_types: config.unknown_types,
            max_depth: config.max_depth,
        }
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

    /// Sets the maximum nesting depth. The root is at depth 0.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// The registry used to resolve child fields.
    pub fn registry(&self) -> &'r SchemaRegistry {
        self.registry
    }

    /// The active unknown-type policy.
    pub fn policy(&self) -> UnknownTypePolicy {
        self.unknown_types
    }

    /// Visits `root` and every node reachable from it.
    ///
    /// A null root produces no events. Engine errors abort the traversal and
    /// are converted into the visitor's error type; errors returned by the
    /// visitor are passed through unchanged.
    pub fn traverse<'t, N, V>(&self, root: &'t N, visitor: &mut V) -> Result<Outcome, V::Error>
    where
        N: Node + 't,
        V: Visitor<'t, N> + ?Sized,
    {
        if root.is_null() {
            return Ok(Outcome::Completed);
        }

        let mut stack: Vec<Frame<'t, 'r, N>> = vec![Frame::Enter {
            node: root,
            key: None,
            index: None,
        }];
        let mut parents: Vec<&'t N> = Vec::new();
        let mut steps: Vec<Step<'r>> = Vec::new();
        let mut visited = 0usize;

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter { node, key, index } => {
                    let Some(node_type) = node.node_type() else {
                        return Err(TraverseError::MalformedNode {
                            path: render_path(&steps, key, index),
                        }
                        .into());
                    };

                    if let Some(limit) = self.max_depth
                        && parents.len() > limit
                    {
                        return Err(TraverseError::DepthLimitExceeded {
                            limit,
                            path: render_path(&steps, key, index),
                        }
                        .into());
                    }

                    let fields = match self.registry.fields_for(node_type) {
                        Some(fields) => Some(fields),
                        None => match self.unknown_types {
                            UnknownTypePolicy::Strict => {
                                return Err(TraverseError::UnknownNodeType {
                                    node_type: node_type.to_string(),
                                    path: render_path(&steps, key, index),
                                }
                                .into());
                            }
                            UnknownTypePolicy::Lenient => {
                                warn!(
                                    "Unknown node type `{}` at {}; visiting without children",
                                    node_type,
                                    render_path(&steps, key, index)
                                );
                                None
                            }
                        },
                    };

                    let ctx = Context {
                        parents: &parents,
                        key,
                        index,
                        node_type,
                    };
                    let action = visitor.enter(node, &ctx)?;
                    visited += 1;
                    if action == VisitAction::Break {
                        debug!("Traversal stopped in enter after {} nodes", visited);
                        return Ok(Outcome::Stopped);
                    }

                    stack.push(Frame::Leave {
                        node,
                        node_type,
                        key,
                        index,
                    });
                    parents.push(node);
                    steps.push((key, index));

                    if action == VisitAction::Skip {
                        continue;
                    }

                    // Pushed in reverse so the first field is popped first.
                    for field in fields.into_iter().flat_map(|f| f.iter()).rev() {
                        push_children(&mut stack, node.field(field), field);
                    }
                }
                Frame::Leave {
                    node,
                    node_type,
                    key,
                    index,
                } => {
                    parents.pop();
                    steps.pop();

                    let ctx = Context {
                        parents: &parents,
                        key,
                        index,
                        node_type,
                    };
                    if visitor.leave(node, &ctx)? == VisitAction::Break {
                        debug!("Traversal stopped in leave after {} nodes", visited);
                        return Ok(Outcome::Stopped);
                    }
                }
            }
        }

        debug!("Traversal completed: {} nodes", visited);
        Ok(Outcome::Completed)
    }
}

fn push_children<'t, 'r, N>(
    stack: &mut Vec<Frame<'t, 'r, N>>,
    value: NodeValue<'t, N>,
    field: &'r str,
) {
    match value {
        NodeValue::Absent | NodeValue::Scalar => {}
        NodeValue::Node(child) => stack.push(Frame::Enter {
            node: child,
            key: Some(field),
            index: None,
        }),
        NodeValue::Sequence(items) => {
            for (i, item) in items.into_iter().enumerate().rev() {
                // Holes, scalars and nested lists are not nodes.
                if let NodeValue::Node(child) = item {
                    stack.push(Frame::Enter {
                        node: child,
                        key: Some(field),
                        index: Some(i),
                    });
                }
            }
        }
    }
}

fn render_path(steps: &[Step<'_>], key: Option<&str>, index: Option<usize>) -> String {
    let mut path = String::new();
    for (key, index) in steps.iter().copied().chain(std::iter::once((key, index))) {
        if let Some(key) = key {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(key);
        }
        if let Some(index) = index {
            path.push_str(&format!("[{index}]"));
        }
    }
    if path.is_empty() {
        path.push_str("<root>");
    }
    path
}

/// Visits `root` with the standard registry in strict mode.
pub fn traverse<'t, N, V>(root: &'t N, visitor: &mut V) -> Result<Outcome, V::Error>
where
    N: Node + 't,
    V: Visitor<'t, N> + ?Sized,
{
    Traverser::default().traverse(root, visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::visitor::Callbacks;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    /// Records `enter:Type` / `leave:Type` strings.
    #[derive(Default)]
    struct HookTracker {
        events: Vec<String>,
    }

    impl<'t> Visitor<'t, Value> for HookTracker {
        type Error = TraverseError;

        fn enter(&mut self, _node: &'t Value, ctx: &Context<'_, 't, Value>) -> Result<VisitAction, Self::Error> {
            self.events.push(format!("enter:{}", ctx.node_type()));
            Ok(VisitAction::Continue)
        }

        fn leave(&mut self, _node: &'t Value, ctx: &Context<'_, 't, Value>) -> Result<VisitAction, Self::Error> {
            self.events.push(format!("leave:{}", ctx.node_type()));
            Ok(VisitAction::Continue)
        }
    }

    fn events(tree: &Value) -> Vec<String> {
        let mut tracker = HookTracker::default();
        traverse(tree, &mut tracker).unwrap();
        tracker.events
    }

    #[test]
    fn test_leaf_node_emits_enter_and_leave() {
        assert_eq!(events(&json!({ "type": "Super" })), vec!["enter:Super", "leave:Super"]);
    }

    #[test]
    fn test_null_root_emits_nothing() {
        assert!(events(&Value::Null).is_empty());
    }

    #[test]
    fn test_fields_follow_registry_order() {
        // JSON key order is deliberately reversed relative to the schema.
        let tree = json!({
            "right": { "type": "Literal", "value": 1 },
            "left": { "type": "Identifier", "name": "a" },
            "operator": "=",
            "type": "AssignmentExpression"
        });

        assert_eq!(
            events(&tree),
            vec![
                "enter:AssignmentExpression",
                "enter:Identifier",
                "leave:Identifier",
                "enter:Literal",
                "leave:Literal",
                "leave:AssignmentExpression",
            ]
        );
    }

    #[test]
    fn test_sequence_holes_are_skipped() {
        let tree = json!({
            "type": "ArrayPattern",
            "elements": [
                null,
                { "type": "Identifier", "name": "b" },
                null,
                { "type": "RestElement", "argument": { "type": "Identifier", "name": "c" } }
            ]
        });

        assert_eq!(
            events(&tree),
            vec![
                "enter:ArrayPattern",
                "enter:Identifier",
                "leave:Identifier",
                "enter:RestElement",
                "enter:Identifier",
                "leave:Identifier",
                "leave:RestElement",
                "leave:ArrayPattern",
            ]
        );
    }

    #[test]
    fn test_fields_outside_schema_are_ignored() {
        let tree = json!({
            "type": "Literal",
            "value": "x",
            "regex": { "pattern": "a", "flags": "g" },
            "extra": { "type": "Identifier", "name": "ignored" }
        });

        assert_eq!(events(&tree), vec!["enter:Literal", "leave:Literal"]);
    }

    #[test]
    fn test_missing_type_is_malformed() {
        let tree = json!({
            "type": "Program",
            "body": [
                { "type": "EmptyStatement" },
                { "type": "ExpressionStatement", "expression": { "name": "x" } }
            ]
        });

        let mut tracker = HookTracker::default();
        let err = traverse(&tree, &mut tracker).unwrap_err();
        assert_eq!(
            err,
            TraverseError::MalformedNode {
                path: "body[1].expression".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_type_strict() {
        let tree = json!({
            "type": "ExpressionStatement",
            "expression": { "type": "JSXElement", "children": [] }
        });

        let mut tracker = HookTracker::default();
        let err = traverse(&tree, &mut tracker).unwrap_err();
        assert_eq!(
            err,
            TraverseError::UnknownNodeType {
                node_type: "JSXElement".to_string(),
                path: "expression".to_string()
            }
        );
        // The parent was entered before the failure; nothing was left.
        assert_eq!(tracker.events, vec!["enter:ExpressionStatement"]);
    }

    #[test]
    fn test_unknown_type_lenient() {
        let tree = json!({
            "type": "ExpressionStatement",
            "expression": {
                "type": "JSXElement",
                "children": [{ "type": "Identifier", "name": "hidden" }]
            }
        });

        let mut tracker = HookTracker::default();
        let outcome = Traverser::default()
            .lenient()
            .traverse(&tree, &mut tracker)
            .unwrap();

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(
            tracker.events,
            vec![
                "enter:ExpressionStatement",
                "enter:JSXElement",
                "leave:JSXElement",
                "leave:ExpressionStatement",
            ]
        );
    }

    #[test]
    fn test_extension_keys() {
        let registry = SchemaRegistry::builder()
            .entry("JSXElement", ["children"])
            .build();
        let tree = json!({
            "type": "JSXElement",
            "children": [{ "type": "Identifier", "name": "shown" }]
        });

        let mut tracker = HookTracker::default();
        Traverser::new(&registry).traverse(&tree, &mut tracker).unwrap();

        assert_eq!(
            tracker.events,
            vec!["enter:JSXElement", "enter:Identifier", "leave:Identifier", "leave:JSXElement"]
        );
    }

    #[test]
    fn test_skip_children_still_leaves() {
        let tree = json!({
            "type": "Program",
            "body": [
                {
                    "type": "ExpressionStatement",
                    "expression": { "type": "Identifier", "name": "skipped" }
                },
                { "type": "EmptyStatement" }
            ]
        });

        let mut entered = Vec::new();
        let mut left = Vec::new();
        let mut visitor = Callbacks::new(
            |node: &Value, _ctx: &Context<'_, '_, Value>| {
                let node_type = node.node_type().unwrap_or_default().to_string();
                let action = if node_type == "ExpressionStatement" {
                    VisitAction::Skip
                } else {
                    VisitAction::Continue
                };
                entered.push(node_type);
                action
            },
            |node: &Value, _ctx: &Context<'_, '_, Value>| {
                left.push(node.node_type().unwrap_or_default().to_string());
                VisitAction::Continue
            },
        );
        let outcome = traverse(&tree, &mut visitor).unwrap();
        drop(visitor);

        assert_eq!(outcome, Outcome::Completed);
        assert_eq!(entered, vec!["Program", "ExpressionStatement", "EmptyStatement"]);
        assert_eq!(left, vec!["ExpressionStatement", "EmptyStatement", "Program"]);
    }

    #[test]
    fn test_break_stops_immediately() {
        let tree = json!({
            "type": "Program",
            "body": [
                { "type": "DebuggerStatement" },
                { "type": "EmptyStatement" }
            ]
        });

        let seen = RefCell::new(Vec::new());
        let mut visitor = Callbacks::new(
            |node: &Value, _ctx: &Context<'_, '_, Value>| {
                let node_type = node.node_type().unwrap_or_default().to_string();
                seen.borrow_mut().push(format!("enter:{}", node_type));
                if node_type == "DebuggerStatement" {
                    VisitAction::Break
                } else {
                    VisitAction::Continue
                }
            },
            |node: &Value, _ctx: &Context<'_, '_, Value>| {
                seen.borrow_mut()
                    .push(format!("leave:{}", node.node_type().unwrap_or_default()));
                VisitAction::Continue
            },
        );
        let outcome = traverse(&tree, &mut visitor).unwrap();
        drop(visitor);

        assert_eq!(outcome, Outcome::Stopped);
        assert!(!outcome.is_completed());
        assert_eq!(seen.into_inner(), vec!["enter:Program", "enter:DebuggerStatement"]);
    }

    #[test]
    fn test_break_from_leave_stops_before_parent_leaves() {
        let tree = json!({
            "type": "Program",
            "body": [
                { "type": "DebuggerStatement" },
                { "type": "EmptyStatement" }
            ]
        });

        struct BreakOnLeave {
            events: Vec<String>,
        }

        impl<'t> Visitor<'t, Value> for BreakOnLeave {
            type Error = TraverseError;

            fn enter(&mut self, _node: &'t Value, ctx: &Context<'_, 't, Value>) -> Result<VisitAction, Self::Error> {
                self.events.push(format!("enter:{}", ctx.node_type()));
                Ok(VisitAction::Continue)
            }

            fn leave(&mut self, _node: &'t Value, ctx: &Context<'_, 't, Value>) -> Result<VisitAction, Self::Error> {
                self.events.push(format!("leave:{}", ctx.node_type()));
                if ctx.node_type() == "DebuggerStatement" {
                    return Ok(VisitAction::Break);
                }
                Ok(VisitAction::Continue)
            }
        }

        let mut visitor = BreakOnLeave { events: Vec::new() };
        let outcome = traverse(&tree, &mut visitor).unwrap();

        assert_eq!(outcome, Outcome::Stopped);
        assert_eq!(
            visitor.events,
            vec!["enter:Program", "enter:DebuggerStatement", "leave:DebuggerStatement"]
        );
    }

    #[test]
    fn test_context_tracks_parents_and_keys() {
        let tree = json!({
            "type": "ImportDeclaration",
            "specifiers": [
                {
                    "type": "ImportSpecifier",
                    "imported": { "type": "Identifier", "name": "Cappuccino" },
                    "local": { "type": "Identifier", "name": "Chino" }
                }
            ],
            "source": { "type": "Literal", "value": "rabbit-house" }
        });

        let mut seen = Vec::new();
        let mut visitor = Callbacks::new(
            |_node: &Value, ctx: &Context<'_, '_, Value>| {
                let parents: Vec<&str> = ctx
                    .parents()
                    .iter()
                    .map(|p| p.node_type().unwrap_or_default())
                    .collect();
                seen.push(format!(
                    "{} key={:?} index={:?} depth={} parents={:?}",
                    ctx.node_type(),
                    ctx.key(),
                    ctx.index(),
                    ctx.depth(),
                    parents
                ));
                VisitAction::Continue
            },
            |_node: &Value, _ctx: &Context<'_, '_, Value>| VisitAction::Continue,
        );
        traverse(&tree, &mut visitor).unwrap();
        drop(visitor);

        assert_eq!(
            seen,
            vec![
                r#"ImportDeclaration key=None index=None depth=0 parents=[]"#,
                r#"ImportSpecifier key=Some("specifiers") index=Some(0) depth=1 parents=["ImportDeclaration"]"#,
                r#"Identifier key=Some("imported") index=None depth=2 parents=["ImportDeclaration", "ImportSpecifier"]"#,
                r#"Identifier key=Some("local") index=None depth=2 parents=["ImportDeclaration", "ImportSpecifier"]"#,
                r#"Literal key=Some("source") index=None depth=1 parents=["ImportDeclaration"]"#,
            ]
        );
    }

    #[test]
    fn test_leave_context_matches_enter() {
        let tree = json!({
            "type": "RestElement",
            "argument": { "type": "Identifier", "name": "hello" }
        });

        let mut seen = Vec::new();
        let mut visitor = Callbacks::new(
            |_node: &Value, _ctx: &Context<'_, '_, Value>| VisitAction::Continue,
            |_node: &Value, ctx: &Context<'_, '_, Value>| {
                seen.push((ctx.node_type().to_string(), ctx.key().map(str::to_string), ctx.depth()));
                VisitAction::Continue
            },
        );
        traverse(&tree, &mut visitor).unwrap();
        drop(visitor);

        assert_eq!(
            seen,
            vec![
                ("Identifier".to_string(), Some("argument".to_string()), 1),
                ("RestElement".to_string(), None, 0),
            ]
        );
    }

    #[test]
    fn test_depth_limit() {
        let tree = json!({
            "type": "ExpressionStatement",
            "expression": {
                "type": "UnaryExpression",
                "argument": { "type": "Identifier", "name": "x" }
            }
        });

        let mut tracker = HookTracker::default();
        let err = Traverser::default()
            .max_depth(1)
            .traverse(&tree, &mut tracker)
            .unwrap_err();
        assert_eq!(
            err,
            TraverseError::DepthLimitExceeded {
                limit: 1,
                path: "expression.argument".to_string()
            }
        );

        let mut tracker = HookTracker::default();
        let outcome = Traverser::default()
            .max_depth(2)
            .traverse(&tree, &mut tracker)
            .unwrap();
        assert_eq!(outcome, Outcome::Completed);
    }

    #[derive(Debug, PartialEq)]
    enum CheckError {
        Engine(TraverseError),
        ForbiddenWith,
    }

    impl From<TraverseError> for CheckError {
        fn from(err: TraverseError) -> Self {
            CheckError::Engine(err)
        }
    }

    /// Fails on the first `with` statement.
    struct NoWith {
        entered: usize,
    }

    impl<'t> Visitor<'t, Value> for NoWith {
        type Error = CheckError;

        fn enter(&mut self, _node: &'t Value, ctx: &Context<'_, 't, Value>) -> Result<VisitAction, Self::Error> {
            self.entered += 1;
            if ctx.node_type() == "WithStatement" {
                return Err(CheckError::ForbiddenWith);
            }
            Ok(VisitAction::Continue)
        }
    }

    #[test]
    fn test_visitor_error_passes_through() {
        let tree = json!({
            "type": "Program",
            "body": [
                {
                    "type": "WithStatement",
                    "object": { "type": "Identifier", "name": "o" },
                    "body": { "type": "EmptyStatement" }
                },
                { "type": "EmptyStatement" }
            ]
        });

        let mut visitor = NoWith { entered: 0 };
        let err = traverse(&tree, &mut visitor).unwrap_err();
        assert_eq!(err, CheckError::ForbiddenWith);
        assert_eq!(visitor.entered, 2);
    }

    #[test]
    fn test_engine_error_converts_into_visitor_error() {
        let tree = json!({ "type": "Program", "body": [{ "type": "Mystery" }] });

        let mut visitor = NoWith { entered: 0 };
        let err = traverse(&tree, &mut visitor).unwrap_err();
        assert_eq!(
            err,
            CheckError::Engine(TraverseError::UnknownNodeType {
                node_type: "Mystery".to_string(),
                path: "body[0]".to_string()
            })
        );
    }

    #[test]
    fn test_render_path() {
        assert_eq!(render_path(&[], None, None), "<root>");
        assert_eq!(
            render_path(&[(None, None), (Some("body"), Some(0))], Some("declaration"), None),
            "body[0].declaration"
        );
        assert_eq!(
            render_path(
                &[(None, None), (Some("body"), Some(12)), (Some("expression"), None)],
                Some("arguments"),
                Some(3)
            ),
            "body[12].expression.arguments[3]"
        );
    }

    #[test]
    fn test_visitor_by_mutable_reference() {
        let tree = json!({ "type": "ThisExpression" });
        let mut tracker = HookTracker::default();
        {
            let mut by_ref = &mut tracker;
            traverse(&tree, &mut by_ref).unwrap();
        }
        assert_eq!(tracker.events, vec!["enter:ThisExpression", "leave:ThisExpression"]);
    }
}
