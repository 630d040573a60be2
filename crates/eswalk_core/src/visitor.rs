//! Visitor trait and traversal context.
//!
//! A visitor observes the walk through two hooks, [`Visitor::enter`] and
//! [`Visitor::leave`]. Both default to doing nothing, so a visitor only
//! overrides the hooks it needs.
//!
//! # Example
//!
//! ```rust
//! use eswalk_core::{Context, TraverseError, VisitAction, Visitor, traverse};
//! use serde_json::{Value, json};
//!
//! /// Counts identifiers, ignoring anything inside a class body.
//! struct IdentifierCounter {
//!     count: usize,
//! }
//!
//! impl<'t> Visitor<'t, Value> for IdentifierCounter {
//!     type Error = TraverseError;
//!
//!     fn enter(
//!         &mut self,
//!         _node: &'t Value,
//!         ctx: &Context<'_, 't, Value>,
//!     ) -> Result<VisitAction, Self::Error> {
//!         match ctx.node_type() {
//!             "ClassBody" => Ok(VisitAction::Skip),
//!             "Identifier" => {
//!                 self.count += 1;
//!                 Ok(VisitAction::Continue)
//!             }
//!             _ => Ok(VisitAction::Continue),
//!         }
//!     }
//! }
//!
//! let tree = json!({
//!     "type": "AssignmentPattern",
//!     "left": { "type": "Identifier", "name": "hello" },
//!     "right": { "type": "Literal", "value": "world" }
//! });
//!
//! let mut counter = IdentifierCounter { count: 0 };
//! traverse(&tree, &mut counter).unwrap();
//! assert_eq!(counter.count, 1);
//! ```

use std::marker::PhantomData;

use eswalk_ast::Node;

use crate::error::TraverseError;

/// What the traverser should do after a hook returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisitAction {
    /// Keep going.
    #[default]
    Continue,
    /// From `enter`: do not descend into this node's children. `leave` is
    /// still called for the node. From `leave`: same as `Continue`.
    Skip,
    /// Stop the traversal. No further hooks are called.
    Break,
}

/// How a traversal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every reachable node was entered and left.
    Completed,
    /// A hook returned [`VisitAction::Break`].
    Stopped,
}

impl Outcome {
    /// Returns true if the traversal ran to completion.
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

/// Where the current node sits in the tree.
#[derive(Debug)]
pub struct Context<'c, 't, N> {
    pub(crate) parents: &'c [&'t N],
    pub(crate) key: Option<&'c str>,
    pub(crate) index: Option<usize>,
    pub(crate) node_type: &'t str,
}

impl<'c, 't, N> Context<'c, 't, N> {
    /// Ancestors of the current node, root first. Does not include the node itself.
    #[inline]
    pub fn parents(&self) -> &'c [&'t N] {
        self.parents
    }

    /// The direct parent, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<&'t N> {
        self.parents.last().copied()
    }

    /// Nesting depth. The root is at depth 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// Field of the parent through which this node was reached.
    #[inline]
    pub fn key(&self) -> Option<&'c str> {
        self.key
    }

    /// Position within the parent's field when that field is a list.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The node's `type` tag.
    #[inline]
    pub fn node_type(&self) -> &'t str {
        self.node_type
    }
}

/// Receives enter and leave events from a [`Traverser`](crate::Traverser).
///
/// Engine failures are converted into `Self::Error`, so a visitor's own
/// errors come back to the caller exactly as the visitor produced them.
/// Visitors that never fail can use [`TraverseError`] directly.
pub trait Visitor<'t, N: Node + 't> {
    /// Error type returned by hooks and by the traversal.
    type Error: From<TraverseError>;

    /// Called before any of the node's children are visited.
    #[inline]
    fn enter(
        &mut self,
        _node: &'t N,
        _ctx: &Context<'_, 't, N>,
    ) -> Result<VisitAction, Self::Error> {
        Ok(VisitAction::Continue)
    }

    /// Called after all of the node's children have been visited.
    #[inline]
    fn leave(
        &mut self,
        _node: &'t N,
        _ctx: &Context<'_, 't, N>,
    ) -> Result<VisitAction, Self::Error> {
        Ok(VisitAction::Continue)
    }
}

impl<'t, N, V> Visitor<'t, N> for &mut V
where
    N: Node + 't,
    V: Visitor<'t, N> + ?Sized,
{
    type Error = V::Error;

    #[inline]
    fn enter(&mut self, node: &'t N, ctx: &Context<'_, 't, N>) -> Result<VisitAction, Self::Error> {
        (**self).enter(node, ctx)
    }

    #[inline]
    fn leave(&mut self, node: &'t N, ctx: &Context<'_, 't, N>) -> Result<VisitAction, Self::Error> {
        (**self).leave(node, ctx)
    }
}

/// A visitor built from a pair of closures.
///
/// Both closures are held at once, so they cannot both borrow the same
/// local mutably. A log shared by `enter` and `leave` goes in a `RefCell`
/// (or use a struct implementing [`Visitor`]).
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
///
/// use eswalk_core::{Callbacks, Context, VisitAction, traverse};
/// use serde_json::{Value, json};
///
/// let tree = json!({
///     "type": "RestElement",
///     "argument": { "type": "Identifier", "name": "hello" }
/// });
/// let log = RefCell::new(Vec::new());
///
/// let mut visitor = Callbacks::new(
///     |_node: &Value, ctx: &Context<'_, '_, Value>| {
///         log.borrow_mut().push(format!("enter - {}", ctx.node_type()));
///         VisitAction::Continue
///     },
///     |_node: &Value, ctx: &Context<'_, '_, Value>| {
///         log.borrow_mut().push(format!("leave - {}", ctx.node_type()));
///         VisitAction::Continue
///     },
/// );
/// traverse(&tree, &mut visitor).unwrap();
/// drop(visitor);
///
/// assert_eq!(
///     log.into_inner(),
///     vec![
///         "enter - RestElement",
///         "enter - Identifier",
///         "leave - Identifier",
///         "leave - RestElement",
///     ]
/// );
/// ```
pub struct Callbacks<'t, N, E, L> {
    enter: E,
    leave: L,
    _marker: PhantomData<fn(&'t N)>,
}

impl<'t, N, E, L> Callbacks<'t, N, E, L>
where
    N: Node + 't,
    E: FnMut(&'t N, &Context<'_, 't, N>) -> VisitAction,
    L: FnMut(&'t N, &Context<'_, 't, N>) -> VisitAction,
{
    /// Creates a visitor calling `enter` and `leave` for every node.
    pub fn new(enter: E, leave: L) -> Self {
        Self {
            enter,
            leave,
            _marker: PhantomData,
        }
    }
}

impl<'t, N, E, L> Visitor<'t, N> for Callbacks<'t, N, E, L>
where
    N: Node + 't,
    E: FnMut(&'t N, &Context<'_, 't, N>) -> VisitAction,
    L: FnMut(&'t N, &Context<'_, 't, N>) -> VisitAction,
{
    type Error = TraverseError;

    #[inline]
    fn enter(&mut self, node: &'t N, ctx: &Context<'_, 't, N>) -> Result<VisitAction, Self::Error> {
        Ok((self.enter)(node, ctx))
    }

    #[inline]
    fn leave(&mut self, node: &'t N, ctx: &Context<'_, 't, N>) -> Result<VisitAction, Self::Error> {
        Ok((self.leave)(node, ctx))
    }
}
