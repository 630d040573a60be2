//! Enter/leave traces.
//!
//! A [`Trace`] is the ordered list of events produced by one traversal. Its
//! text form has one `"<phase> - <Type>"` line per event:
//!
//! ```text
//! enter - RestElement
//! enter - Identifier
//! leave - Identifier
//! leave - RestElement
//! ```

use std::fmt;

use eswalk_ast::Node;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::TraverseError;
use crate::traverser::Traverser;
use crate::visitor::{Context, VisitAction, Visitor};

/// Whether an event opens or closes a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Enter,
    Leave,
}

impl Phase {
    /// Returns the lowercase name used in rendered traces.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Enter => "enter",
            Phase::Leave => "leave",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One enter or leave event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceEvent {
    pub phase: Phase,
    #[serde(rename = "type")]
    pub node_type: String,
}

impl TraceEvent {
    pub fn enter(node_type: impl Into<String>) -> Self {
        Self {
            phase: Phase::Enter,
            node_type: node_type.into(),
        }
    }

    pub fn leave(node_type: impl Into<String>) -> Self {
        Self {
            phase: Phase::Leave,
            node_type: node_type.into(),
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.phase, self.node_type)
    }
}

/// Error returned by [`Trace::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid trace line {line}: `{text}`")]
pub struct TraceParseError {
    /// 1-based line number in the input.
    pub line: usize,
    /// The offending line, trimmed.
    pub text: String,
}

/// An ordered sequence of trace events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Traverses `root` with the standard registry in strict mode and records the trace.
    pub fn dump<N: Node>(root: &N) -> Result<Self, TraverseError> {
        Self::dump_with(&Traverser::default(), root)
    }

    /// Traverses `root` with `traverser` and records the trace.
    pub fn dump_with<N: Node>(traverser: &Traverser<'_>, root: &N) -> Result<Self, TraverseError> {
        let mut tracer = Tracer::new();
        traverser.traverse(root, &mut tracer)?;
        Ok(tracer.into_trace())
    }

    /// Parses the text form of a trace.
    ///
    /// Blank lines and surrounding whitespace are ignored, so an expected
    /// trace can be written as an indented block.
    pub fn parse(text: &str) -> Result<Self, TraceParseError> {
        let mut events = Vec::new();
        for (i, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let invalid = || TraceParseError {
                line: i + 1,
                text: line.to_string(),
            };
            let (phase, node_type) = line.split_once(" - ").ok_or_else(invalid)?;
            let phase = match phase.trim() {
                "enter" => Phase::Enter,
                "leave" => Phase::Leave,
                _ => return Err(invalid()),
            };
            let node_type = node_type.trim();
            if node_type.is_empty() || node_type.contains(char::is_whitespace) {
                return Err(invalid());
            }
            events.push(TraceEvent {
                phase,
                node_type: node_type.to_string(),
            });
        }
        Ok(Self { events })
    }

    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of nodes entered.
    pub fn node_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| event.phase == Phase::Enter)
            .count()
    }

    /// Returns true if every enter is closed by a matching leave, properly nested.
    pub fn is_well_nested(&self) -> bool {
        let mut open: Vec<&str> = Vec::new();
        for event in &self.events {
            match event.phase {
                Phase::Enter => open.push(&event.node_type),
                Phase::Leave => {
                    if open.pop() != Some(event.node_type.as_str()) {
                        return false;
                    }
                }
            }
        }
        open.is_empty()
    }

    /// Renders the trace, one event per line, without a trailing newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", event)?;
        }
        Ok(())
    }
}

impl FromIterator<TraceEvent> for Trace {
    fn from_iter<I: IntoIterator<Item = TraceEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEvent;
    type IntoIter = std::slice::Iter<'a, TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Visitor that records every event into a [`Trace`].
#[derive(Debug, Default)]
pub struct Tracer {
    trace: Trace,
}

impl Tracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn into_trace(self) -> Trace {
        self.trace
    }
}

impl<'t, N: Node + 't> Visitor<'t, N> for Tracer {
    type Error = TraverseError;

    fn enter(&mut self, _node: &'t N, ctx: &Context<'_, 't, N>) -> Result<VisitAction, Self::Error> {
        self.trace.push(TraceEvent::enter(ctx.node_type()));
        Ok(VisitAction::Continue)
    }

    fn leave(&mut self, _node: &'t N, ctx: &Context<'_, 't, N>) -> Result<VisitAction, Self::Error> {
        self.trace.push(TraceEvent::leave(ctx.node_type()));
        Ok(VisitAction::Continue)
    }
}
