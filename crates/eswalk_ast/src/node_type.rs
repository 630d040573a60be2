//! Node type definitions for ESTree.
//!
//! These types follow the ESTree format as produced by espree, acorn
//! and esprima. See: https://github.com/estree/estree

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Node types for ESTree.
///
/// The serialized form of each variant is its ESTree `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeType {
    // Program
    /// Root of a script or module.
    Program,

    // Identifiers and literals
    /// Plain identifier reference or binding.
    Identifier,
    /// Private class member name (`#name`).
    PrivateIdentifier,
    /// String, number, boolean, null, regexp or bigint literal.
    Literal,
    /// Template literal with interleaved quasis and expressions.
    TemplateLiteral,
    /// Static chunk of a template literal.
    TemplateElement,

    // Expressions
    /// Array literal; `elements` may contain holes.
    ArrayExpression,
    /// Arrow function.
    ArrowFunctionExpression,
    /// Assignment, including compound operators.
    AssignmentExpression,
    /// `await` expression.
    AwaitExpression,
    /// Binary operator expression.
    BinaryExpression,
    /// Function call.
    CallExpression,
    /// Optional chain wrapper.
    ChainExpression,
    /// Class expression.
    ClassExpression,
    /// Ternary conditional.
    ConditionalExpression,
    /// Function expression, also the value of a method.
    FunctionExpression,
    /// Dynamic `import()`.
    ImportExpression,
    /// `&&`, `||` or `??` expression.
    LogicalExpression,
    /// Property access.
    MemberExpression,
    /// Meta property such as `new.target` or `import.meta`.
    MetaProperty,
    /// `new` call.
    NewExpression,
    /// Object literal.
    ObjectExpression,
    /// Property of an object literal or object pattern.
    Property,
    /// Comma-separated expressions.
    SequenceExpression,
    /// Spread in arrays, calls and object literals.
    SpreadElement,
    /// `super` keyword.
    Super,
    /// Tagged template.
    TaggedTemplateExpression,
    /// `this` keyword.
    ThisExpression,
    /// Unary operator expression.
    UnaryExpression,
    /// `++` or `--` expression.
    UpdateExpression,
    /// `yield` expression.
    YieldExpression,

    // Legacy comprehensions
    /// Comprehension `for` block.
    ComprehensionBlock,
    /// Array comprehension.
    ComprehensionExpression,
    /// Generator comprehension.
    GeneratorExpression,

    // Patterns
    /// Array destructuring; `elements` may contain holes.
    ArrayPattern,
    /// Binding with a default value.
    AssignmentPattern,
    /// Object destructuring.
    ObjectPattern,
    /// Rest binding.
    RestElement,

    // Statements
    /// Braced block.
    BlockStatement,
    /// `break` with optional label.
    BreakStatement,
    /// `continue` with optional label.
    ContinueStatement,
    /// `debugger` statement.
    DebuggerStatement,
    /// Directive prologue entry.
    DirectiveStatement,
    /// `do ... while` loop.
    DoWhileStatement,
    /// Lone semicolon.
    EmptyStatement,
    /// Expression used as a statement.
    ExpressionStatement,
    /// C-style `for` loop.
    ForStatement,
    /// `for ... in` loop.
    ForInStatement,
    /// `for ... of` loop.
    ForOfStatement,
    /// `if` statement.
    IfStatement,
    /// Labeled statement.
    LabeledStatement,
    /// `return` statement.
    ReturnStatement,
    /// `switch` statement.
    SwitchStatement,
    /// `case` or `default` clause.
    SwitchCase,
    /// `throw` statement.
    ThrowStatement,
    /// `try` statement.
    TryStatement,
    /// `catch` clause; `param` is optional.
    CatchClause,
    /// `while` loop.
    WhileStatement,
    /// `with` statement.
    WithStatement,

    // Declarations
    /// Function declaration.
    FunctionDeclaration,
    /// `var`, `let` or `const` declaration.
    VariableDeclaration,
    /// Single declarator.
    VariableDeclarator,

    // Classes
    /// Class declaration.
    ClassDeclaration,
    /// Class body.
    ClassBody,
    /// Method, getter, setter or constructor.
    MethodDefinition,
    /// Class field.
    PropertyDefinition,
    /// `static { ... }` initialization block.
    StaticBlock,

    // Modules
    /// `import` declaration.
    ImportDeclaration,
    /// Named import specifier.
    ImportSpecifier,
    /// Default import specifier.
    ImportDefaultSpecifier,
    /// Namespace import specifier (`* as ns`).
    ImportNamespaceSpecifier,
    /// Import attribute (`with { type: "json" }`).
    ImportAttribute,
    /// Named export, with a declaration or a specifier list.
    ExportNamedDeclaration,
    /// `export default`.
    ExportDefaultDeclaration,
    /// `export * from`.
    ExportAllDeclaration,
    /// Export specifier.
    ExportSpecifier,
    /// Abstract module specifier.
    ModuleSpecifier,
}

impl NodeType {
    /// Every node type, in declaration order.
    pub const ALL: &'static [NodeType] = &[
        NodeType::Program,
        NodeType::Identifier,
        NodeType::PrivateIdentifier,
        NodeType::Literal,
        NodeType::TemplateLiteral,
        NodeType::TemplateElement,
        NodeType::ArrayExpression,
        NodeType::ArrowFunctionExpression,
        NodeType::AssignmentExpression,
        NodeType::AwaitExpression,
        NodeType::BinaryExpression,
        NodeType::CallExpression,
        NodeType::ChainExpression,
        NodeType::ClassExpression,
        NodeType::ConditionalExpression,
        NodeType::FunctionExpression,
        NodeType::ImportExpression,
        NodeType::LogicalExpression,
        NodeType::MemberExpression,
        NodeType::MetaProperty,
        NodeType::NewExpression,
        NodeType::ObjectExpression,
        NodeType::Property,
        NodeType::SequenceExpression,
        NodeType::SpreadElement,
        NodeType::Super,
        NodeType::TaggedTemplateExpression,
        NodeType::ThisExpression,
        NodeType::UnaryExpression,
        NodeType::UpdateExpression,
        NodeType::YieldExpression,
        NodeType::ComprehensionBlock,
        NodeType::ComprehensionExpression,
        NodeType::GeneratorExpression,
        NodeType::ArrayPattern,
        NodeType::AssignmentPattern,
        NodeType::ObjectPattern,
        NodeType::RestElement,
        NodeType::BlockStatement,
        NodeType::BreakStatement,
        NodeType::ContinueStatement,
        NodeType::DebuggerStatement,
        NodeType::DirectiveStatement,
        NodeType::DoWhileStatement,
        NodeType::EmptyStatement,
        NodeType::ExpressionStatement,
        NodeType::ForStatement,
        NodeType::ForInStatement,
        NodeType::ForOfStatement,
        NodeType::IfStatement,
        NodeType::LabeledStatement,
        NodeType::ReturnStatement,
        NodeType::SwitchStatement,
        NodeType::SwitchCase,
        NodeType::ThrowStatement,
        NodeType::TryStatement,
        NodeType::CatchClause,
        NodeType::WhileStatement,
        NodeType::WithStatement,
        NodeType::FunctionDeclaration,
        NodeType::VariableDeclaration,
        NodeType::VariableDeclarator,
        NodeType::ClassDeclaration,
        NodeType::ClassBody,
        NodeType::MethodDefinition,
        NodeType::PropertyDefinition,
        NodeType::StaticBlock,
        NodeType::ImportDeclaration,
        NodeType::ImportSpecifier,
        NodeType::ImportDefaultSpecifier,
        NodeType::ImportNamespaceSpecifier,
        NodeType::ImportAttribute,
        NodeType::ExportNamedDeclaration,
        NodeType::ExportDefaultDeclaration,
        NodeType::ExportAllDeclaration,
        NodeType::ExportSpecifier,
        NodeType::ModuleSpecifier,
    ];

    /// Returns the ESTree `type` tag for this node type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeType::Program => "Program",
            NodeType::Identifier => "Identifier",
            NodeType::PrivateIdentifier => "PrivateIdentifier",
            NodeType::Literal => "Literal",
            NodeType::TemplateLiteral => "TemplateLiteral",
            NodeType::TemplateElement => "TemplateElement",
            NodeType::ArrayExpression => "ArrayExpression",
            NodeType::ArrowFunctionExpression => "ArrowFunctionExpression",
            NodeType::AssignmentExpression => "AssignmentExpression",
            NodeType::AwaitExpression => "AwaitExpression",
            NodeType::BinaryExpression => "BinaryExpression",
            NodeType::CallExpression => "CallExpression",
            NodeType::ChainExpression => "ChainExpression",
            NodeType::ClassExpression => "ClassExpression",
            NodeType::ConditionalExpression => "ConditionalExpression",
            NodeType::FunctionExpression => "FunctionExpression",
            NodeType::ImportExpression => "ImportExpression",
            NodeType::LogicalExpression => "LogicalExpression",
            NodeType::MemberExpression => "MemberExpression",
            NodeType::MetaProperty => "MetaProperty",
            NodeType::NewExpression => "NewExpression",
            NodeType::ObjectExpression => "ObjectExpression",
            NodeType::Property => "Property",
            NodeType::SequenceExpression => "SequenceExpression",
            NodeType::SpreadElement => "SpreadElement",
            NodeType::Super => "Super",
            NodeType::TaggedTemplateExpression => "TaggedTemplateExpression",
            NodeType::ThisExpression => "ThisExpression",
            NodeType::UnaryExpression => "UnaryExpression",
            NodeType::UpdateExpression => "UpdateExpression",
            NodeType::YieldExpression => "YieldExpression",
            NodeType::ComprehensionBlock => "ComprehensionBlock",
            NodeType::ComprehensionExpression => "ComprehensionExpression",
            NodeType::GeneratorExpression => "GeneratorExpression",
            NodeType::ArrayPattern => "ArrayPattern",
            NodeType::AssignmentPattern => "AssignmentPattern",
            NodeType::ObjectPattern => "ObjectPattern",
            NodeType::RestElement => "RestElement",
            NodeType::BlockStatement => "BlockStatement",
            NodeType::BreakStatement => "BreakStatement",
            NodeType::ContinueStatement => "ContinueStatement",
            NodeType::DebuggerStatement => "DebuggerStatement",
            NodeType::DirectiveStatement => "DirectiveStatement",
            NodeType::DoWhileStatement => "DoWhileStatement",
            NodeType::EmptyStatement => "EmptyStatement",
            NodeType::ExpressionStatement => "ExpressionStatement",
            NodeType::ForStatement => "ForStatement",
            NodeType::ForInStatement => "ForInStatement",
            NodeType::ForOfStatement => "ForOfStatement",
            NodeType::IfStatement => "IfStatement",
            NodeType::LabeledStatement => "LabeledStatement",
            NodeType::ReturnStatement => "ReturnStatement",
            NodeType::SwitchStatement => "SwitchStatement",
            NodeType::SwitchCase => "SwitchCase",
            NodeType::ThrowStatement => "ThrowStatement",
            NodeType::TryStatement => "TryStatement",
            NodeType::CatchClause => "CatchClause",
            NodeType::WhileStatement => "WhileStatement",
            NodeType::WithStatement => "WithStatement",
            NodeType::FunctionDeclaration => "FunctionDeclaration",
            NodeType::VariableDeclaration => "VariableDeclaration",
            NodeType::VariableDeclarator => "VariableDeclarator",
            NodeType::ClassDeclaration => "ClassDeclaration",
            NodeType::ClassBody => "ClassBody",
            NodeType::MethodDefinition => "MethodDefinition",
            NodeType::PropertyDefinition => "PropertyDefinition",
            NodeType::StaticBlock => "StaticBlock",
            NodeType::ImportDeclaration => "ImportDeclaration",
            NodeType::ImportSpecifier => "ImportSpecifier",
            NodeType::ImportDefaultSpecifier => "ImportDefaultSpecifier",
            NodeType::ImportNamespaceSpecifier => "ImportNamespaceSpecifier",
            NodeType::ImportAttribute => "ImportAttribute",
            NodeType::ExportNamedDeclaration => "ExportNamedDeclaration",
            NodeType::ExportDefaultDeclaration => "ExportDefaultDeclaration",
            NodeType::ExportAllDeclaration => "ExportAllDeclaration",
            NodeType::ExportSpecifier => "ExportSpecifier",
            NodeType::ModuleSpecifier => "ModuleSpecifier",
        }
    }

    /// Returns the child fields visited for this node type, in traversal order.
    ///
    /// Fields not listed here (operators, flags such as `async` or
    /// `generator`, names, raw values) are never traversed.
    pub const fn child_keys(&self) -> &'static [&'static str] {
        match self {
            NodeType::Program => &["body"],
            NodeType::Identifier => &[],
            NodeType::PrivateIdentifier => &[],
            NodeType::Literal => &[],
            NodeType::TemplateLiteral => &["quasis", "expressions"],
            NodeType::TemplateElement => &[],
            NodeType::ArrayExpression => &["elements"],
            NodeType::ArrowFunctionExpression => &["params", "body"],
            NodeType::AssignmentExpression => &["left", "right"],
            NodeType::AwaitExpression => &["argument"],
            NodeType::BinaryExpression => &["left", "right"],
            NodeType::CallExpression => &["callee", "arguments"],
            NodeType::ChainExpression => &["expression"],
            NodeType::ClassExpression => &["id", "superClass", "body"],
            NodeType::ConditionalExpression => &["test", "consequent", "alternate"],
            NodeType::FunctionExpression => &["id", "params", "body"],
            NodeType::ImportExpression => &["source", "options"],
            NodeType::LogicalExpression => &["left", "right"],
            NodeType::MemberExpression => &["object", "property"],
            NodeType::MetaProperty => &["meta", "property"],
            NodeType::NewExpression => &["callee", "arguments"],
            NodeType::ObjectExpression => &["properties"],
            NodeType::Property => &["key", "value"],
            NodeType::SequenceExpression => &["expressions"],
            NodeType::SpreadElement => &["argument"],
            NodeType::Super => &[],
            NodeType::TaggedTemplateExpression => &["tag", "quasi"],
            NodeType::ThisExpression => &[],
            NodeType::UnaryExpression => &["argument"],
            NodeType::UpdateExpression => &["argument"],
            NodeType::YieldExpression => &["argument"],
            NodeType::ComprehensionBlock => &["left", "right"],
            NodeType::ComprehensionExpression => &["blocks", "filter", "body"],
            NodeType::GeneratorExpression => &["blocks", "filter", "body"],
            NodeType::ArrayPattern => &["elements"],
            NodeType::AssignmentPattern => &["left", "right"],
            NodeType::ObjectPattern => &["properties"],
            NodeType::RestElement => &["argument"],
            NodeType::BlockStatement => &["body"],
            NodeType::BreakStatement => &["label"],
            NodeType::ContinueStatement => &["label"],
            NodeType::DebuggerStatement => &[],
            NodeType::DirectiveStatement => &[],
            NodeType::DoWhileStatement => &["body", "test"],
            NodeType::EmptyStatement => &[],
            NodeType::ExpressionStatement => &["expression"],
            NodeType::ForStatement => &["init", "test", "update", "body"],
            NodeType::ForInStatement => &["left", "right", "body"],
            NodeType::ForOfStatement => &["left", "right", "body"],
            NodeType::IfStatement => &["test", "consequent", "alternate"],
            NodeType::LabeledStatement => &["label", "body"],
            NodeType::ReturnStatement => &["argument"],
            NodeType::SwitchStatement => &["discriminant", "cases"],
            NodeType::SwitchCase => &["test", "consequent"],
            NodeType::ThrowStatement => &["argument"],
            NodeType::TryStatement => &["block", "handler", "finalizer"],
            NodeType::CatchClause => &["param", "body"],
            NodeType::WhileStatement => &["test", "body"],
            NodeType::WithStatement => &["object", "body"],
            NodeType::FunctionDeclaration => &["id", "params", "body"],
            NodeType::VariableDeclaration => &["declarations"],
            NodeType::VariableDeclarator => &["id", "init"],
            NodeType::ClassDeclaration => &["id", "superClass", "body"],
            NodeType::ClassBody => &["body"],
            NodeType::MethodDefinition => &["key", "value"],
            NodeType::PropertyDefinition => &["key", "value"],
            NodeType::StaticBlock => &["body"],
            NodeType::ImportDeclaration => &["specifiers", "source", "attributes"],
            NodeType::ImportSpecifier => &["imported", "local"],
            NodeType::ImportDefaultSpecifier => &["local"],
            NodeType::ImportNamespaceSpecifier => &["local"],
            NodeType::ImportAttribute => &["key", "value"],
            NodeType::ExportNamedDeclaration => &["declaration", "specifiers", "source", "attributes"],
            NodeType::ExportDefaultDeclaration => &["declaration"],
            NodeType::ExportAllDeclaration => &["exported", "source", "attributes"],
            NodeType::ExportSpecifier => &["exported", "local"],
            NodeType::ModuleSpecifier => &[],
        }
    }

    /// Returns true if this node type has no child fields.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.child_keys().is_empty()
    }

    /// Returns true if this node type is a statement or a declaration.
    pub const fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeType::BlockStatement
                | NodeType::BreakStatement
                | NodeType::ContinueStatement
                | NodeType::DebuggerStatement
                | NodeType::DirectiveStatement
                | NodeType::DoWhileStatement
                | NodeType::EmptyStatement
                | NodeType::ExpressionStatement
                | NodeType::ForStatement
                | NodeType::ForInStatement
                | NodeType::ForOfStatement
                | NodeType::IfStatement
                | NodeType::LabeledStatement
                | NodeType::ReturnStatement
                | NodeType::SwitchStatement
                | NodeType::ThrowStatement
                | NodeType::TryStatement
                | NodeType::WhileStatement
                | NodeType::WithStatement
                | NodeType::FunctionDeclaration
                | NodeType::VariableDeclaration
                | NodeType::ClassDeclaration
        )
    }

    /// Returns true if this node type is an expression.
    pub const fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeType::Identifier
                | NodeType::Literal
                | NodeType::TemplateLiteral
                | NodeType::ArrayExpression
                | NodeType::ArrowFunctionExpression
                | NodeType::AssignmentExpression
                | NodeType::AwaitExpression
                | NodeType::BinaryExpression
                | NodeType::CallExpression
                | NodeType::ChainExpression
                | NodeType::ClassExpression
                | NodeType::ConditionalExpression
                | NodeType::FunctionExpression
                | NodeType::ImportExpression
                | NodeType::LogicalExpression
                | NodeType::MemberExpression
                | NodeType::MetaProperty
                | NodeType::NewExpression
                | NodeType::ObjectExpression
                | NodeType::SequenceExpression
                | NodeType::TaggedTemplateExpression
                | NodeType::ThisExpression
                | NodeType::UnaryExpression
                | NodeType::UpdateExpression
                | NodeType::YieldExpression
                | NodeType::ComprehensionExpression
                | NodeType::GeneratorExpression
        )
    }

    /// Returns true if this node type is a destructuring pattern.
    ///
    /// `Identifier` and `MemberExpression` may also appear in pattern
    /// position but are not pattern-only kinds.
    pub const fn is_pattern(&self) -> bool {
        matches!(
            self,
            NodeType::ArrayPattern
                | NodeType::AssignmentPattern
                | NodeType::ObjectPattern
                | NodeType::RestElement
        )
    }

    /// Returns true if this node type may only appear at module top level.
    pub const fn is_module_item(&self) -> bool {
        matches!(
            self,
            NodeType::ImportDeclaration
                | NodeType::ExportNamedDeclaration
                | NodeType::ExportDefaultDeclaration
                | NodeType::ExportAllDeclaration
        )
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a `type` tag names no standard ESTree node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node type `{0}`")]
pub struct ParseNodeTypeError(pub String);

impl FromStr for NodeType {
    type Err = ParseNodeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let node_type = match s {
            "Program" => NodeType::Program,
            "Identifier" => NodeType::Identifier,
            "PrivateIdentifier" => NodeType::PrivateIdentifier,
            "Literal" => NodeType::Literal,
            "TemplateLiteral" => NodeType::TemplateLiteral,
            "TemplateElement" => NodeType::TemplateElement,
            "ArrayExpression" => NodeType::ArrayExpression,
            "ArrowFunctionExpression" => NodeType::ArrowFunctionExpression,
            "AssignmentExpression" => NodeType::AssignmentExpression,
            "AwaitExpression" => NodeType::AwaitExpression,
            "BinaryExpression" => NodeType::BinaryExpression,
            "CallExpression" => NodeType::CallExpression,
            "ChainExpression" => NodeType::ChainExpression,
            "ClassExpression" => NodeType::ClassExpression,
            "ConditionalExpression" => NodeType::ConditionalExpression,
            "FunctionExpression" => NodeType::FunctionExpression,
            "ImportExpression" => NodeType::ImportExpression,
            "LogicalExpression" => NodeType::LogicalExpression,
            "MemberExpression" => NodeType::MemberExpression,
            "MetaProperty" => NodeType::MetaProperty,
            "NewExpression" => NodeType::NewExpression,
            "ObjectExpression" => NodeType::ObjectExpression,
            "Property" => NodeType::Property,
            "SequenceExpression" => NodeType::SequenceExpression,
            "SpreadElement" => NodeType::SpreadElement,
            "Super" => NodeType::Super,
            "TaggedTemplateExpression" => NodeType::TaggedTemplateExpression,
            "ThisExpression" => NodeType::ThisExpression,
            "UnaryExpression" => NodeType::UnaryExpression,
            "UpdateExpression" => NodeType::UpdateExpression,
            "YieldExpression" => NodeType::YieldExpression,
            "ComprehensionBlock" => NodeType::ComprehensionBlock,
            "ComprehensionExpression" => NodeType::ComprehensionExpression,
            "GeneratorExpression" => NodeType::GeneratorExpression,
            "ArrayPattern" => NodeType::ArrayPattern,
            "AssignmentPattern" => NodeType::AssignmentPattern,
            "ObjectPattern" => NodeType::ObjectPattern,
            "RestElement" => NodeType::RestElement,
            "BlockStatement" => NodeType::BlockStatement,
            "BreakStatement" => NodeType::BreakStatement,
            "ContinueStatement" => NodeType::ContinueStatement,
            "DebuggerStatement" => NodeType::DebuggerStatement,
            "DirectiveStatement" => NodeType::DirectiveStatement,
            "DoWhileStatement" => NodeType::DoWhileStatement,
            "EmptyStatement" => NodeType::EmptyStatement,
            "ExpressionStatement" => NodeType::ExpressionStatement,
            "ForStatement" => NodeType::ForStatement,
            "ForInStatement" => NodeType::ForInStatement,
            "ForOfStatement" => NodeType::ForOfStatement,
            "IfStatement" => NodeType::IfStatement,
            "LabeledStatement" => NodeType::LabeledStatement,
            "ReturnStatement" => NodeType::ReturnStatement,
            "SwitchStatement" => NodeType::SwitchStatement,
            "SwitchCase" => NodeType::SwitchCase,
            "ThrowStatement" => NodeType::ThrowStatement,
            "TryStatement" => NodeType::TryStatement,
            "CatchClause" => NodeType::CatchClause,
            "WhileStatement" => NodeType::WhileStatement,
            "WithStatement" => NodeType::WithStatement,
            "FunctionDeclaration" => NodeType::FunctionDeclaration,
            "VariableDeclaration" => NodeType::VariableDeclaration,
            "VariableDeclarator" => NodeType::VariableDeclarator,
            "ClassDeclaration" => NodeType::ClassDeclaration,
            "ClassBody" => NodeType::ClassBody,
            "MethodDefinition" => NodeType::MethodDefinition,
            "PropertyDefinition" => NodeType::PropertyDefinition,
            "StaticBlock" => NodeType::StaticBlock,
            "ImportDeclaration" => NodeType::ImportDeclaration,
            "ImportSpecifier" => NodeType::ImportSpecifier,
            "ImportDefaultSpecifier" => NodeType::ImportDefaultSpecifier,
            "ImportNamespaceSpecifier" => NodeType::ImportNamespaceSpecifier,
            "ImportAttribute" => NodeType::ImportAttribute,
            "ExportNamedDeclaration" => NodeType::ExportNamedDeclaration,
            "ExportDefaultDeclaration" => NodeType::ExportDefaultDeclaration,
            "ExportAllDeclaration" => NodeType::ExportAllDeclaration,
            "ExportSpecifier" => NodeType::ExportSpecifier,
            "ModuleSpecifier" => NodeType::ModuleSpecifier,
            _ => return Err(ParseNodeTypeError(s.to_string())),
        };
        Ok(node_type)
    }
}
