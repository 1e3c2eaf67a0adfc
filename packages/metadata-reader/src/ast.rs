//! AST Abstraction
//!
//! Defines the interface for querying a parsed syntax tree while being
//! agnostic to the underlying parser implementation. The reader never owns
//! the tree; it only asks shape questions about opaque expression nodes.

use indexmap::IndexMap;
use std::fmt::Debug;

/// Helper trait for AST nodes that can be used by the metadata reader.
pub trait AstNode: Debug + Clone {}

/// An abstraction for getting information from an AST while being agnostic
/// to the underlying AST implementation.
///
/// Every query is total and side-effect free. A node that does not have the
/// requested shape yields `None` rather than an error.
pub trait AstHost<TExpression: AstNode> {
    /// Decorator expressions attached to the given class declaration, in
    /// source order.
    fn decorators(&self, class: &TExpression) -> Vec<TExpression>;

    /// Return `true` if the given expression is a call expression.
    fn is_call_expression(&self, node: &TExpression) -> bool;

    /// The expression that is called, or `None` if `call` is not a call.
    fn callee(&self, call: &TExpression) -> Option<TExpression>;

    /// The argument expressions of the call, or `None` if `call` is not a
    /// call.
    fn arguments(&self, call: &TExpression) -> Option<Vec<TExpression>>;

    /// Get the name of the symbol represented by the given expression node,
    /// or `None` if it is not a symbol.
    fn symbol_name(&self, node: &TExpression) -> Option<String>;

    /// The text of a string literal, including no-substitution template
    /// literals, or `None` if the node is not string-like.
    fn string_value(&self, node: &TExpression) -> Option<String>;

    /// The element expressions of an array literal, or `None`.
    fn array_elements(&self, node: &TExpression) -> Option<Vec<TExpression>>;

    /// The statically-named properties of an object literal in declaration
    /// order, or `None` if the node is not an object literal.
    fn object_properties(&self, node: &TExpression) -> Option<IndexMap<String, TExpression>>;

    /// Print the source code representation of the node, for diagnostics.
    fn print_node(&self, node: &TExpression) -> String;
}
