//! Synthetic AST used to exercise the reader without a real parser.
#![allow(dead_code)]

use angular_metadata_reader::ast::{AstHost, AstNode};
use angular_metadata_reader::resource::{FileResolver, ResourceError};
use indexmap::IndexMap;
use std::cell::Cell;

/// Minimal expression tree covering the decorator shapes the reader
/// understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Class {
        name: String,
        decorators: Vec<Node>,
    },
    Call {
        callee: Box<Node>,
        args: Vec<Node>,
    },
    Ident(String),
    Str(String),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

impl AstNode for Node {}

pub struct SyntheticHost;

impl AstHost<Node> for SyntheticHost {
    fn decorators(&self, class: &Node) -> Vec<Node> {
        match class {
            Node::Class { decorators, .. } => decorators.clone(),
            _ => Vec::new(),
        }
    }

    fn is_call_expression(&self, node: &Node) -> bool {
        matches!(node, Node::Call { .. })
    }

    fn callee(&self, call: &Node) -> Option<Node> {
        match call {
            Node::Call { callee, .. } => Some((**callee).clone()),
            _ => None,
        }
    }

    fn arguments(&self, call: &Node) -> Option<Vec<Node>> {
        match call {
            Node::Call { args, .. } => Some(args.clone()),
            _ => None,
        }
    }

    fn symbol_name(&self, node: &Node) -> Option<String> {
        match node {
            Node::Ident(name) => Some(name.clone()),
            Node::Class { name, .. } => Some(name.clone()),
            _ => None,
        }
    }

    fn string_value(&self, node: &Node) -> Option<String> {
        match node {
            Node::Str(text) => Some(text.clone()),
            _ => None,
        }
    }

    fn array_elements(&self, node: &Node) -> Option<Vec<Node>> {
        match node {
            Node::Array(elements) => Some(elements.clone()),
            _ => None,
        }
    }

    fn object_properties(&self, node: &Node) -> Option<IndexMap<String, Node>> {
        match node {
            Node::Object(props) => Some(props.iter().cloned().collect()),
            _ => None,
        }
    }

    fn print_node(&self, node: &Node) -> String {
        match node {
            Node::Class { name, .. } | Node::Ident(name) => name.clone(),
            Node::Str(text) => format!("'{}'", text),
            other => format!("{:?}", other),
        }
    }
}

pub fn class(name: &str, decorators: Vec<Node>) -> Node {
    Node::Class {
        name: name.to_string(),
        decorators,
    }
}

pub fn decorator(name: &str, args: Vec<Node>) -> Node {
    Node::Call {
        callee: Box::new(Node::Ident(name.to_string())),
        args,
    }
}

pub fn object(props: Vec<(&str, Node)>) -> Node {
    Node::Object(
        props
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
    )
}

pub fn s(text: &str) -> Node {
    Node::Str(text.to_string())
}

/// A class decorated with `@Component({...props})`.
pub fn component(props: Vec<(&str, Node)>) -> Node {
    class("TestComponent", vec![decorator("Component", vec![object(props)])])
}

/// A class decorated with `@Directive({...props})`.
pub fn directive(props: Vec<(&str, Node)>) -> Node {
    class("TestDirective", vec![decorator("Directive", vec![object(props)])])
}

/// File resolver that counts its calls, for asserting that a branch was
/// never attempted.
#[derive(Default)]
pub struct CountingResolver<R> {
    inner: R,
    calls: Cell<usize>,
}

impl<R> CountingResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<R: FileResolver> FileResolver for CountingResolver<R> {
    fn resolve(&self, url: &str) -> Result<String, ResourceError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.resolve(url)
    }
}
