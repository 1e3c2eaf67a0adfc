use crate::ast::{AstHost, AstNode};
use indexmap::IndexMap;

/// A host-backed view over a single expression node.
///
/// Pairs the opaque node with the host that knows how to query it, so the
/// decorator shapes can be matched with short optional chains instead of
/// threading the host through every helper.
#[derive(Clone)]
pub struct AstValue<'h, TExpression: AstNode> {
    pub node: TExpression,
    pub host: &'h dyn AstHost<TExpression>,
}

impl<'h, TExpression: AstNode> AstValue<'h, TExpression> {
    pub fn new(node: TExpression, host: &'h dyn AstHost<TExpression>) -> Self {
        Self { node, host }
    }

    pub fn is_call(&self) -> bool {
        self.host.is_call_expression(&self.node)
    }

    /// The value itself, if it is a call expression whose callee is the
    /// symbol `name`. This is the shape of a call-style decorator such as
    /// `@Component({...})`.
    pub fn as_call_named(&self, name: &str) -> Option<AstValue<'h, TExpression>> {
        if !self.is_call() {
            return None;
        }
        let callee = self.host.callee(&self.node)?;
        match self.host.symbol_name(&callee) {
            Some(n) if n == name => Some(self.clone()),
            _ => None,
        }
    }

    /// The first argument of a call expression.
    pub fn first_argument(&self) -> Option<AstValue<'h, TExpression>> {
        self.host
            .arguments(&self.node)?
            .into_iter()
            .next()
            .map(|node| AstValue::new(node, self.host))
    }

    pub fn get_string(&self) -> Option<String> {
        self.host.string_value(&self.node)
    }

    pub fn get_array(&self) -> Option<Vec<AstValue<'h, TExpression>>> {
        let items = self.host.array_elements(&self.node)?;
        Some(
            items
                .into_iter()
                .map(|node| AstValue::new(node, self.host))
                .collect(),
        )
    }

    pub fn get_object(&self) -> Option<AstObject<'h, TExpression>> {
        let map = self.host.object_properties(&self.node)?;
        Some(AstObject {
            map,
            host: self.host,
        })
    }

    pub fn print(&self) -> String {
        self.host.print_node(&self.node)
    }
}

/// A decomposed object literal with host-backed property accessors.
pub struct AstObject<'h, TExpression: AstNode> {
    map: IndexMap<String, TExpression>,
    pub host: &'h dyn AstHost<TExpression>,
}

impl<'h, TExpression: AstNode> AstObject<'h, TExpression> {
    pub fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<AstValue<'h, TExpression>> {
        self.map
            .get(key)
            .map(|node| AstValue::new(node.clone(), self.host))
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|value| value.get_string())
    }

    pub fn get_array(&self, key: &str) -> Option<Vec<AstValue<'h, TExpression>>> {
        self.get(key).and_then(|value| value.get_array())
    }

    /// Node and text of a string-literal property initializer.
    pub fn get_string_property(&self, key: &str) -> Option<(TExpression, String)> {
        let node = self.map.get(key)?;
        let text = self.host.string_value(node)?;
        Some((node.clone(), text))
    }
}
