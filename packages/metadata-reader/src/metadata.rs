//! Metadata Records
//!
//! The typed records produced by the reader, plus the transformed-content
//! shape shared by templates, styles and animations. Every record is a pure
//! derived value constructed fresh per `read` call; nothing here is cached.

use crate::ast::AstNode;
use serde::{Deserialize, Serialize};

/// Transformed template or style content together with its optional source
/// map and original source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeWithSourceMap {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl CodeWithSourceMap {
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            map: None,
            source: None,
        }
    }
}

/// Guarantees that transformed content always carries a usable original
/// source: when the transform produced no source map, the code is its own
/// source. Idempotent; content that already went through this step is left
/// unchanged.
pub fn normalize_transformed(mut t: CodeWithSourceMap) -> CodeWithSourceMap {
    if t.map.is_none() {
        t.source = Some(t.code.clone());
    }
    t
}

/// A component template, either inline (`node` present) or resolved from an
/// external URL (`url` present).
#[derive(Debug, Clone)]
pub struct TemplateMetadata<TExpression: AstNode> {
    pub node: Option<TExpression>,
    pub template: CodeWithSourceMap,
    pub url: Option<String>,
}

/// One component style, inline or external.
#[derive(Debug, Clone)]
pub struct StyleMetadata<TExpression: AstNode> {
    pub node: Option<TExpression>,
    pub style: CodeWithSourceMap,
    pub url: Option<String>,
}

/// One component animation. Animations are inline-only and never carry a
/// URL.
#[derive(Debug, Clone)]
pub struct AnimationMetadata<TExpression: AstNode> {
    pub node: TExpression,
    pub animation: CodeWithSourceMap,
}

/// Metadata of a class decorated with `@Directive`. The selector is
/// required; a directive without one is a contract violation reported by the
/// reader.
#[derive(Debug, Clone)]
pub struct DirectiveMetadata<TExpression: AstNode> {
    pub controller: TExpression,
    pub decorator: TExpression,
    pub selector: String,
}

/// Metadata of a class decorated with `@Component`.
///
/// Each content field is absent when the decorator does not declare it or
/// when external resolution failed entirely; a half-resolved entry is never
/// produced.
#[derive(Debug, Clone)]
pub struct ComponentMetadata<TExpression: AstNode> {
    pub controller: TExpression,
    pub decorator: TExpression,
    pub selector: Option<String>,
    pub animations: Option<Vec<AnimationMetadata<TExpression>>>,
    pub styles: Option<Vec<StyleMetadata<TExpression>>>,
    pub template: Option<TemplateMetadata<TExpression>>,
}

/// The per-class result handed to the traversal owner.
#[derive(Debug, Clone)]
pub enum ClassMetadata<TExpression: AstNode> {
    Directive(DirectiveMetadata<TExpression>),
    Component(ComponentMetadata<TExpression>),
}

impl<TExpression: AstNode> ClassMetadata<TExpression> {
    pub fn selector(&self) -> Option<&str> {
        match self {
            ClassMetadata::Directive(directive) => Some(directive.selector.as_str()),
            ClassMetadata::Component(component) => component.selector.as_deref(),
        }
    }

    pub fn is_component(&self) -> bool {
        matches!(self, ClassMetadata::Component(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_defaults_source_to_code() {
        let t = normalize_transformed(CodeWithSourceMap::from_code("<div></div>"));
        assert_eq!(t.source.as_deref(), Some("<div></div>"));
    }

    #[test]
    fn test_normalize_keeps_source_when_map_present() {
        let t = normalize_transformed(CodeWithSourceMap {
            code: "compiled".to_string(),
            map: Some(json!({ "version": 3 })),
            source: Some("original".to_string()),
        });
        assert_eq!(t.source.as_deref(), Some("original"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_transformed(CodeWithSourceMap::from_code("a { color: red }"));
        let twice = normalize_transformed(once.clone());
        assert_eq!(once, twice);
    }
}
