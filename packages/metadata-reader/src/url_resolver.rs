//! URL Resolvers
//!
//! Derive the external template and style URL hints from a component
//! decorator. Pure functions of the decorator node; fetching the content
//! behind a URL is the job of [`crate::resource::FileResolver`].

use crate::ast::AstNode;
use crate::ast_value::AstValue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// External template and style URL hints extracted from a decorator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataUrls {
    pub template_url: Option<String>,
    pub style_urls: Option<Vec<String>>,
}

/// Derives the external URL hints for a component decorator.
pub trait UrlResolver<TExpression: AstNode> {
    fn resolve(&self, decorator: &AstValue<TExpression>) -> MetadataUrls;
}

/// Reads `templateUrl`, `styleUrls` and the singular `styleUrl` form
/// straight from the decorator's configuration object, keeping the URLs as
/// written.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecoratorUrlResolver;

impl<TExpression: AstNode> UrlResolver<TExpression> for DecoratorUrlResolver {
    fn resolve(&self, decorator: &AstValue<TExpression>) -> MetadataUrls {
        let config = decorator
            .first_argument()
            .and_then(|arg| arg.get_object());
        let Some(config) = config else {
            return MetadataUrls::default();
        };

        let template_url = config.get_string("templateUrl");
        let style_urls = config
            .get_array("styleUrls")
            .map(|elements| {
                elements
                    .iter()
                    .filter_map(|element| element.get_string())
                    .collect::<Vec<_>>()
            })
            .or_else(|| config.get_string("styleUrl").map(|url| vec![url]));

        MetadataUrls {
            template_url,
            style_urls,
        }
    }
}

/// Joins every URL hint produced by the inner resolver onto a base
/// directory, typically the directory of the source file under analysis.
#[derive(Debug, Clone)]
pub struct RelativeUrlResolver<R> {
    inner: R,
    base_dir: PathBuf,
}

impl<R> RelativeUrlResolver<R> {
    pub fn new(inner: R, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            base_dir: base_dir.into(),
        }
    }

    fn join(&self, url: &str) -> String {
        self.base_dir.join(url).to_string_lossy().into_owned()
    }
}

impl<TExpression: AstNode, R: UrlResolver<TExpression>> UrlResolver<TExpression>
    for RelativeUrlResolver<R>
{
    fn resolve(&self, decorator: &AstValue<TExpression>) -> MetadataUrls {
        let urls = self.inner.resolve(decorator);
        MetadataUrls {
            template_url: urls.template_url.map(|url| self.join(&url)),
            style_urls: urls
                .style_urls
                .map(|urls| urls.iter().map(|url| self.join(url)).collect()),
        }
    }
}
