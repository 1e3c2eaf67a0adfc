//! Metadata Reader
//!
//! The per-class entry point. Scans a class declaration's decorators for
//! `@Directive` and `@Component`, extracts the configuration fields and
//! resolves inline or external template, style and animation content into
//! normalized metadata records.

use crate::ast::{AstHost, AstNode};
use crate::ast_value::{AstObject, AstValue};
use crate::maybe::{all_or_absent, first_present};
use crate::metadata::{
    normalize_transformed, AnimationMetadata, ClassMetadata, CodeWithSourceMap, ComponentMetadata,
    DirectiveMetadata, StyleMetadata, TemplateMetadata,
};
use crate::resource::FileResolver;
use crate::transform::{ContentTransformer, PassThrough};
use crate::url_resolver::{DecoratorUrlResolver, MetadataUrls, UrlResolver};
use thiserror::Error;

/// Contract violation while reading decorator metadata.
///
/// Recoverable absences (no configuration object, unresolvable external
/// content) never surface here; they become absent fields on the record.
#[derive(Debug, Clone, Error)]
pub enum MetadataError {
    /// A class matched as a directive whose configuration object has no
    /// string-literal `selector` property.
    #[error("missing string 'selector' property on decorated class {class}")]
    MissingSelector { class: String },
}

/// Reads directive and component metadata from decorated class declarations.
///
/// The syntax tree is queried through the injected [`AstHost`]; external
/// resources are fetched through the injected [`FileResolver`]. Each `read`
/// call is self-contained and shares no state with any other call.
pub struct MetadataReader<'h, TExpression: AstNode> {
    host: &'h dyn AstHost<TExpression>,
    file_resolver: Box<dyn FileResolver + 'h>,
    url_resolver: Box<dyn UrlResolver<TExpression> + 'h>,
    transformer: Box<dyn ContentTransformer + 'h>,
}

impl<'h, TExpression: AstNode> MetadataReader<'h, TExpression> {
    pub fn new(
        host: &'h dyn AstHost<TExpression>,
        file_resolver: impl FileResolver + 'h,
    ) -> Self {
        Self {
            host,
            file_resolver: Box::new(file_resolver),
            url_resolver: Box::new(DecoratorUrlResolver),
            transformer: Box::new(PassThrough),
        }
    }

    pub fn with_url_resolver(mut self, url_resolver: impl UrlResolver<TExpression> + 'h) -> Self {
        self.url_resolver = Box::new(url_resolver);
        self
    }

    pub fn with_transformer(mut self, transformer: impl ContentTransformer + 'h) -> Self {
        self.transformer = Box::new(transformer);
        self
    }

    /// Reads the metadata of a single class declaration.
    ///
    /// A class with neither a `@Directive` nor a `@Component` decorator
    /// yields `Ok(None)`. Both decorator matches are evaluated even though a
    /// well-formed class carries at most one; when both are present the
    /// directive result wins.
    pub fn read(
        &self,
        class: &TExpression,
    ) -> Result<Option<ClassMetadata<TExpression>>, MetadataError> {
        let decorators = self.host.decorators(class);

        let component_dec = first_present(
            decorators
                .iter()
                .map(|dec| AstValue::new(dec.clone(), self.host).as_call_named("Component")),
        );
        let directive_dec = first_present(
            decorators
                .iter()
                .map(|dec| AstValue::new(dec.clone(), self.host).as_call_named("Directive")),
        );

        let component = component_dec
            .as_ref()
            .map(|dec| self.read_component_metadata(class, dec));
        let directive = match &directive_dec {
            Some(dec) => Some(self.read_directive_metadata(class, dec)?),
            None => None,
        };

        Ok(directive
            .map(ClassMetadata::Directive)
            .or(component.map(ClassMetadata::Component)))
    }

    fn read_directive_metadata(
        &self,
        class: &TExpression,
        dec: &AstValue<'h, TExpression>,
    ) -> Result<DirectiveMetadata<TExpression>, MetadataError> {
        // A directive without a string selector cannot be matched against
        // markup; this is the one required field of the contract.
        let selector = self
            .read_selector(dec)
            .ok_or_else(|| MetadataError::MissingSelector {
                class: self.host.print_node(class),
            })?;

        Ok(DirectiveMetadata {
            controller: class.clone(),
            decorator: dec.node.clone(),
            selector,
        })
    }

    fn read_component_metadata(
        &self,
        class: &TExpression,
        dec: &AstValue<'h, TExpression>,
    ) -> ComponentMetadata<TExpression> {
        let selector = self.read_selector(dec);
        let config = self.decorator_config(dec);

        // Without a configuration object there are no URL hints, and no
        // template/style/animation resolution is attempted at all.
        let external = config.map(|_| self.url_resolver.resolve(dec));

        let animations = external.as_ref().and_then(|_| self.read_animations(dec));
        let styles = external.as_ref().and_then(|ext| self.read_styles(dec, ext));
        let template = external
            .as_ref()
            .and_then(|ext| self.read_template(dec, ext));

        ComponentMetadata {
            controller: class.clone(),
            decorator: dec.node.clone(),
            selector,
            animations,
            styles,
            template,
        }
    }

    /// The decorator's configuration object, present only if the single
    /// argument is an object literal with at least one property.
    fn decorator_config(
        &self,
        dec: &AstValue<'h, TExpression>,
    ) -> Option<AstObject<'h, TExpression>> {
        dec.first_argument()
            .and_then(|arg| arg.get_object())
            .filter(|config| !config.is_empty())
    }

    fn read_selector(&self, dec: &AstValue<'h, TExpression>) -> Option<String> {
        self.decorator_config(dec)
            .and_then(|config| config.get_string("selector"))
    }

    /// Inline template first; external `templateUrl` only as the fallback.
    fn read_template(
        &self,
        dec: &AstValue<'h, TExpression>,
        external: &MetadataUrls,
    ) -> Option<TemplateMetadata<TExpression>> {
        self.decorator_config(dec)
            .and_then(|config| config.get_string_property("template"))
            .map(|(node, text)| TemplateMetadata {
                node: Some(node),
                template: normalize_transformed(self.transformer.transform_template(&text, None)),
                url: None,
            })
            .or_else(|| {
                // No valid inline template; resolve the external one.
                let url = external.template_url.as_deref()?;
                let content = self.resolve(url)?;
                Some(TemplateMetadata {
                    node: None,
                    template: normalize_transformed(
                        self.transformer.transform_template(&content, Some(url)),
                    ),
                    url: Some(url.to_string()),
                })
            })
    }

    /// Inline styles first, even when the declared array is empty; external
    /// `styleUrls` resolve all-or-nothing.
    fn read_styles(
        &self,
        dec: &AstValue<'h, TExpression>,
        external: &MetadataUrls,
    ) -> Option<Vec<StyleMetadata<TExpression>>> {
        self.decorator_config(dec)
            .and_then(|config| config.get_array("styles"))
            .map(|elements| {
                elements
                    .iter()
                    .filter_map(|element| {
                        let text = element.get_string()?;
                        Some(StyleMetadata {
                            node: Some(element.node.clone()),
                            style: normalize_transformed(self.transformer.transform_style(&text)),
                            url: None,
                        })
                    })
                    .collect()
            })
            .or_else(|| {
                // One unresolvable URL discards the whole external list.
                let urls = external.style_urls.as_ref()?;
                all_or_absent(urls.iter().map(|url| {
                    let content = self.resolve(url)?;
                    Some(StyleMetadata {
                        node: None,
                        style: normalize_transformed(self.transformer.transform_style(&content)),
                        url: Some(url.clone()),
                    })
                }))
            })
    }

    /// Animations are inline-only; there is no external fallback.
    fn read_animations(
        &self,
        dec: &AstValue<'h, TExpression>,
    ) -> Option<Vec<AnimationMetadata<TExpression>>> {
        self.decorator_config(dec)
            .and_then(|config| config.get_array("animations"))
            .map(|elements| {
                elements
                    .iter()
                    .filter_map(|element| {
                        let text = element.get_string()?;
                        Some(AnimationMetadata {
                            node: element.node.clone(),
                            animation: normalize_transformed(CodeWithSourceMap::from_code(text)),
                        })
                    })
                    .collect()
            })
    }

    /// The single point where a file-resolution error crosses into the
    /// optional-value model: log and treat the content as absent.
    fn resolve(&self, url: &str) -> Option<String> {
        match self.file_resolver.resolve(url) {
            Ok(content) => Some(content),
            Err(_) => {
                tracing::info!("cannot read file {}", url);
                None
            }
        }
    }
}
