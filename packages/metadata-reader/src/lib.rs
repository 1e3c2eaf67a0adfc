//! Decorator metadata extraction for Angular components and directives.
//!
//! Given an already-parsed class declaration, [`MetadataReader`] locates its
//! `@Component` or `@Directive` decorator, reads the configuration object
//! (selector, inline or external template, styles, animations) and produces
//! a normalized metadata record for lint rules and documentation tooling.
//!
//! The syntax tree stays behind the [`AstHost`] abstraction and external
//! resources are fetched through injected resolvers, so the reader never
//! parses source text or touches the file system on its own.

pub mod ast;
pub mod ast_value;
pub mod maybe;
pub mod metadata;
pub mod reader;
pub mod resource;
pub mod transform;
pub mod url_resolver;

pub use ast::{AstHost, AstNode};
pub use ast_value::{AstObject, AstValue};
pub use metadata::{
    normalize_transformed, AnimationMetadata, ClassMetadata, CodeWithSourceMap, ComponentMetadata,
    DirectiveMetadata, StyleMetadata, TemplateMetadata,
};
pub use reader::{MetadataError, MetadataReader};
pub use resource::{FileResolver, FsFileResolver, InMemoryFileResolver, ResourceError};
pub use transform::{ContentTransformer, PassThrough};
pub use url_resolver::{DecoratorUrlResolver, MetadataUrls, RelativeUrlResolver, UrlResolver};
