use crate::metadata::CodeWithSourceMap;

/// Preprocesses raw template and style text into code plus an optional
/// source map. Opaque to the reader beyond the [`CodeWithSourceMap`] shape.
pub trait ContentTransformer {
    fn transform_template(&self, text: &str, url: Option<&str>) -> CodeWithSourceMap;
    fn transform_style(&self, text: &str) -> CodeWithSourceMap;
}

/// Default transformer: the text is already the code, no source map.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl ContentTransformer for PassThrough {
    fn transform_template(&self, text: &str, _url: Option<&str>) -> CodeWithSourceMap {
        CodeWithSourceMap::from_code(text)
    }

    fn transform_style(&self, text: &str) -> CodeWithSourceMap {
        CodeWithSourceMap::from_code(text)
    }
}
