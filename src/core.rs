use std::error::Error;
use std::fmt;

use crate::parsers::html::{html_to_dom, serialize_fragment};
use crate::translation::chunked::ChunkedTranslator;
use crate::translation::client::TranslationBackend;
use crate::translation::languages::TARGET_LANGUAGES;
use crate::translation::rewriter::rewrite_dom;

/// Represents errors that can occur during polyglot processing
///
/// Only a parse failure crosses the library boundary; per-chunk
/// translation failures are absorbed inside the translation client.
#[derive(Debug)]
pub struct PolyglotError {
    details: String,
}

impl PolyglotError {
    /// Creates a new PolyglotError with the given message
    pub fn new(msg: &str) -> PolyglotError {
        PolyglotError {
            details: msg.to_string(),
        }
    }
}

impl fmt::Display for PolyglotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl Error for PolyglotError {}

/// Localized copies of one HTML fragment, one entry per target
/// language, in the fixed table order.
pub type Translations = Vec<(String, String)>;

/// Translates an HTML fragment into every configured target language
///
/// Each language gets its own freshly parsed tree, so mutation during
/// one language's rewrite can never leak into another's. The rewritten
/// tree is serialized back to HTML and the original is left untouched.
pub fn translate_document(
    html: &str,
    backend: &dyn TranslationBackend,
) -> Result<Translations, PolyglotError> {
    tracing::debug!("开始翻译文档: {} 字节输入", html.len());

    let mut translations: Translations = Vec::with_capacity(TARGET_LANGUAGES.len());

    for (language, code) in TARGET_LANGUAGES.iter() {
        let dom = html_to_dom(html)?;
        let translator = ChunkedTranslator::new(backend, code);
        rewrite_dom(&dom, &translator);
        translations.push(((*language).to_string(), serialize_fragment(dom)));
    }

    tracing::debug!("文档翻译完成: {} 种语言", translations.len());

    Ok(translations)
}
