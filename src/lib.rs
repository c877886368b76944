//! # Polyglot Library
//!
//! 将一段 HTML 片段翻译为一组固定目标语言，同时保持标记结构不变。
//!
//! ## 模块组织
//!
//! - `core` - 核心错误类型与多语言编排
//! - `parsers` - HTML 片段解析与序列化
//! - `translation` - 文本叶子收集、树改写与分块翻译客户端
//! - `web` - Web 表单外壳

pub mod core;
pub mod parsers;
pub mod translation;
pub mod web;

// Re-export commonly used items for convenience
pub use crate::core::{translate_document, PolyglotError, Translations};
pub use crate::parsers::html::{html_to_dom, serialize_fragment};
pub use crate::translation::{
    ChunkedTranslator, DeepLxBackend, DeepLxConfig, TranslationBackend, TranslationError,
    TARGET_LANGUAGES,
};
