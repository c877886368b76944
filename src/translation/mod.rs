//! 翻译功能模块
//!
//! 文本叶子的收集与树改写、分块翻译客户端以及远程翻译后端。

pub mod chunked;
pub mod client;
pub mod collector;
pub mod error;
pub mod languages;
pub mod rewriter;

pub use chunked::{ChunkedTranslator, DEFAULT_CHUNK_CEILING};
pub use client::{DeepLxBackend, DeepLxConfig, TranslationBackend};
pub use collector::{collect_text_leaves, LeafDisposition, TextLeaf, PRESERVE_TAGS};
pub use error::{TranslationError, TranslationResult};
pub use languages::TARGET_LANGUAGES;
pub use rewriter::rewrite_dom;
