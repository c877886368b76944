//! 分块翻译客户端模块
//!
//! 翻译服务对单次请求有输入长度上限，超长文本按固定字符上限
//! 做纯位置切分，逐块翻译后按原顺序无分隔符拼接。单块失败以
//! 原文回填，整篇文档的翻译因此永不中断。

use crate::translation::client::TranslationBackend;

/// 单次翻译调用接受的最大字符数
pub const DEFAULT_CHUNK_CEILING: usize = 5000;

/// 分块翻译客户端
///
/// 每个 (文档, 目标语言) 对使用一个独立实例，实例之间没有
/// 共享可变状态。
pub struct ChunkedTranslator<'a> {
    backend: &'a dyn TranslationBackend,
    target_lang: String,
    chunk_ceiling: usize,
}

impl<'a> ChunkedTranslator<'a> {
    /// 创建使用默认分块上限的客户端
    pub fn new(backend: &'a dyn TranslationBackend, target_lang: &str) -> Self {
        Self::with_chunk_ceiling(backend, target_lang, DEFAULT_CHUNK_CEILING)
    }

    /// 创建指定分块上限的客户端
    pub fn with_chunk_ceiling(
        backend: &'a dyn TranslationBackend,
        target_lang: &str,
        chunk_ceiling: usize,
    ) -> Self {
        assert!(chunk_ceiling > 0);

        Self {
            backend,
            target_lang: target_lang.to_string(),
            chunk_ceiling,
        }
    }

    /// 翻译一段任意长度的文本
    ///
    /// 返回值与输入分块一一对应：成功的块是译文，失败的块是
    /// 原文，按原顺序拼接。本方法从不返回错误。
    pub fn translate(&self, text: &str) -> String {
        let mut translated = String::with_capacity(text.len());

        for (index, chunk) in split_chunks(text, self.chunk_ceiling).into_iter().enumerate() {
            match self.backend.translate(chunk, "auto", &self.target_lang) {
                Ok(result) => translated.push_str(&result),
                Err(e) => {
                    tracing::warn!("分块 {} 翻译失败，保留原文: {}", index + 1, e);
                    translated.push_str(chunk);
                }
            }
        }

        translated
    }
}

/// 按字符数上限切分文本
///
/// 纯位置切分，不对词句边界做调整；切分点总是落在字符边界上，
/// 多字节字符不会被切坏。
fn split_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let split_at = rest
            .char_indices()
            .nth(max_chars)
            .map(|(byte_index, _)| byte_index)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(split_at);
        chunks.push(head);
        rest = tail;
    }

    chunks
}
