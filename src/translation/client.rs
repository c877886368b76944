//! 翻译后端模块
//!
//! 定义远程翻译能力的统一接口，并提供 DeepLX 风格的 HTTP 实现。
//! 任何满足 (text, source, target) -> text 契约的服务都可以替换
//! 进来，测试里用的就是进程内的模拟后端。

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::translation::error::{TranslationError, TranslationResult};

/// 远程翻译能力的统一接口
pub trait TranslationBackend {
    /// 将一段文本从 source_lang 翻译到 target_lang
    ///
    /// source_lang 通常传 "auto"，由服务端自行检测源语言。
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String>;
}

/// DeepLX 后端配置
#[derive(Debug, Clone)]
pub struct DeepLxConfig {
    /// 翻译 API 地址
    pub api_url: String,
    /// 单次请求超时
    pub timeout: Duration,
}

impl Default for DeepLxConfig {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:1188/translate".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// DeepLX 风格的 HTTP 翻译后端
///
/// 同步阻塞调用，单次失败直接返回错误，不做重试。
pub struct DeepLxBackend {
    client: reqwest::blocking::Client,
    config: DeepLxConfig,
}

#[derive(Serialize)]
struct TranslateRequestBody<'a> {
    text: &'a str,
    source_lang: &'a str,
    target_lang: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponseBody {
    code: i64,
    data: Option<String>,
}

impl DeepLxBackend {
    /// 创建新的后端
    pub fn new(config: DeepLxConfig) -> TranslationResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TranslationError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

impl TranslationBackend for DeepLxBackend {
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String> {
        let body = TranslateRequestBody {
            text,
            source_lang,
            target_lang,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    TranslationError::TimeoutError(e.to_string())
                } else {
                    TranslationError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::TranslationServiceError(format!(
                "HTTP {}",
                status
            )));
        }

        let parsed: TranslateResponseBody = response
            .json()
            .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

        match parsed.data {
            Some(data) if parsed.code == 200 => Ok(data),
            _ => Err(TranslationError::TranslationServiceError(format!(
                "服务返回代码 {}",
                parsed.code
            ))),
        }
    }
}
