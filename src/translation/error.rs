//! 翻译模块统一错误处理

use thiserror::Error;

/// 翻译错误类型
///
/// 这些错误只在后端与分块客户端之间流动，分块客户端全部
/// 就地消化，不会越过文档边界。
#[derive(Error, Debug, Clone)]
pub enum TranslationError {
    /// 网络错误
    #[error("网络错误: {0}")]
    NetworkError(String),

    /// 翻译服务错误
    #[error("翻译服务错误: {0}")]
    TranslationServiceError(String),

    /// 超时错误
    #[error("操作超时: {0}")]
    TimeoutError(String),

    /// 响应解析错误
    #[error("响应解析错误: {0}")]
    InvalidResponse(String),
}

/// 错误结果类型别名
pub type TranslationResult<T> = Result<T, TranslationError>;
