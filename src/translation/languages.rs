//! 目标语言表模块
//!
//! 固定的目标语言枚举表，不可由用户配置。表的顺序就是
//! 输出顺序。

/// (语言名称, 语言代码) 固定表
pub const TARGET_LANGUAGES: [(&str, &str); 7] = [
    ("german", "de"),
    ("french", "fr"),
    ("arabic", "ar"),
    ("korean", "ko"),
    ("japanese", "ja"),
    ("portuguese", "pt"),
    ("spanish", "es"),
];
