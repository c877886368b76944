//! 解析器模块
//!
//! - `html`: HTML 片段解析、DOM 操作与序列化

pub mod html;
