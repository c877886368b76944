//! HTML 解析和处理模块
//!
//! - `dom`: 片段解析与基础 DOM 操作
//! - `serializer`: 序列化功能

pub mod dom;
pub mod serializer;

pub use dom::{detach_node, fragment_root, get_child_node_by_name, html_to_dom};
pub use serializer::serialize_fragment;
