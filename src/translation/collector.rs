//! 文本叶子收集器模块
//!
//! 在任何改写发生之前对 DOM 树做一次快照，收集所有需要处理的
//! 文本叶子及其分类。改写阶段只按节点身份操作这份快照，绝不
//! 一边遍历一边修改正在变化的结构。

use markup5ever_rcdom::{Handle, NodeData};

/// 其直接子文本永不参与翻译的元素标签
pub const PRESERVE_TAGS: [&str; 2] = ["code", "pre"];

/// 文本叶子的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafDisposition {
    /// 短代码占位符，整个节点从树中摘除
    Remove,
    /// 普通可见文本，送往翻译
    Translate,
}

/// 待处理的文本叶子
pub struct TextLeaf {
    /// 节点引用，改写阶段按它定位
    pub node: Handle,
    /// 未修剪的原始文本内容
    pub text: String,
    /// 分类结果
    pub disposition: LeafDisposition,
}

/// 收集树中所有需要处理的文本叶子
///
/// 深度优先、文档顺序。保持原样的叶子（纯空白、code/pre 的
/// 直接子文本）不进快照。
pub fn collect_text_leaves(root: &Handle) -> Vec<TextLeaf> {
    let mut leaves = Vec::new();
    collect_recursive(root, None, &mut leaves);
    leaves
}

fn collect_recursive(node: &Handle, parent_tag: Option<&str>, leaves: &mut Vec<TextLeaf>) {
    match node.data {
        NodeData::Text { ref contents } => {
            let text = contents.borrow().to_string();
            if let Some(disposition) = classify(&text, parent_tag) {
                leaves.push(TextLeaf {
                    node: node.clone(),
                    text,
                    disposition,
                });
            }
        }
        NodeData::Element { ref name, .. } => {
            let tag_name = name.local.as_ref();
            for child in node.children.borrow().iter() {
                collect_recursive(child, Some(tag_name), leaves);
            }
        }
        _ => {
            for child in node.children.borrow().iter() {
                collect_recursive(child, parent_tag, leaves);
            }
        }
    }
}

/// 按修剪后的内容对单个文本叶子分类
///
/// 返回 None 表示叶子保持原样。短代码的判定是修剪后的内容同时
/// 含有 `[` 和 `]`，这是一个包含性检查而不是括号匹配，只有 `[`
/// 没有 `]` 的文本按普通文本翻译。
pub fn classify(text: &str, parent_tag: Option<&str>) -> Option<LeafDisposition> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return None;
    }

    if parent_tag.map_or(false, |tag| PRESERVE_TAGS.contains(&tag)) {
        return None;
    }

    if trimmed.contains('[') && trimmed.contains(']') {
        return Some(LeafDisposition::Remove);
    }

    Some(LeafDisposition::Translate)
}
