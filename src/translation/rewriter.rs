//! 树改写器模块
//!
//! 对单个目标语言执行一次就地改写：先拿到文本叶子快照，再按
//! 节点身份摘除短代码、替换可翻译文本。元素嵌套、标签名和属性
//! 全部保持不变，只有文本叶子会变。

use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::parsers::html::dom::detach_node;
use crate::translation::chunked::ChunkedTranslator;
use crate::translation::collector::{collect_text_leaves, LeafDisposition};

/// 就地改写一棵文档树
///
/// 翻译失败由分块客户端内部消化，本函数不会失败。
pub fn rewrite_dom(dom: &RcDom, translator: &ChunkedTranslator<'_>) {
    let leaves = collect_text_leaves(&dom.document);
    tracing::debug!("快照收集到 {} 个待处理文本叶子", leaves.len());

    for leaf in leaves {
        match leaf.disposition {
            LeafDisposition::Remove => detach_node(&leaf.node),
            LeafDisposition::Translate => {
                // 送翻译的是未修剪的原文，替换后保留首尾空白
                let translated = translator.translate(&leaf.text);
                set_text_content(&leaf.node, &translated);
            }
        }
    }
}

/// 用新文本替换文本节点的内容，节点在兄弟中的位置不变
fn set_text_content(node: &Handle, new_text: &str) {
    if let NodeData::Text { ref contents } = node.data {
        let mut contents = contents.borrow_mut();
        contents.clear();
        contents.push_slice(new_text);
    }
}
