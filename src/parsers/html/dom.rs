use std::rc::Rc;

use html5ever::tendril::TendrilSink;
use html5ever::{namespace_url, ns, parse_fragment, LocalName, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::core::PolyglotError;

/// 将 HTML 片段解析为 DOM
///
/// 以 body 为上下文做片段解析，粘贴进来的片段不会被包上
/// html/head/body 外壳，序列化后与输入同构。
pub fn html_to_dom(html: &str) -> Result<RcDom, PolyglotError> {
    parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), LocalName::from("body")),
        vec![],
    )
    .from_utf8()
    .read_from(&mut html.as_bytes())
    .map_err(|e| PolyglotError::new(&format!("无法解析 HTML 输入: {}", e)))
}

/// 取片段解析生成的合成根元素
///
/// 片段解析把所有内容挂在一个合成的 html 元素下面。
pub fn fragment_root(dom: &RcDom) -> Option<Handle> {
    get_child_node_by_name(&dom.document, "html")
}

/// 根据名称获取子节点
pub fn get_child_node_by_name(parent: &Handle, node_name: &str) -> Option<Handle> {
    let children = parent.children.borrow();
    let matching_children = children.iter().find(|child| match child.data {
        NodeData::Element { ref name, .. } => &*name.local == node_name,
        _ => false,
    });
    matching_children.cloned()
}

/// 将节点整个从树中摘除
///
/// 按 Rc 身份从父节点的子列表里移除，不留空文本残留。
pub fn detach_node(node: &Handle) {
    let parent = node.parent.take();
    if let Some(parent) = parent.and_then(|weak| weak.upgrade()) {
        parent
            .children
            .borrow_mut()
            .retain(|child| !Rc::ptr_eq(child, node));
    }
}
