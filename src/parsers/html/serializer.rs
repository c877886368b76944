use html5ever::serialize::{serialize, SerializeOpts};
use markup5ever_rcdom::{RcDom, SerializableHandle};

use super::dom::fragment_root;

/// 将片段树序列化回 HTML 文本
///
/// 只序列化合成根元素的子节点，片段外壳不会出现在输出里。
pub fn serialize_fragment(dom: RcDom) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if let Some(root) = fragment_root(&dom) {
        let serializable: SerializableHandle = root.into();
        serialize(&mut buf, &serializable, SerializeOpts::default())
            .expect("Unable to serialize DOM into buffer");
    }

    String::from_utf8_lossy(&buf).into_owned()
}
