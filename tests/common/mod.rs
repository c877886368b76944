// 集成测试公共模块
//
// 提供模拟翻译后端与 HTML 测试辅助工具

use std::cell::RefCell;

use markup5ever_rcdom::{Handle, NodeData, RcDom};

use polyglot::translation::{TranslationBackend, TranslationError, TranslationResult};
use polyglot::TARGET_LANGUAGES;

/// 恒等后端：原样返回输入，用于验证结构不变性
pub struct IdentityBackend;

impl TranslationBackend for IdentityBackend {
    fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> TranslationResult<String> {
        Ok(text.to_string())
    }
}

/// 一次被记录的后端调用
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// 记录后端：记录每次调用，译文为输入的大写
pub struct RecordingBackend {
    pub calls: RefCell<Vec<RecordedCall>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl TranslationBackend for RecordingBackend {
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult<String> {
        self.calls.borrow_mut().push(RecordedCall {
            text: text.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        });
        Ok(text.to_uppercase())
    }
}

/// 间歇失败后端：指定序号（从 1 计）的调用失败，其余返回大写译文
pub struct FailingBackend {
    fail_on: Vec<usize>,
    counter: RefCell<usize>,
}

impl FailingBackend {
    pub fn failing_on(calls: &[usize]) -> Self {
        Self {
            fail_on: calls.to_vec(),
            counter: RefCell::new(0),
        }
    }
}

impl TranslationBackend for FailingBackend {
    fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> TranslationResult<String> {
        let mut counter = self.counter.borrow_mut();
        *counter += 1;
        if self.fail_on.contains(&*counter) {
            Err(TranslationError::NetworkError(
                "connection reset by peer".to_string(),
            ))
        } else {
            Ok(text.to_uppercase())
        }
    }
}

/// 全失败后端：模拟完全不可用的翻译服务
pub struct AlwaysFailingBackend;

impl TranslationBackend for AlwaysFailingBackend {
    fn translate(
        &self,
        _text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> TranslationResult<String> {
        Err(TranslationError::TranslationServiceError(
            "service unavailable".to_string(),
        ))
    }
}

/// HTML 测试工具
pub struct HtmlTestHelper;

impl HtmlTestHelper {
    /// 解析测试片段
    pub fn parse(html: &str) -> RcDom {
        polyglot::html_to_dom(html).expect("fragment should parse")
    }

    /// 收集 (标签, 属性) 骨架，文档顺序
    pub fn skeleton(html: &str) -> Vec<String> {
        let dom = Self::parse(html);
        let mut skeleton = Vec::new();
        collect_skeleton(&dom.document, &mut skeleton);
        skeleton
    }

    /// 收集所有文本节点内容，文档顺序
    pub fn text_nodes(html: &str) -> Vec<String> {
        let dom = Self::parse(html);
        let mut texts = Vec::new();
        collect_texts(&dom.document, &mut texts);
        texts
    }
}

fn collect_skeleton(node: &Handle, skeleton: &mut Vec<String>) {
    if let NodeData::Element {
        ref name,
        ref attrs,
        ..
    } = node.data
    {
        let rendered_attrs: Vec<String> = attrs
            .borrow()
            .iter()
            .map(|attr| format!("{}={}", attr.name.local, attr.value))
            .collect();
        skeleton.push(format!("{}[{}]", name.local, rendered_attrs.join(",")));
    }

    for child in node.children.borrow().iter() {
        collect_skeleton(child, skeleton);
    }
}

fn collect_texts(node: &Handle, texts: &mut Vec<String>) {
    if let NodeData::Text { ref contents } = node.data {
        texts.push(contents.borrow().to_string());
    }

    for child in node.children.borrow().iter() {
        collect_texts(child, texts);
    }
}

/// 断言辅助工具
pub struct AssertionHelper;

impl AssertionHelper {
    /// 断言结果覆盖全部目标语言且顺序与语言表一致
    pub fn assert_language_table_order(translations: &[(String, String)]) {
        assert_eq!(
            translations.len(),
            TARGET_LANGUAGES.len(),
            "Result should cover every configured language"
        );

        for (entry, (language, _code)) in translations.iter().zip(TARGET_LANGUAGES.iter()) {
            assert_eq!(
                entry.0, *language,
                "Languages should appear in table order"
            );
        }
    }
}
