//! Web 服务器模块
//!
//! 为翻译核心提供一个薄的表单外壳：粘贴 HTML 进来，每种目标
//! 语言一个结果文本框出去。核心是同步阻塞的，请求在阻塞线程池
//! 上执行，不占用异步运行时。

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Form, Router};
use serde::Deserialize;
use tokio::task;
use tower_http::trace::TraceLayer;

use crate::core::{translate_document, PolyglotError, Translations};
use crate::translation::client::{DeepLxBackend, DeepLxConfig};

/// Web 服务器配置
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// 绑定地址
    pub bind_addr: String,
    /// 端口
    pub port: u16,
    /// 翻译 API 地址，None 时使用后端默认值
    pub api_url: Option<String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 7080,
            api_url: None,
        }
    }
}

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    backend_config: DeepLxConfig,
}

/// 翻译表单
#[derive(Deserialize)]
pub struct TranslateForm {
    html_content: String,
}

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig) -> Self {
        Self { config }
    }

    /// 启动 Web 服务器
    pub async fn start(&self) -> Result<(), PolyglotError> {
        let mut backend_config = DeepLxConfig::default();
        if let Some(ref api_url) = self.config.api_url {
            backend_config.api_url = api_url.clone();
        }

        let state = Arc::new(AppState { backend_config });

        let app = Router::new()
            .route("/", get(form_page).post(translate_page))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = format!("{}:{}", self.config.bind_addr, self.config.port);
        tracing::info!("Web 服务器启动: http://{}", addr);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| PolyglotError::new(&format!("无法绑定地址 {}: {}", addr, e)))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| PolyglotError::new(&format!("Web 服务器错误: {}", e)))
    }
}

async fn form_page() -> Html<String> {
    Html(render_form_page())
}

async fn translate_page(
    State(state): State<Arc<AppState>>,
    Form(form): Form<TranslateForm>,
) -> Html<String> {
    let backend_config = state.backend_config.clone();
    let html_content = form.html_content;

    tracing::info!("收到翻译请求: {} 字节", html_content.len());

    // 每个请求一个全新的后端绑定，请求之间没有共享可变状态
    let input = html_content.clone();
    let result = task::spawn_blocking(move || -> Result<Translations, PolyglotError> {
        let backend = DeepLxBackend::new(backend_config)
            .map_err(|e| PolyglotError::new(&e.to_string()))?;
        translate_document(&input, &backend)
    })
    .await;

    match result {
        Ok(Ok(translations)) => Html(render_result_page(&html_content, &translations)),
        Ok(Err(e)) => {
            tracing::error!("文档翻译失败: {}", e);
            Html(render_error_page(&e.to_string()))
        }
        Err(e) => {
            tracing::error!("后台任务失败: {}", e);
            Html(render_error_page("internal error"))
        }
    }
}

const FORM_HEADER: &str = concat!(
    "<h2>Translate HTML Content</h2>\n",
    "<form method=\"POST\">\n",
    "    <textarea name=\"html_content\" rows=\"10\" cols=\"100\" ",
    "placeholder=\"Enter HTML content here\">",
);

const FORM_FOOTER: &str = concat!(
    "</textarea><br><br>\n",
    "    <input type=\"submit\" value=\"Translate\">\n",
    "</form>\n",
);

const COPY_SCRIPT: &str = concat!(
    "<script>\n",
    "    function copyToClipboard(elementId) {\n",
    "        var copyText = document.getElementById(elementId);\n",
    "        copyText.select();\n",
    "        copyText.setSelectionRange(0, 99999);\n",
    "        document.execCommand(\"copy\");\n",
    "        alert(\"Copied to clipboard: \" + elementId);\n",
    "    }\n",
    "</script>\n",
);

/// 渲染初始表单页
pub fn render_form_page() -> String {
    let mut page = String::new();
    page.push_str(FORM_HEADER);
    page.push_str(FORM_FOOTER);
    page
}

/// 渲染翻译结果页
///
/// 结果文本框按语言表顺序排列，每个带一个复制按钮。
pub fn render_result_page(original: &str, translations: &Translations) -> String {
    let mut page = String::new();

    page.push_str(FORM_HEADER);
    page.push_str(&escape_html(original));
    page.push_str(FORM_FOOTER);

    page.push_str("<h2>Translated HTML Content</h2>\n");
    for (language, html) in translations {
        page.push_str(&format!("<h3>{}:</h3>\n", capitalize(language)));
        page.push_str(&format!(
            "<textarea id=\"{}\" rows=\"10\" cols=\"100\">{}</textarea><br>\n",
            language,
            escape_html(html)
        ));
        page.push_str(&format!(
            "<button onclick=\"copyToClipboard('{}')\">Copy</button><br><br>\n",
            language
        ));
    }

    page.push_str("<a href=\"/\">Translate another</a>\n");
    page.push_str(COPY_SCRIPT);
    page
}

/// 渲染错误页
pub fn render_error_page(message: &str) -> String {
    format!(
        "<h2>Translation failed</h2>\n<p>{}</p>\n<a href=\"/\">Try again</a>\n",
        escape_html(message)
    )
}

/// textarea 内容的最小 HTML 转义
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// 首字母大写的语言标题
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::languages::TARGET_LANGUAGES;

    #[test]
    fn escape_handles_markup_and_ampersands() {
        assert_eq!(
            escape_html("<p>Fish &amp; chips</p>"),
            "&lt;p&gt;Fish &amp;amp; chips&lt;/p&gt;"
        );
    }

    #[test]
    fn result_page_lists_languages_in_table_order() {
        let translations: Translations = TARGET_LANGUAGES
            .iter()
            .map(|(language, code)| ((*language).to_string(), format!("<p>{}</p>", code)))
            .collect();

        let page = render_result_page("<p>hi</p>", &translations);

        let mut last_position = 0;
        for (language, _) in TARGET_LANGUAGES.iter() {
            let marker = format!("<h3>{}:</h3>", capitalize(language));
            let position = page.find(&marker).expect("language heading missing");
            assert!(position > last_position, "languages out of order");
            last_position = position;
        }
    }

    #[test]
    fn result_page_escapes_textarea_content() {
        let translations: Translations =
            vec![("german".to_string(), "<p>Hallo</p>".to_string())];

        let page = render_result_page("<p>Hello</p>", &translations);

        assert!(page.contains("&lt;p&gt;Hallo&lt;/p&gt;"));
        assert!(!page.contains("<p>Hallo</p>"));
    }
}
