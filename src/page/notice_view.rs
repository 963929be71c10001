use super::ui_lib::{elements::HtmlElement, html_view::HtmlView};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            Self::Info => "notice notice-info",
            Self::Success => "notice notice-success",
            Self::Warning => "notice notice-warning",
            Self::Error => "notice notice-error",
        }
    }
}

/// A colored message box.
pub struct NoticeView {
    kind: NoticeKind,
    message: String,
}

impl NoticeView {
    pub fn new(kind: NoticeKind, message: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
        }
    }
}

impl HtmlView for NoticeView {
    fn html_body(&self) -> impl HtmlView {
        HtmlElement::new("div")
            .class(self.kind.class())
            .attribute("role", "status")
            .text(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use crate::page::ui_lib::test_support::assert_html;

    use super::*;

    #[test]
    fn renders_kind_as_class() {
        assert_html(
            &NoticeView::new(NoticeKind::Error, "Désolé, je n'ai pas compris."),
            r#"<div class="notice notice-error" role="status">Désolé, je n&#x27;ai pas compris.</div>"#,
        )
    }
}
