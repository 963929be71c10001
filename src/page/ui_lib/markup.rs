use super::html_view::HtmlView;

/// Rendered html.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct HtmlMarkup(String);

impl HtmlMarkup {
    pub(super) fn new() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl HtmlMarkup {
    pub(super) fn push_view(&mut self, view: &impl HtmlView) {
        view.html_body()._push_markup_into(self)
    }

    pub(super) fn push_raw(&mut self, raw: &str) {
        self.0.push_str(raw)
    }

    pub(super) fn push_escaped(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '&' => self.0.push_str("&amp;"),
                '<' => self.0.push_str("&lt;"),
                '>' => self.0.push_str("&gt;"),
                '"' => self.0.push_str("&quot;"),
                '\'' => self.0.push_str("&#x27;"),
                _ => self.0.push(c),
            }
        }
    }
}
