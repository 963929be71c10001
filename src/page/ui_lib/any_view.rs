use super::{
    empty_view::EmptyHtmlView,
    html_view::{render_html_view, HtmlView},
    markup::HtmlMarkup,
};

/// A type-erased view holding pre-rendered markup.
pub struct AnyHtmlView {
    markup: HtmlMarkup,
}

impl AnyHtmlView {
    pub fn erasing(view: &impl HtmlView) -> Self {
        Self {
            markup: render_html_view(view),
        }
    }

    /// Wraps markup that is already known to be safe, skipping escaping.
    pub fn trusted(raw: &str) -> Self {
        let mut markup = HtmlMarkup::new();
        markup.push_raw(raw);
        Self { markup }
    }
}

impl HtmlView for AnyHtmlView {
    #[allow(refining_impl_trait)]
    fn html_body(&self) -> EmptyHtmlView {
        EmptyHtmlView
    }

    fn _push_markup_into(&self, markup: &mut HtmlMarkup) {
        markup.push_raw(self.markup.as_str())
    }
}
