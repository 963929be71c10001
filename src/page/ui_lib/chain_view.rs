use super::{empty_view::EmptyHtmlView, html_view::HtmlView, markup::HtmlMarkup};

pub struct _ChainHtmlView<Base: HtmlView, Other: HtmlView> {
    base: Base,
    other: Other
}

impl <Base: HtmlView, Other: HtmlView> _ChainHtmlView<Base, Other> {
    pub(super) fn new(base: Base, other: Other) -> Self {
        Self { base, other }
    }
}

impl <Base: HtmlView, Other: HtmlView> HtmlView for _ChainHtmlView<Base, Other> {
    #[allow(refining_impl_trait)]
    fn html_body(&self) -> EmptyHtmlView {
        EmptyHtmlView
    }

    fn _push_markup_into(&self, markup: &mut HtmlMarkup) {
        self.base._push_markup_into(markup);
        self.other._push_markup_into(markup)
    }
}
