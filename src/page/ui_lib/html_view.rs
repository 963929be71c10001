use super::{any_view::AnyHtmlView, chain_view::_ChainHtmlView, markup::HtmlMarkup};

/// A trait for implementing an html view.
///
/// Views are composed of other views and rendered into a flat string of markup. Views are
/// implemented using the `html_body` method, where they must return another `HtmlView`.
pub trait HtmlView: Sized {
    /// The content of this view.
    fn html_body(&self) -> impl HtmlView;

    /// Renders `other` directly after this view.
    fn chain<Other: HtmlView>(self, other: Other) -> _ChainHtmlView<Self, Other> {
        _ChainHtmlView::new(self, other)
    }

    /// Erases the type of this view, which lets different branches of a match return the
    /// same view type.
    fn erase_to_any_view(self) -> AnyHtmlView {
        AnyHtmlView::erasing(&self)
    }

    fn _push_markup_into(&self, markup: &mut HtmlMarkup) {
        markup.push_view(self)
    }
}

/// Renders `view` into markup.
pub fn render_html_view(view: &impl HtmlView) -> HtmlMarkup {
    let mut markup = HtmlMarkup::new();
    view._push_markup_into(&mut markup);
    markup
}
