use super::{html_view::HtmlView, markup::HtmlMarkup};

/// A view to use as a placeholder when no other view can be returned from the `html_body`
/// method of another view.
pub struct EmptyHtmlView;

impl HtmlView for EmptyHtmlView {
    #[allow(refining_impl_trait)]
    fn html_body(&self) -> EmptyHtmlView {
        EmptyHtmlView
    }

    fn _push_markup_into(&self, _: &mut HtmlMarkup) {}
}

#[cfg(test)]
mod tests {
    use crate::page::ui_lib::{elements::HtmlText, test_support::assert_html};

    use super::*;

    struct ChainWithEmptyView;

    impl HtmlView for ChainWithEmptyView {
        fn html_body(&self) -> impl HtmlView {
            HtmlText::new("I am bob!").chain(EmptyHtmlView)
        }
    }

    #[test]
    fn renders_nothing() {
        assert_html(&ChainWithEmptyView, "I am bob!")
    }
}
