use super::{empty_view::EmptyHtmlView, html_view::HtmlView, markup::HtmlMarkup};

/// A view that renders `View` only when a value is present.
pub struct IfLet<'v, Value, View: HtmlView, MakeView: Fn(&'v Value) -> View> {
    value: Option<&'v Value>,
    make_view: MakeView
}

impl <
    'v,
    Value,
    View: HtmlView,
    MakeView: Fn(&'v Value) -> View
> IfLet<'v, Value, View, MakeView> {
    pub fn some(value: Option<&'v Value>, make_view: MakeView) -> Self {
        Self { value, make_view }
    }
}

impl <
    'v,
    Value,
    View: HtmlView,
    MakeView: Fn(&'v Value) -> View
> HtmlView for IfLet<'v, Value, View, MakeView> {
    #[allow(refining_impl_trait)]
    fn html_body(&self) -> EmptyHtmlView {
        EmptyHtmlView
    }

    fn _push_markup_into(&self, markup: &mut HtmlMarkup) {
        if let Some(value) = self.value {
            (self.make_view)(value)._push_markup_into(markup)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::page::ui_lib::{elements::HtmlText, test_support::assert_html};

    use super::*;

    #[test]
    fn renders_when_value_present() {
        let name = "Bob".to_string();
        assert_html(&IfLet::some(Some(&name), |n| HtmlText::new(n)), "Bob")
    }

    #[test]
    fn renders_nothing_when_value_absent() {
        assert_html(&IfLet::some(None::<&String>, |n| HtmlText::new(n)), "")
    }
}
