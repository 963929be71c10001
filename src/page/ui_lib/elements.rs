use super::{
    empty_view::EmptyHtmlView,
    html_view::{render_html_view, HtmlView},
    markup::HtmlMarkup,
};

/// Escaped text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HtmlText {
    text: String,
}

impl HtmlText {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl HtmlView for HtmlText {
    #[allow(refining_impl_trait)]
    fn html_body(&self) -> EmptyHtmlView {
        EmptyHtmlView
    }

    fn _push_markup_into(&self, markup: &mut HtmlMarkup) {
        markup.push_escaped(&self.text)
    }
}

/// An html element with attributes and children.
///
/// Attribute values and text are escaped. Void elements (ex. `input`) never render children
/// or a closing tag.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HtmlElement {
    tag: &'static str,
    attributes: Vec<(&'static str, Option<String>)>,
    children: HtmlMarkup,
    is_void: bool,
}

impl HtmlElement {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: vec![],
            children: HtmlMarkup::default(),
            is_void: false,
        }
    }

    pub fn void(tag: &'static str) -> Self {
        Self {
            is_void: true,
            ..Self::new(tag)
        }
    }
}

impl HtmlElement {
    pub fn attribute(mut self, name: &'static str, value: &str) -> Self {
        self.attributes.push((name, Some(value.to_string())));
        self
    }

    /// Adds a boolean attribute (ex. `readonly`) when `is_enabled` is true.
    pub fn flag(mut self, name: &'static str, is_enabled: bool) -> Self {
        if is_enabled {
            self.attributes.push((name, None));
        }
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.attribute("class", class)
    }

    pub fn text(self, text: &str) -> Self {
        self.child(HtmlText::new(text))
    }

    pub fn child(mut self, view: impl HtmlView) -> Self {
        let rendered = render_html_view(&view);
        self.children.push_raw(rendered.as_str());
        self
    }
}

impl HtmlView for HtmlElement {
    #[allow(refining_impl_trait)]
    fn html_body(&self) -> EmptyHtmlView {
        EmptyHtmlView
    }

    fn _push_markup_into(&self, markup: &mut HtmlMarkup) {
        markup.push_raw("<");
        markup.push_raw(self.tag);
        for (name, value) in self.attributes.iter() {
            markup.push_raw(" ");
            markup.push_raw(name);
            if let Some(value) = value {
                markup.push_raw("=\"");
                markup.push_escaped(value);
                markup.push_raw("\"");
            }
        }
        markup.push_raw(">");
        if self.is_void {
            return;
        }
        markup.push_raw(self.children.as_str());
        markup.push_raw("</");
        markup.push_raw(self.tag);
        markup.push_raw(">")
    }
}
