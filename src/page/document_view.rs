use super::ui_lib::{any_view::AnyHtmlView, elements::HtmlElement, html_view::HtmlView};

const STYLESHEET: &str = "
body { font-family: sans-serif; max-width: 42rem; margin: 2rem auto; padding: 0 1rem; }
.modes { display: flex; gap: 1rem; margin: 1rem 0; }
.mode-selected { font-weight: bold; }
.notice { padding: 0.75rem; border-radius: 0.25rem; margin: 1rem 0; }
.notice-info { background: #e7f1fb; }
.notice-success { background: #e6f4ea; }
.notice-warning { background: #fff4e5; }
.notice-error { background: #fdecea; }
textarea { width: 100%; height: 100px; }
";

/// Wraps a view in a complete html document.
pub struct DocumentView<'v, Body: HtmlView> {
    title: &'static str,
    body: &'v Body,
}

impl<'v, Body: HtmlView> DocumentView<'v, Body> {
    pub fn new(title: &'static str, body: &'v Body) -> Self {
        Self { title, body }
    }
}

impl<'v, Body: HtmlView> HtmlView for DocumentView<'v, Body> {
    fn html_body(&self) -> impl HtmlView {
        let head = HtmlElement::new("head")
            .child(HtmlElement::void("meta").attribute("charset", "utf-8"))
            .child(
                HtmlElement::void("meta")
                    .attribute("name", "viewport")
                    .attribute("content", "width=device-width, initial-scale=1"),
            )
            .child(HtmlElement::new("title").text(self.title))
            .child(HtmlElement::new("style").child(AnyHtmlView::trusted(STYLESHEET)));
        AnyHtmlView::trusted("<!DOCTYPE html>").chain(
            HtmlElement::new("html")
                .attribute("lang", "fr")
                .child(head)
                .child(HtmlElement::new("body").child(AnyHtmlView::erasing(self.body))),
        )
    }
}
