use super::html_view::{render_html_view, HtmlView};

/// Asserts the markup rendered by an html view.
pub fn assert_html(view: &impl HtmlView, expected: &str) {
    assert_eq!(render_html_view(view).as_str(), expected)
}

/// Asserts that the markup rendered by an html view contains every snippet in `expected`.
pub fn assert_html_contains(view: &impl HtmlView, expected: &[&str]) {
    let markup = render_html_view(view).into_string();
    for snippet in expected {
        assert!(markup.contains(snippet), "{} not found in {}", snippet, markup)
    }
}

/// Asserts that the markup rendered by an html view contains none of the snippets in `unexpected`.
pub fn assert_html_excludes(view: &impl HtmlView, unexpected: &[&str]) {
    let markup = render_html_view(view).into_string();
    for snippet in unexpected {
        assert!(!markup.contains(snippet), "{} unexpectedly found in {}", snippet, markup)
    }
}
