use crate::session::InputMode;

use super::ui_lib::{elements::HtmlElement, html_view::HtmlView};

/// Links that switch between typed and spoken input.
pub struct ModeSelectorView {
    selected: InputMode,
}

impl ModeSelectorView {
    pub fn new(selected: InputMode) -> Self {
        Self { selected }
    }
}

impl HtmlView for ModeSelectorView {
    fn html_body(&self) -> impl HtmlView {
        HtmlElement::new("nav")
            .class("modes")
            .child(HtmlElement::new("span").text("Choisissez un mode d'entrée :"))
            .child(self.mode_link(InputMode::Text, "Texte"))
            .child(self.mode_link(InputMode::Voice, "Voix"))
    }
}

impl ModeSelectorView {
    fn mode_link(&self, mode: InputMode, label: &str) -> HtmlElement {
        let name: &'static str = mode.into();
        let link = HtmlElement::new("a").attribute("href", &format!("/?mode={}", name));
        let link = if mode == self.selected {
            link.class("mode mode-selected").attribute("aria-current", "true")
        } else {
            link.class("mode")
        };
        link.text(label)
    }
}

#[cfg(test)]
mod tests {
    use crate::page::ui_lib::test_support::assert_html_contains;

    use super::*;

    #[test]
    fn marks_the_selected_mode() {
        assert_html_contains(
            &ModeSelectorView::new(InputMode::Voice),
            &[
                r#"<a href="/?mode=texte" class="mode">Texte</a>"#,
                r#"<a href="/?mode=voix" class="mode mode-selected" aria-current="true">Voix</a>"#,
            ],
        )
    }
}
