use crate::{
    operations::{ask::AskStatus, load_knowledge_base::LoadKnowledgeBaseStatus},
    session::{ChatSession, ChatTurn, InputMode},
};

use super::{
    document_view::DocumentView,
    mode_selector_view::ModeSelectorView,
    notice_view::{NoticeKind, NoticeView},
    turn_view::{MissingKnowledgeBaseView, TurnView},
    ui_lib::{
        elements::HtmlElement,
        html_view::{render_html_view, HtmlView},
        if_let_view::IfLet,
    },
};

pub const PAGE_TITLE: &str = "Chatbot Vocal: Conseil Santé";

/// Renders the full chat page for `session`.
pub fn render_chat_page(session: &ChatSession) -> String {
    let page = ChatPageView::new(session);
    render_html_view(&DocumentView::new(PAGE_TITLE, &page)).into_string()
}

pub struct ChatPageView<'s> {
    session: &'s ChatSession,
}

impl<'s> ChatPageView<'s> {
    pub fn new(session: &'s ChatSession) -> Self {
        Self { session }
    }
}

impl<'s> HtmlView for ChatPageView<'s> {
    fn html_body(&self) -> impl HtmlView {
        let header = HtmlElement::new("h1")
            .text(PAGE_TITLE)
            .chain(HtmlElement::new("p").text("Vous pouvez parler ou écrire une question."));
        match self.session.knowledge() {
            LoadKnowledgeBaseStatus::MissingFile(path) => header
                .chain(MissingKnowledgeBaseView::new(path))
                .erase_to_any_view(),
            LoadKnowledgeBaseStatus::Loaded(_) => header
                .chain(ModeSelectorView::new(self.session.mode()))
                .chain(self.input_form())
                .chain(IfLet::some(self.session.last_turn(), TurnView::new))
                .erase_to_any_view(),
        }
    }
}

impl<'s> ChatPageView<'s> {
    fn input_form(&self) -> HtmlElement {
        match self.session.mode() {
            InputMode::Text => HtmlElement::new("form")
                .attribute("method", "post")
                .attribute("action", "/ask")
                .child(
                    HtmlElement::new("label")
                        .attribute("for", "query")
                        .text("Entrez votre question :"),
                )
                .child(
                    HtmlElement::void("input")
                        .attribute("type", "text")
                        .attribute("id", "query")
                        .attribute("name", "query")
                        .attribute("value", self.last_query())
                        .flag("autofocus", true),
                )
                .child(
                    HtmlElement::new("button")
                        .attribute("type", "submit")
                        .text("Envoyer"),
                ),
            InputMode::Voice => HtmlElement::new("form")
                .attribute("method", "post")
                .attribute("action", "/listen")
                .attribute("enctype", "multipart/form-data")
                .child(NoticeView::new(NoticeKind::Info, "Parlez maintenant..."))
                .child(
                    HtmlElement::void("input")
                        .attribute("type", "file")
                        .attribute("name", "audio")
                        .attribute("accept", "audio/*")
                        .attribute("capture", "user")
                        .flag("required", true),
                )
                .child(
                    HtmlElement::new("button")
                        .attribute("type", "submit")
                        .text("Parler"),
                ),
        }
    }

    fn last_query(&self) -> &str {
        match self.session.last_turn() {
            Some(ChatTurn::Asked(AskStatus::Answered { query, .. })) => query,
            _ => "",
        }
    }
}
