use std::path::Path;

use crate::{
    knowledge::matcher::ChatResponse,
    operations::{ask::AskStatus, listen::ListenStatus},
    session::ChatTurn,
};

use super::{
    notice_view::{NoticeKind, NoticeView},
    ui_lib::{elements::HtmlElement, empty_view::EmptyHtmlView, html_view::HtmlView},
};

pub const NOT_UNDERSTOOD_MESSAGE: &str = "Désolé, je n'ai pas compris.";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Erreur avec le service de reconnaissance vocale.";

/// Renders the outcome of the last interaction.
pub struct TurnView<'t> {
    turn: &'t ChatTurn,
}

impl<'t> TurnView<'t> {
    pub fn new(turn: &'t ChatTurn) -> Self {
        Self { turn }
    }
}

impl<'t> HtmlView for TurnView<'t> {
    fn html_body(&self) -> impl HtmlView {
        match self.turn {
            ChatTurn::Asked(AskStatus::Answered { response, .. }) => {
                ResponseView::new(response).erase_to_any_view()
            }
            ChatTurn::Asked(AskStatus::EmptyQuery) => EmptyHtmlView.erase_to_any_view(),
            ChatTurn::Asked(AskStatus::MissingKnowledgeBase(path))
            | ChatTurn::Listened(ListenStatus::MissingKnowledgeBase(path)) => {
                MissingKnowledgeBaseView::new(path).erase_to_any_view()
            }
            ChatTurn::Listened(ListenStatus::Answered {
                transcript,
                response,
            }) => NoticeView::new(
                NoticeKind::Success,
                &format!("Vous avez dit : {}", transcript),
            )
            .chain(ResponseView::new(response))
            .erase_to_any_view(),
            ChatTurn::Listened(ListenStatus::NotUnderstood) => {
                NoticeView::new(NoticeKind::Error, NOT_UNDERSTOOD_MESSAGE).erase_to_any_view()
            }
            ChatTurn::Listened(ListenStatus::ServiceUnavailable) => {
                NoticeView::new(NoticeKind::Error, SERVICE_UNAVAILABLE_MESSAGE).erase_to_any_view()
            }
        }
    }
}

/// The read-only area displaying the chatbot's answer.
pub struct ResponseView<'r> {
    response: &'r ChatResponse,
}

impl<'r> ResponseView<'r> {
    pub fn new(response: &'r ChatResponse) -> Self {
        Self { response }
    }
}

impl<'r> HtmlView for ResponseView<'r> {
    fn html_body(&self) -> impl HtmlView {
        HtmlElement::new("label")
            .attribute("for", "response")
            .text("Réponse du chatbot :")
            .chain(
                HtmlElement::new("textarea")
                    .attribute("id", "response")
                    .attribute("rows", "4")
                    .flag("readonly", true)
                    .text(self.response.text()),
            )
    }
}

/// The warning shown instead of the chat when the knowledge base file does not exist.
pub struct MissingKnowledgeBaseView<'p> {
    path: &'p Path,
}

impl<'p> MissingKnowledgeBaseView<'p> {
    pub fn new(path: &'p Path) -> Self {
        Self { path }
    }
}

impl<'p> HtmlView for MissingKnowledgeBaseView<'p> {
    fn html_body(&self) -> impl HtmlView {
        NoticeView::new(
            NoticeKind::Warning,
            &format!(
                "Veuillez placer un fichier `{}` dans le dossier du projet.",
                self.path.display()
            ),
        )
    }
}
