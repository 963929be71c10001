use std::sync::Arc;

use serde::Deserialize;
use strum_macros::{EnumString, IntoStaticStr};

use crate::{
    language::normalize::TextNormalizer,
    operations::{
        ask::AskStatus, listen::ListenStatus, load_knowledge_base::LoadKnowledgeBaseStatus,
    },
    speech::{audio::AudioClip, recognizer::SpeechRecognizer},
};

/// How the user enters their question.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, EnumString, IntoStaticStr, Deserialize)]
pub enum InputMode {
    #[default]
    #[strum(serialize = "texte")]
    #[serde(rename = "texte")]
    Text,
    #[strum(serialize = "voix")]
    #[serde(rename = "voix")]
    Voice,
}

/// The outcome of the most recent interaction.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ChatTurn {
    Asked(AskStatus),
    Listened(ListenStatus),
}

/// The state of one conversation: its knowledge base, the selected input mode and the last
/// turn.
///
/// Sessions are values. Every interaction consumes the current session and returns the next
/// one.
#[derive(Debug, Clone)]
pub struct ChatSession {
    knowledge: Arc<LoadKnowledgeBaseStatus>,
    mode: InputMode,
    last_turn: Option<ChatTurn>,
}

impl ChatSession {
    pub fn new(knowledge: LoadKnowledgeBaseStatus) -> Self {
        Self {
            knowledge: Arc::new(knowledge),
            mode: InputMode::default(),
            last_turn: None,
        }
    }

    pub fn knowledge(&self) -> &LoadKnowledgeBaseStatus {
        &self.knowledge
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn last_turn(&self) -> Option<&ChatTurn> {
        self.last_turn.as_ref()
    }
}

impl ChatSession {
    /// Switches the input mode, clearing the last turn.
    pub fn with_mode(self, mode: InputMode) -> Self {
        Self {
            mode,
            last_turn: None,
            ..self
        }
    }

    /// Answers a typed query.
    pub fn ask(self, query: &str, normalizer: &TextNormalizer) -> Self {
        let status = AskStatus::from_asking(query, &self.knowledge, normalizer);
        Self {
            mode: InputMode::Text,
            last_turn: Some(ChatTurn::Asked(status)),
            ..self
        }
    }

    /// Transcribes and answers a spoken query.
    pub async fn listen(
        self,
        clip: AudioClip,
        recognizer: &impl SpeechRecognizer,
        normalizer: &TextNormalizer,
    ) -> Self {
        let status =
            ListenStatus::from_listening(clip, recognizer, &self.knowledge, normalizer).await;
        Self {
            mode: InputMode::Voice,
            last_turn: Some(ChatTurn::Listened(status)),
            ..self
        }
    }
}
