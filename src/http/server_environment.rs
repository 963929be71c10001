use anyhow::Result;
use log::info;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    language::{normalize::TextNormalizer, normalizer_language::NormalizerLanguage},
    operations::load_knowledge_base::{LoadKnowledgeBaseStatus, DEFAULT_KNOWLEDGE_BASE_PATH},
    session::ChatSession,
    speech::{google::GoogleSpeechRecognizer, recognizer::SpeechRecognizer},
    utils::env::{env_or, optional_env, parsed_env_or, ChatbotEnvironment},
};

const DEFAULT_SPEECH_LANGUAGE_CODE: &str = "fr-FR";

/// A data type containing necessary structs for server operations.
///
/// The environment owns the single chat session served by the app. Interactions lock the
/// session, so they are applied one at a time.
pub struct ServerEnvironment<Recognizer: SpeechRecognizer = GoogleSpeechRecognizer> {
    session: Mutex<ChatSession>,
    normalizer: TextNormalizer,
    recognizer: Recognizer,
    address: String,
}

impl ServerEnvironment {
    /// The production environment.
    pub async fn prod() -> Result<Self> {
        Self::from_env("0.0.0.0:8080").await
    }

    /// The development environment.
    pub async fn dev() -> Result<Self> {
        Self::from_env("127.0.0.1:8082").await
    }

    /// Returns the current environment.
    ///
    /// If the CHATBOT_ENV environment variable is "dev", then the development environment is used.
    /// Otherwise, the production environment is used.
    pub async fn current() -> Result<Self> {
        match ChatbotEnvironment::current() {
            ChatbotEnvironment::Dev => {
                info!("Using dev ServerEnvironment.");
                Self::dev().await
            }
            ChatbotEnvironment::Prod => {
                info!("Using production ServerEnvironment.");
                Self::prod().await
            }
        }
    }

    async fn from_env(default_address: &str) -> Result<Self> {
        let language = parsed_env_or("NORMALIZER_LANGUAGE", NormalizerLanguage::default())?;
        info!("Normalizing text with the {} stopwords and stemmer.", language);
        let normalizer = TextNormalizer::new(language);
        let knowledge_base_path = env_or("KNOWLEDGE_BASE_PATH", DEFAULT_KNOWLEDGE_BASE_PATH);
        let knowledge =
            LoadKnowledgeBaseStatus::from_loading(&knowledge_base_path, &normalizer).await?;
        let recognizer = GoogleSpeechRecognizer::new(
            Client::new(),
            optional_env("GOOGLE_SPEECH_API_KEY"),
            &env_or("SPEECH_LANGUAGE_CODE", DEFAULT_SPEECH_LANGUAGE_CODE),
        );
        info!("Transcribing speech as {}.", recognizer.language_code());
        Ok(Self::new(
            knowledge,
            normalizer,
            recognizer,
            &env_or("CHATBOT_ADDRESS", default_address),
        ))
    }
}

impl<Recognizer: SpeechRecognizer> ServerEnvironment<Recognizer> {
    pub fn new(
        knowledge: LoadKnowledgeBaseStatus,
        normalizer: TextNormalizer,
        recognizer: Recognizer,
        address: &str,
    ) -> Self {
        Self {
            session: Mutex::new(ChatSession::new(knowledge)),
            normalizer,
            recognizer,
            address: address.to_string(),
        }
    }
}

impl<Recognizer: SpeechRecognizer> ServerEnvironment<Recognizer> {
    pub fn session(&self) -> &Mutex<ChatSession> {
        &self.session
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn recognizer(&self) -> &Recognizer {
        &self.recognizer
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}
