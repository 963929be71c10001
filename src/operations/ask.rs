use std::path::PathBuf;

use crate::{
    knowledge::matcher::{respond, ChatResponse},
    language::normalize::TextNormalizer,
};

use super::load_knowledge_base::LoadKnowledgeBaseStatus;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AskStatus {
    Answered { query: String, response: ChatResponse },
    EmptyQuery,
    MissingKnowledgeBase(PathBuf),
}

impl AskStatus {
    pub fn from_asking(
        query: &str,
        knowledge: &LoadKnowledgeBaseStatus,
        normalizer: &TextNormalizer,
    ) -> Self {
        let knowledge_base = match knowledge {
            LoadKnowledgeBaseStatus::Loaded(knowledge_base) => knowledge_base,
            LoadKnowledgeBaseStatus::MissingFile(path) => {
                return Self::MissingKnowledgeBase(path.clone())
            }
        };
        let query = query.trim();
        if query.is_empty() {
            return Self::EmptyQuery;
        }
        Self::Answered {
            query: query.to_string(),
            response: respond(query, knowledge_base, normalizer),
        }
    }
}
