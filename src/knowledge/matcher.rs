use log::debug;

use crate::language::normalize::TextNormalizer;

use super::base::KnowledgeBase;

/// The response given when no knowledge sentence shares a stem with the query.
pub const FALLBACK_RESPONSE: &str = "Je suis désolé, je ne comprends pas.";

/// The chatbot's answer to a single query.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ChatResponse {
    /// The knowledge sentence at `index` had the highest overlap with the query.
    Matched {
        index: usize,
        sentence: String,
        score: usize,
    },
    /// No knowledge sentence shares a stem with the query, or the knowledge base is empty.
    Fallback,
}

impl ChatResponse {
    /// The text shown to the user.
    pub fn text(&self) -> &str {
        match self {
            Self::Matched { sentence, .. } => sentence,
            Self::Fallback => FALLBACK_RESPONSE,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
struct ScoredCandidate {
    index: usize,
    score: usize,
}

/// Answers `query` with the knowledge sentence that shares the most distinct stems with it.
///
/// Scores are the size of the intersection between the query's stems and a sentence's stems,
/// both taken as sets. Among equal scores the earliest sentence wins. A best score of zero,
/// including the case of an empty knowledge base, yields `ChatResponse::Fallback`.
pub fn respond(
    query: &str,
    knowledge_base: &KnowledgeBase,
    normalizer: &TextNormalizer,
) -> ChatResponse {
    let query_tokens = normalizer.normalize(query);
    debug!(
        "Normalized query {:?} into \"{}\".",
        query,
        query_tokens.to_normalized_string()
    );
    if query_tokens.is_empty() {
        debug!("Query has no stems left after normalization.");
        return ChatResponse::Fallback;
    }
    let best = knowledge_base
        .sentences()
        .iter()
        .enumerate()
        .map(|(index, sentence)| ScoredCandidate {
            index,
            score: query_tokens.overlap(sentence.stems()),
        })
        .fold(None, |best: Option<ScoredCandidate>, candidate| match best {
            Some(best) if best.score >= candidate.score => Some(best),
            _ => Some(candidate),
        });
    match best {
        Some(candidate) if candidate.score > 0 => {
            debug!(
                "Matched sentence {} with a score of {}.",
                candidate.index, candidate.score
            );
            ChatResponse::Matched {
                index: candidate.index,
                sentence: knowledge_base.sentences()[candidate.index].text().to_string(),
                score: candidate.score,
            }
        }
        _ => {
            debug!("No knowledge sentence overlaps with the query.");
            ChatResponse::Fallback
        }
    }
}
