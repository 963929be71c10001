use std::collections::HashSet;

use crate::language::normalize::TextNormalizer;

use super::sentences::split_sentences;

/// A sentence of the knowledge base along with the distinct stems it normalizes to.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct KnowledgeSentence {
    text: String,
    stems: HashSet<String>,
}

impl KnowledgeSentence {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn stems(&self) -> &HashSet<String> {
        &self.stems
    }
}

/// An ordered, immutable list of sentences that the chatbot answers from.
///
/// Each sentence is normalized once when the knowledge base is built. Queries must be
/// normalized with the same `TextNormalizer` for their stems to be comparable.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct KnowledgeBase {
    sentences: Vec<KnowledgeSentence>,
}

impl KnowledgeBase {
    pub fn new(sentences: Vec<String>, normalizer: &TextNormalizer) -> Self {
        let sentences = sentences
            .into_iter()
            .map(|text| KnowledgeSentence {
                stems: normalizer.normalize(&text).to_set(),
                text,
            })
            .collect();
        Self { sentences }
    }

    /// Builds a knowledge base by splitting `text` into sentences.
    pub fn from_text(text: &str, normalizer: &TextNormalizer) -> Self {
        Self::new(split_sentences(text), normalizer)
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl KnowledgeBase {
    pub fn sentences(&self) -> &[KnowledgeSentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_keeps_sentence_order() {
        let base = KnowledgeBase::from_text(
            "The cat sat on the mat. Dogs are loyal animals.",
            &TextNormalizer::default(),
        );
        let texts = base.sentences().iter().map(|s| s.text()).collect::<Vec<&str>>();
        assert_eq!(texts, vec!["The cat sat on the mat.", "Dogs are loyal animals."])
    }

    #[test]
    fn caches_distinct_stems_per_sentence() {
        let base = KnowledgeBase::new(
            vec!["The cat and the other cat sat.".to_string()],
            &TextNormalizer::default(),
        );
        let expected = ["cat", "sat"].iter().map(|s| s.to_string()).collect::<HashSet<String>>();
        assert_eq!(base.sentences()[0].stems(), &expected)
    }

    #[test]
    fn empty_text_builds_an_empty_base() {
        let base = KnowledgeBase::from_text("", &TextNormalizer::default());
        assert!(base.is_empty());
        assert_eq!(base, KnowledgeBase::empty())
    }
}
