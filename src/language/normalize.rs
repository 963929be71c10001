use std::collections::HashSet;

use rust_stemmers::Stemmer;
use unicode_segmentation::UnicodeSegmentation;

use super::{normalizer_language::NormalizerLanguage, stopwords::stopwords, tokens::NormalizedTokens};

/// Turns raw text into comparable word stems.
///
/// Normalization lowercases the text, splits it on Unicode word boundaries, drops stopwords
/// and lone punctuation characters, then stems what remains. The stopword tables and stemming
/// rules are compiled into the binary, so building a normalizer never touches the network and
/// building it more than once yields identical results.
pub struct TextNormalizer {
    language: NormalizerLanguage,
    stemmer: Stemmer,
    stopwords: &'static HashSet<&'static str>,
}

impl TextNormalizer {
    pub fn new(language: NormalizerLanguage) -> Self {
        Self {
            language,
            stemmer: Stemmer::create(language.stemming_algorithm()),
            stopwords: stopwords(language),
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(NormalizerLanguage::default())
    }
}

impl TextNormalizer {
    /// Normalizes `text` into its ordered stems, keeping duplicates.
    pub fn normalize(&self, text: &str) -> NormalizedTokens {
        let lowercased = text.to_lowercase().replace('’', "'");
        let stems = self
            .words(&lowercased)
            .into_iter()
            .filter(|word| !self.stopwords.contains(*word))
            .filter(|word| !is_punctuation_token(word))
            .map(|word| self.stemmer.stem(word).into_owned())
            .collect();
        NormalizedTokens::new(stems)
    }

    fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let splits_elisions = self.language.splits_elisions();
        text.split_word_bounds()
            .filter(|token| !token.trim().is_empty())
            .flat_map(|token| {
                if splits_elisions {
                    split_elision(token)
                } else {
                    vec![token]
                }
            })
            .collect()
    }
}

fn split_elision(token: &str) -> Vec<&str> {
    token
        .split('\'')
        .filter(|part| !part.is_empty())
        .collect()
}

fn is_punctuation_token(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => !c.is_alphanumeric(),
        _ => false,
    }
}
