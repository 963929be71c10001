use std::collections::HashSet;

/// The ordered stems produced by normalizing a piece of text.
///
/// Duplicates are kept. Callers that compare texts should use `distinct` or `overlap`, which
/// treat the stems as a set.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct NormalizedTokens {
    stems: Vec<String>,
}

impl NormalizedTokens {
    pub fn new(stems: Vec<String>) -> Self {
        Self { stems }
    }

    pub fn stems(&self) -> &[String] {
        &self.stems
    }

    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }

    /// Returns the distinct stems in order of first appearance.
    pub fn distinct(&self) -> impl Iterator<Item = &str> {
        let mut seen = HashSet::new();
        self.stems
            .iter()
            .map(|s| s.as_str())
            .filter(move |stem| seen.insert(*stem))
    }

    /// Returns the set of distinct stems.
    pub fn to_set(&self) -> HashSet<String> {
        self.stems.iter().cloned().collect()
    }

    /// Returns the number of distinct stems of this sequence that also appear in `other`.
    pub fn overlap(&self, other: &HashSet<String>) -> usize {
        self.distinct().filter(|stem| other.contains(*stem)).count()
    }

    /// Joins the stems with single spaces.
    pub fn to_normalized_string(&self) -> String {
        self.stems.join(" ")
    }
}
