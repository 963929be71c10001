use rust_stemmers::Algorithm;
use strum_macros::{Display, EnumString};

/// The language whose stopword set and stemming rules drive normalization.
///
/// The chatbot talks to its users in French, but normalization defaults to English. Switching
/// the default changes which knowledge sentences match, so it stays English until someone
/// decides otherwise.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum NormalizerLanguage {
    #[default]
    #[strum(serialize = "english")]
    English,
    #[strum(serialize = "french")]
    French,
}

impl NormalizerLanguage {
    pub(super) fn stemming_algorithm(&self) -> Algorithm {
        match self {
            Self::English => Algorithm::English,
            Self::French => Algorithm::French,
        }
    }

    /// Returns true if elided articles and pronouns (ex. "l'eau") should be split at the
    /// apostrophe before stopword removal.
    pub(super) fn splits_elisions(&self) -> bool {
        *self == Self::French
    }
}
