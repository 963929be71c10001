pub mod normalize;
pub mod normalizer_language;
pub mod stopwords;
pub mod tokens;
