use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::fs::read;

use crate::{knowledge::base::KnowledgeBase, language::normalize::TextNormalizer};

pub const DEFAULT_KNOWLEDGE_BASE_PATH: &str = "connaissances.txt";

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum LoadKnowledgeBaseStatus {
    Loaded(KnowledgeBase),
    MissingFile(PathBuf),
}

impl LoadKnowledgeBaseStatus {
    /// Reads the UTF-8 text file at `path` and splits it into a knowledge base.
    ///
    /// A missing file is reported as a status so it can be shown to the user. Any other read
    /// failure, or content that is not valid UTF-8, is an error.
    pub async fn from_loading(path: impl AsRef<Path>, normalizer: &TextNormalizer) -> Result<Self> {
        let path = path.as_ref();
        let bytes = match read(path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                warn!("No knowledge base found at {}.", path.display());
                return Ok(Self::MissingFile(path.to_path_buf()));
            }
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("Failed to read knowledge base {}", path.display()))
            }
        };
        let corpus = String::from_utf8(bytes)
            .with_context(|| format!("Knowledge base {} is not valid UTF-8", path.display()))?;
        let knowledge_base = KnowledgeBase::from_text(corpus.trim_start_matches('\u{feff}'), normalizer);
        if knowledge_base.is_empty() {
            warn!("Knowledge base {} has no sentences, every answer will be the fallback.", path.display());
        } else {
            info!("Loaded {} knowledge sentences from {}.", knowledge_base.len(), path.display());
        }
        Ok(Self::Loaded(knowledge_base))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn knowledge_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[tokio::test]
    async fn reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connaissances.txt");
        let status = LoadKnowledgeBaseStatus::from_loading(&path, &TextNormalizer::default())
            .await
            .unwrap();
        assert_eq!(status, LoadKnowledgeBaseStatus::MissingFile(path))
    }

    #[tokio::test]
    async fn loads_sentences_in_order() {
        let file = knowledge_file(
            "Mangez cinq fruits et légumes par jour. Buvez de l'eau régulièrement.".as_bytes(),
        );
        let status = LoadKnowledgeBaseStatus::from_loading(file.path(), &TextNormalizer::default())
            .await
            .unwrap();
        match status {
            LoadKnowledgeBaseStatus::Loaded(base) => {
                let texts = base.sentences().iter().map(|s| s.text()).collect::<Vec<&str>>();
                assert_eq!(
                    texts,
                    vec!["Mangez cinq fruits et légumes par jour.", "Buvez de l'eau régulièrement."]
                )
            }
            _ => panic!(),
        }
    }

    #[tokio::test]
    async fn skips_byte_order_mark() {
        let file = knowledge_file("\u{feff}Dormez bien.".as_bytes());
        let status = LoadKnowledgeBaseStatus::from_loading(file.path(), &TextNormalizer::default())
            .await
            .unwrap();
        match status {
            LoadKnowledgeBaseStatus::Loaded(base) => assert_eq!(base.sentences()[0].text(), "Dormez bien."),
            _ => panic!(),
        }
    }

    #[tokio::test]
    async fn empty_file_loads_an_empty_base() {
        let file = knowledge_file(b"");
        let status = LoadKnowledgeBaseStatus::from_loading(file.path(), &TextNormalizer::default())
            .await
            .unwrap();
        assert_eq!(status, LoadKnowledgeBaseStatus::Loaded(KnowledgeBase::empty()))
    }

    #[tokio::test]
    async fn invalid_utf8_is_an_error() {
        let file = knowledge_file(&[0x66, 0x72, 0xff, 0xfe, 0x69]);
        let result = LoadKnowledgeBaseStatus::from_loading(file.path(), &TextNormalizer::default()).await;
        assert!(result.is_err())
    }
}
