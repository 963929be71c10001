use std::path::PathBuf;

use log::warn;

use crate::{
    knowledge::matcher::{respond, ChatResponse},
    language::normalize::TextNormalizer,
    speech::{
        audio::AudioClip,
        recognizer::{SpeechRecognitionError, SpeechRecognizer},
    },
};

use super::load_knowledge_base::LoadKnowledgeBaseStatus;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ListenStatus {
    Answered {
        transcript: String,
        response: ChatResponse,
    },
    NotUnderstood,
    ServiceUnavailable,
    MissingKnowledgeBase(PathBuf),
}

impl ListenStatus {
    /// Transcribes `clip` and answers the transcript.
    ///
    /// When transcription fails, the failure is the status and nothing is matched.
    pub async fn from_listening(
        clip: AudioClip,
        recognizer: &impl SpeechRecognizer,
        knowledge: &LoadKnowledgeBaseStatus,
        normalizer: &TextNormalizer,
    ) -> Self {
        let knowledge_base = match knowledge {
            LoadKnowledgeBaseStatus::Loaded(knowledge_base) => knowledge_base,
            LoadKnowledgeBaseStatus::MissingFile(path) => {
                return Self::MissingKnowledgeBase(path.clone())
            }
        };
        match recognizer.recognize(clip).await {
            Ok(transcript) if !transcript.trim().is_empty() => {
                let transcript = transcript.trim().to_string();
                let response = respond(&transcript, knowledge_base, normalizer);
                Self::Answered {
                    transcript,
                    response,
                }
            }
            Ok(_) | Err(SpeechRecognitionError::NoSpeechDetected) => Self::NotUnderstood,
            Err(SpeechRecognitionError::ServiceUnavailable) => {
                warn!("Speech recognition was unavailable for a voice query.");
                Self::ServiceUnavailable
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use crate::knowledge::{base::KnowledgeBase, matcher::FALLBACK_RESPONSE};

    use super::{test_support::TestSpeechRecognizer, *};

    fn loaded() -> LoadKnowledgeBaseStatus {
        LoadKnowledgeBaseStatus::Loaded(KnowledgeBase::from_text(
            "The cat sat on the mat. Dogs are loyal animals.",
            &TextNormalizer::default(),
        ))
    }

    fn clip() -> AudioClip {
        AudioClip::new(vec![1, 2, 3], Some("audio/wav".to_string()))
    }

    #[tokio::test]
    async fn answers_the_transcript() {
        let recognizer = TestSpeechRecognizer::new(Ok(" where did the cat sit "));
        let status =
            ListenStatus::from_listening(clip(), &recognizer, &loaded(), &TextNormalizer::default())
                .await;
        match status {
            ListenStatus::Answered {
                transcript,
                response,
            } => {
                assert_eq!(transcript, "where did the cat sit");
                assert_eq!(response.text(), "The cat sat on the mat.")
            }
            _ => panic!(),
        }
    }

    #[tokio::test]
    async fn unmatched_transcript_gets_the_fallback() {
        let recognizer = TestSpeechRecognizer::new(Ok("quantum physics"));
        let status =
            ListenStatus::from_listening(clip(), &recognizer, &loaded(), &TextNormalizer::default())
                .await;
        match status {
            ListenStatus::Answered { response, .. } => {
                assert_eq!(response.text(), FALLBACK_RESPONSE)
            }
            _ => panic!(),
        }
    }

    #[tokio::test]
    async fn no_speech_is_not_understood() {
        let recognizer = TestSpeechRecognizer::new(Err(SpeechRecognitionError::NoSpeechDetected));
        let status =
            ListenStatus::from_listening(clip(), &recognizer, &loaded(), &TextNormalizer::default())
                .await;
        assert_eq!(status, ListenStatus::NotUnderstood)
    }

    #[tokio::test]
    async fn blank_transcript_is_not_understood() {
        let recognizer = TestSpeechRecognizer::new(Ok("   "));
        let status =
            ListenStatus::from_listening(clip(), &recognizer, &loaded(), &TextNormalizer::default())
                .await;
        assert_eq!(status, ListenStatus::NotUnderstood)
    }

    #[tokio::test]
    async fn unavailable_service_is_reported() {
        let recognizer = TestSpeechRecognizer::new(Err(SpeechRecognitionError::ServiceUnavailable));
        let status =
            ListenStatus::from_listening(clip(), &recognizer, &loaded(), &TextNormalizer::default())
                .await;
        assert_eq!(status, ListenStatus::ServiceUnavailable)
    }

    #[tokio::test]
    async fn missing_knowledge_base_skips_recognition() {
        let recognizer = TestSpeechRecognizer::new(Ok("where did the cat sit"));
        let knowledge = LoadKnowledgeBaseStatus::MissingFile(PathBuf::from("connaissances.txt"));
        let status =
            ListenStatus::from_listening(clip(), &recognizer, &knowledge, &TextNormalizer::default())
                .await;
        assert_eq!(
            status,
            ListenStatus::MissingKnowledgeBase(PathBuf::from("connaissances.txt"))
        );
        assert_eq!(recognizer.calls(), 0)
    }
}
