use std::{
    error::Error,
    fmt::{Display, Formatter},
    future::Future,
};

use super::audio::AudioClip;

/// The ways a transcription can fail.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SpeechRecognitionError {
    /// The clip was received, but no speech could be made out of it.
    NoSpeechDetected,
    /// The transcription service could not be reached or refused to serve the request.
    ServiceUnavailable,
}

impl Display for SpeechRecognitionError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::NoSpeechDetected => write!(f, "No speech was detected in the audio clip"),
            Self::ServiceUnavailable => write!(f, "The speech recognition service is unavailable"),
        }
    }
}

impl Error for SpeechRecognitionError {}

/// A trait for turning a recorded utterance into text.
pub trait SpeechRecognizer {
    /// Transcribes `clip`, consuming it.
    fn recognize(
        &self,
        clip: AudioClip,
    ) -> impl Future<Output = Result<String, SpeechRecognitionError>> + Send;
}
