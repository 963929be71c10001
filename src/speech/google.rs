use base64::{engine::general_purpose::STANDARD, Engine};
use log::{info, warn};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::{
    audio::AudioClip,
    recognizer::{SpeechRecognitionError, SpeechRecognizer},
};

const RECOGNIZE_ENDPOINT: &str = "https://speech.googleapis.com/v1/speech:recognize";

/// A `SpeechRecognizer` backed by the Google Cloud Speech-to-Text API.
pub struct GoogleSpeechRecognizer {
    http_client: Client,
    api_key: Option<String>,
    language_code: String,
    endpoint: String,
}

impl GoogleSpeechRecognizer {
    pub fn new(http_client: Client, api_key: Option<String>, language_code: &str) -> Self {
        Self {
            http_client,
            api_key,
            language_code: language_code.to_string(),
            endpoint: RECOGNIZE_ENDPOINT.to_string(),
        }
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct RecognizeConfig<'a> {
    encoding: &'static str,
    language_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_rate_hertz: Option<u32>,
}

#[derive(Debug, Serialize, PartialEq)]
struct RecognitionAudio {
    content: String,
}

#[derive(Debug, Serialize, PartialEq)]
struct RecognizeRequest<'a> {
    config: RecognizeConfig<'a>,
    audio: RecognitionAudio,
}

impl<'a> RecognizeRequest<'a> {
    fn new(clip: &AudioClip, language_code: &'a str) -> Self {
        let encoding = clip.encoding();
        Self {
            config: RecognizeConfig {
                encoding: encoding.into(),
                language_code,
                sample_rate_hertz: encoding.declared_sample_rate(),
            },
            audio: RecognitionAudio {
                content: STANDARD.encode(clip.bytes()),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Debug, Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Debug, Deserialize)]
struct RecognitionAlternative {
    #[serde(default)]
    transcript: String,
}

impl RecognizeResponse {
    /// Joins the most likely alternative of every result.
    fn transcript(&self) -> Result<String, SpeechRecognitionError> {
        let transcript = self
            .results
            .iter()
            .filter_map(|result| result.alternatives.first())
            .map(|alternative| alternative.transcript.trim())
            .filter(|transcript| !transcript.is_empty())
            .collect::<Vec<&str>>()
            .join(" ");
        if transcript.is_empty() {
            Err(SpeechRecognitionError::NoSpeechDetected)
        } else {
            Ok(transcript)
        }
    }
}

fn error_for_status(status: StatusCode) -> SpeechRecognitionError {
    if status == StatusCode::BAD_REQUEST {
        SpeechRecognitionError::NoSpeechDetected
    } else {
        SpeechRecognitionError::ServiceUnavailable
    }
}

impl SpeechRecognizer for GoogleSpeechRecognizer {
    async fn recognize(&self, clip: AudioClip) -> Result<String, SpeechRecognitionError> {
        if clip.is_empty() {
            return Err(SpeechRecognitionError::NoSpeechDetected);
        }
        let Some(api_key) = self.api_key.as_ref() else {
            warn!("GOOGLE_SPEECH_API_KEY is not set, speech recognition is unavailable.");
            return Err(SpeechRecognitionError::ServiceUnavailable);
        };
        let request = RecognizeRequest::new(&clip, &self.language_code);
        let resp = self
            .http_client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|error| {
                warn!("Failed to reach the speech recognition service: {}.", error);
                SpeechRecognitionError::ServiceUnavailable
            })?;
        let status = resp.status();
        if !status.is_success() {
            warn!("The speech recognition service responded with {}.", status);
            return Err(error_for_status(status));
        }
        let body = resp.json::<RecognizeResponse>().await.map_err(|error| {
            warn!("Failed to decode the speech recognition response: {}.", error);
            SpeechRecognitionError::ServiceUnavailable
        })?;
        let transcript = body.transcript()?;
        info!("Transcribed {} bytes of audio.", clip.bytes().len());
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_encodes_audio_and_language() {
        let clip = AudioClip::new(b"hello".to_vec(), Some("audio/webm;codecs=opus".to_string()));
        let request = RecognizeRequest::new(&clip, "fr-FR");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "config": {
                    "encoding": "WEBM_OPUS",
                    "languageCode": "fr-FR",
                    "sampleRateHertz": 48000
                },
                "audio": { "content": "aGVsbG8=" }
            })
        )
    }

    #[test]
    fn request_omits_sample_rate_for_headered_formats() {
        let clip = AudioClip::new(vec![0; 4], Some("audio/flac".to_string()));
        let value = serde_json::to_value(RecognizeRequest::new(&clip, "fr-FR")).unwrap();
        assert_eq!(value["config"]["encoding"], "FLAC");
        assert!(value["config"].get("sampleRateHertz").is_none())
    }

    #[test]
    fn transcript_joins_best_alternatives() {
        let response = serde_json::from_value::<RecognizeResponse>(json!({
            "results": [
                { "alternatives": [{ "transcript": " quels fruits ", "confidence": 0.9 }, { "transcript": "quel fruit" }] },
                { "alternatives": [{ "transcript": "manger" }] }
            ]
        }))
        .unwrap();
        assert_eq!(response.transcript(), Ok("quels fruits manger".to_string()))
    }

    #[test]
    fn empty_response_means_no_speech() {
        let response = serde_json::from_value::<RecognizeResponse>(json!({})).unwrap();
        assert_eq!(response.transcript(), Err(SpeechRecognitionError::NoSpeechDetected))
    }

    #[test]
    fn rejected_audio_means_no_speech() {
        assert_eq!(
            error_for_status(StatusCode::BAD_REQUEST),
            SpeechRecognitionError::NoSpeechDetected
        );
        assert_eq!(
            error_for_status(StatusCode::FORBIDDEN),
            SpeechRecognitionError::ServiceUnavailable
        );
        assert_eq!(
            error_for_status(StatusCode::SERVICE_UNAVAILABLE),
            SpeechRecognitionError::ServiceUnavailable
        )
    }

    #[tokio::test]
    async fn missing_api_key_means_service_unavailable() {
        let recognizer = GoogleSpeechRecognizer::new(Client::new(), None, "fr-FR");
        let clip = AudioClip::new(vec![1, 2, 3], Some("audio/wav".to_string()));
        assert_eq!(
            recognizer.recognize(clip).await,
            Err(SpeechRecognitionError::ServiceUnavailable)
        )
    }

    #[tokio::test]
    async fn empty_clip_means_no_speech_even_without_api_key() {
        let recognizer = GoogleSpeechRecognizer::new(Client::new(), None, "fr-FR");
        let clip = AudioClip::new(vec![], None);
        assert_eq!(
            recognizer.recognize(clip).await,
            Err(SpeechRecognitionError::NoSpeechDetected)
        )
    }

    #[tokio::test]
    async fn unreachable_service_means_service_unavailable() {
        let mut recognizer =
            GoogleSpeechRecognizer::new(Client::new(), Some("key".to_string()), "fr-FR");
        recognizer.endpoint = "http://127.0.0.1:9/speech:recognize".to_string();
        let clip = AudioClip::new(vec![1, 2, 3], Some("audio/wav".to_string()));
        assert_eq!(
            recognizer.recognize(clip).await,
            Err(SpeechRecognitionError::ServiceUnavailable)
        )
    }
}
