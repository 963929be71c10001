use strum_macros::IntoStaticStr;

/// A single recorded utterance.
///
/// A clip is captured for exactly one transcription and is consumed by it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AudioClip {
    bytes: Vec<u8>,
    content_type: Option<String>,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>, content_type: Option<String>) -> Self {
        Self {
            bytes,
            content_type,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the encoding of this clip as inferred from its MIME type.
    pub fn encoding(&self) -> AudioEncoding {
        self.content_type
            .as_deref()
            .map(AudioEncoding::from_content_type)
            .unwrap_or(AudioEncoding::Unspecified)
    }
}

/// Audio encodings understood by the transcription service.
#[derive(Debug, PartialEq, Eq, Clone, Copy, IntoStaticStr)]
pub enum AudioEncoding {
    #[strum(serialize = "FLAC")]
    Flac,
    #[strum(serialize = "LINEAR16")]
    Linear16,
    #[strum(serialize = "OGG_OPUS")]
    OggOpus,
    #[strum(serialize = "WEBM_OPUS")]
    WebmOpus,
    #[strum(serialize = "ENCODING_UNSPECIFIED")]
    Unspecified,
}

impl AudioEncoding {
    fn from_content_type(content_type: &str) -> Self {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match mime.as_str() {
            "audio/flac" | "audio/x-flac" => Self::Flac,
            "audio/wav" | "audio/x-wav" | "audio/wave" | "audio/l16" => Self::Linear16,
            "audio/ogg" | "audio/opus" => Self::OggOpus,
            "audio/webm" | "video/webm" => Self::WebmOpus,
            _ => Self::Unspecified,
        }
    }

    /// The sample rate to declare for this encoding, if the service requires one.
    ///
    /// Opus recordings from browsers are 48kHz, FLAC and WAV carry their rate in a header.
    pub fn declared_sample_rate(&self) -> Option<u32> {
        match self {
            Self::OggOpus | Self::WebmOpus => Some(48_000),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(content_type: Option<&str>) -> AudioClip {
        AudioClip::new(vec![1, 2, 3], content_type.map(|c| c.to_string()))
    }

    #[test]
    fn infers_encoding_from_content_type() {
        assert_eq!(clip(Some("audio/flac")).encoding(), AudioEncoding::Flac);
        assert_eq!(clip(Some("audio/wav")).encoding(), AudioEncoding::Linear16);
        assert_eq!(clip(Some("audio/ogg")).encoding(), AudioEncoding::OggOpus);
    }

    #[test]
    fn ignores_content_type_parameters_and_case() {
        assert_eq!(
            clip(Some("Audio/WebM; codecs=opus")).encoding(),
            AudioEncoding::WebmOpus
        )
    }

    #[test]
    fn unknown_or_missing_content_type_is_unspecified() {
        assert_eq!(clip(Some("application/octet-stream")).encoding(), AudioEncoding::Unspecified);
        assert_eq!(clip(None).encoding(), AudioEncoding::Unspecified)
    }

    #[test]
    fn only_opus_declares_a_sample_rate() {
        assert_eq!(AudioEncoding::WebmOpus.declared_sample_rate(), Some(48_000));
        assert_eq!(AudioEncoding::Flac.declared_sample_rate(), None)
    }
}
