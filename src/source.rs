use crate::fingerprint::Fingerprint;

/// A loaded audio source: the raw bytes of an uploaded file, or a remote URL
/// handed to the embedded player.
///
/// Only uploaded bytes can be transcribed locally; remote sources are
/// playback-only until server-side download lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    Upload { bytes: Vec<u8> },
    Remote { url: String },
}

impl AudioSource {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Upload {
            bytes: bytes.into(),
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self::Remote { url: url.into() }
    }

    /// Cache identity for this source: a digest of the audio bytes for
    /// uploads, of the URL string for remote sources.
    pub fn fingerprint(&self) -> Fingerprint {
        match self {
            AudioSource::Upload { bytes } => Fingerprint::of_bytes(bytes),
            AudioSource::Remote { url } => Fingerprint::of_url(url),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, AudioSource::Remote { .. })
    }
}
