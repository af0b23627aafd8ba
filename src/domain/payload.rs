use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Transport envelope handed to the gate by the deployment pipeline.
///
/// AppConfig sends additional metadata (application id, profile id, version)
/// alongside `content`; those fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationPayload {
    /// Base64-encoded configuration document.
    pub content: String,
}

impl ConfigurationPayload {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Wrap raw document bytes, encoding them the way the pipeline does.
    pub fn from_document(document: impl AsRef<[u8]>) -> Self {
        Self::new(STANDARD.encode(document))
    }
}
