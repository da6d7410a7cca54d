/// Volume and HuggingFace auth types
use serde::{Deserialize, Serialize};

/// Body of the volume setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeRequest {
    /// 0-100
    pub volume: u8,
}

impl VolumeRequest {
    pub const MAX: u8 = 100;

    pub fn new(volume: u8) -> Self {
        Self { volume }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VolumeResponse {
    pub volume: u8,
    pub device: String,
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TestSoundResponse {
    pub status: String,
    pub message: String,
}

/// Body of `POST /api/hf-auth/save-token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
    pub token: String,
}

impl TokenRequest {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenResponse {
    pub status: String,
    pub username: Option<String>,
    pub message: Option<String>,
}
