/// App management types
use super::enums::{AppState, JobStatus, SourceKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An available or installed app.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub source_kind: SourceKind,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<HashMap<String, serde_json::Value>>,
}

impl AppInfo {
    pub fn new(name: impl Into<String>, source_kind: SourceKind) -> Self {
        Self {
            name: name.into(),
            source_kind,
            ..Self::default()
        }
    }
}

/// Status of the currently running app.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppStatus {
    pub info: AppInfo,
    pub state: AppState,
    pub error: Option<String>,
}

/// Background install/remove job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JobInfo {
    pub command: String,
    pub status: JobStatus,
    pub logs: Vec<String>,
}

/// Body of `POST /api/apps/install-private-space`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivateSpaceInstallRequest {
    pub space_id: String,
}
