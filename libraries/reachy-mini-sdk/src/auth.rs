//! HuggingFace authentication management.

use crate::error::Result;
use crate::transport::Transport;
use crate::types::{StatusMap, TokenRequest, TokenResponse};
use std::collections::HashMap;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Client for the HuggingFace token stored on the daemon.
pub struct AuthClient<'a> {
    transport: &'a Transport,
    cancel: Option<CancellationToken>,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            transport,
            cancel: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Save a HuggingFace token; the daemon validates it first.
    pub async fn save_token(&self, request: &TokenRequest) -> Result<TokenResponse> {
        debug!("Saving HuggingFace token");

        let response: TokenResponse = self
            .transport
            .post_json("/api/hf-auth/save-token", request, self.cancel.as_ref())
            .await?;

        match response.username.as_deref() {
            Some(username) => info!(username = %username, "HuggingFace token saved"),
            None => warn!(
                status = %response.status,
                message = ?response.message,
                "HuggingFace token not accepted"
            ),
        }

        Ok(response)
    }

    /// Whether a HuggingFace token is stored, plus whatever details the
    /// daemon reports.
    pub async fn status(&self) -> Result<HashMap<String, serde_json::Value>> {
        self.transport
            .get("/api/hf-auth/status", self.cancel.as_ref())
            .await
    }

    pub async fn delete_token(&self) -> Result<StatusMap> {
        info!("Deleting HuggingFace token");
        self.transport
            .delete("/api/hf-auth/token", self.cancel.as_ref())
            .await
    }
}
