//! Daemon lifecycle operations.

use crate::error::Result;
use crate::transport::Transport;
use crate::types::{DaemonStatus, StatusMap};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Client for managing the Reachy Mini daemon.
pub struct DaemonClient<'a> {
    transport: &'a Transport,
    cancel: Option<CancellationToken>,
}

impl<'a> DaemonClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self {
            transport,
            cancel: None,
        }
    }

    /// Abort calls made through this client once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Start the daemon, optionally waking the robot up.
    pub async fn start(&self, wake_up: bool) -> Result<StatusMap> {
        info!(wake_up, "Starting daemon");
        self.transport
            .post(
                &format!("/api/daemon/start?wake_up={}", wake_up),
                self.cancel.as_ref(),
            )
            .await
    }

    /// Stop the daemon, optionally putting the robot to sleep first.
    pub async fn stop(&self, goto_sleep: bool) -> Result<StatusMap> {
        info!(goto_sleep, "Stopping daemon");
        self.transport
            .post(
                &format!("/api/daemon/stop?goto_sleep={}", goto_sleep),
                self.cancel.as_ref(),
            )
            .await
    }

    pub async fn restart(&self) -> Result<StatusMap> {
        info!("Restarting daemon");
        self.transport
            .post("/api/daemon/restart", self.cancel.as_ref())
            .await
    }

    /// Get the current status of the daemon.
    pub async fn status(&self) -> Result<DaemonStatus> {
        self.transport
            .get("/api/daemon/status", self.cancel.as_ref())
            .await
    }
}
