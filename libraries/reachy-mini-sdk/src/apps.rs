//! App management operations.
//!
//! Install and remove run as background jobs on the daemon: both return a
//! map holding a `job_id`, which [`AppsClient::job_status`] can poll.

use crate::error::Result;
use crate::transport::{encode_path_segment, Transport};
use crate::types::{AppInfo, AppStatus, JobInfo, PrivateSpaceInstallRequest, SourceKind, StatusMap};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Client for managing Reachy Mini apps.
pub struct AppsClient<'a> {
    transport: &'a Transport,
    cancel: Option<CancellationToken>,
}

impl<'a> AppsClient<'a> {
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

    /// Apps available from one kind of source.
    pub async fn list_available(&self, source_kind: SourceKind) -> Result<Vec<AppInfo>> {
        let apps: Vec<AppInfo> = self
            .transport
            .get(
                &format!("/api/apps/list-available/{}", source_kind.as_str()),
                self.cancel.as_ref(),
            )
            .await?;

        debug!(source_kind = %source_kind, count = apps.len(), "Listed available apps");
        Ok(apps)
    }

    /// All available apps, installed or not.
    pub async fn list_all_available(&self) -> Result<Vec<AppInfo>> {
        self.transport
            .get("/api/apps/list-available", self.cancel.as_ref())
            .await
    }

    pub async fn install(&self, app: &AppInfo) -> Result<StatusMap> {
        info!(app = %app.name, source_kind = %app.source_kind, "Installing app");
        self.transport
            .post_json("/api/apps/install", app, self.cancel.as_ref())
            .await
    }

    pub async fn remove(&self, app_name: &str) -> Result<StatusMap> {
        info!(app = %app_name, "Removing app");
        self.transport
            .post(
                &format!("/api/apps/remove/{}", encode_path_segment(app_name)),
                self.cancel.as_ref(),
            )
            .await
    }

    /// Status and logs of a background job.
    pub async fn job_status(&self, job_id: &str) -> Result<JobInfo> {
        self.transport
            .get(
                &format!("/api/apps/job-status/{}", encode_path_segment(job_id)),
                self.cancel.as_ref(),
            )
            .await
    }

    pub async fn start_app(&self, app_name: &str) -> Result<AppStatus> {
        info!(app = %app_name, "Starting app");
        self.transport
            .post(
                &format!("/api/apps/start-app/{}", encode_path_segment(app_name)),
                self.cancel.as_ref(),
            )
            .await
    }

    pub async fn restart_current_app(&self) -> Result<AppStatus> {
        self.transport
            .post("/api/apps/restart-current-app", self.cancel.as_ref())
            .await
    }

    /// The daemon's reply has no fixed schema, so it is returned as raw JSON.
    pub async fn stop_current_app(&self) -> Result<serde_json::Value> {
        self.transport
            .post("/api/apps/stop-current-app", self.cancel.as_ref())
            .await
    }

    /// Status of the running app, `None` when nothing is running.
    pub async fn current_app_status(&self) -> Result<Option<AppStatus>> {
        self.transport
            .get("/api/apps/current-app-status", self.cancel.as_ref())
            .await
    }

    /// Install a private HuggingFace space. Requires a saved HF token.
    pub async fn install_private_space(
        &self,
        request: &PrivateSpaceInstallRequest,
    ) -> Result<StatusMap> {
        info!(space_id = %request.space_id, "Installing private space");
        self.transport
            .post_json(
                "/api/apps/install-private-space",
                request,
                self.cancel.as_ref(),
            )
            .await
    }
}
