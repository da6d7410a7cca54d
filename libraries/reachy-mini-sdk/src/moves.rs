//! Movement operations.
//!
//! Every command here returns as soon as the daemon has accepted it. The
//! returned [`MoveHandle`] identifies the running move; poll
//! [`MoveClient::running`] to see when it has finished, or pass the handle to
//! [`MoveClient::stop`] to interrupt it.

use crate::error::{ReachyMiniError, Result};
use crate::transport::{encode_path_segment, Transport};
use crate::types::{FullBodyTarget, MoveHandle, MoveRequest, StatusMap};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Client for robot movements.
pub struct MoveClient<'a> {
    transport: &'a Transport,
    cancel: Option<CancellationToken>,
}

impl<'a> MoveClient<'a> {
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

    /// Moves currently running on the daemon.
    pub async fn running(&self) -> Result<Vec<MoveHandle>> {
        let moves: Vec<MoveHandle> = self
            .transport
            .get("/api/move/running", self.cancel.as_ref())
            .await?;

        debug!(count = moves.len(), "Fetched running moves");
        Ok(moves)
    }

    /// Move to a target pose over `request.duration` seconds.
    ///
    /// Rejects a non-positive or non-finite duration without contacting the
    /// daemon.
    pub async fn goto(&self, request: &MoveRequest) -> Result<MoveHandle> {
        if !request.has_valid_duration() {
            return Err(ReachyMiniError::InvalidRequest(format!(
                "move duration must be a positive number of seconds, got {}",
                request.duration
            )));
        }

        let handle: MoveHandle = self
            .transport
            .post_json("/api/move/goto", request, self.cancel.as_ref())
            .await?;

        info!(
            uuid = %handle.uuid,
            duration = request.duration,
            interpolation = %request.interpolation,
            "Goto move started"
        );
        Ok(handle)
    }

    /// Play the wake-up animation.
    pub async fn wake_up(&self) -> Result<MoveHandle> {
        self.transport
            .post("/api/move/play/wake_up", self.cancel.as_ref())
            .await
    }

    /// Play the go-to-sleep animation.
    pub async fn goto_sleep(&self) -> Result<MoveHandle> {
        self.transport
            .post("/api/move/play/goto_sleep", self.cancel.as_ref())
            .await
    }

    /// Names of the recorded moves available in `dataset`.
    pub async fn list_recorded_moves(&self, dataset: &str) -> Result<Vec<String>> {
        self.transport
            .get(
                &format!(
                    "/api/move/recorded-move-datasets/list/{}",
                    encode_path_segment(dataset)
                ),
                self.cancel.as_ref(),
            )
            .await
    }

    /// Play `move_name` from a recorded-move dataset.
    pub async fn play_recorded_move(&self, dataset: &str, move_name: &str) -> Result<MoveHandle> {
        debug!(dataset = %dataset, move_name = %move_name, "Playing recorded move");
        self.transport
            .post(
                &format!(
                    "/api/move/play/recorded-move-dataset/{}/{}",
                    encode_path_segment(dataset),
                    encode_path_segment(move_name)
                ),
                self.cancel.as_ref(),
            )
            .await
    }

    /// Stop a running move.
    pub async fn stop(&self, handle: &MoveHandle) -> Result<StatusMap> {
        info!(uuid = %handle.uuid, "Stopping move");
        self.transport
            .post_json("/api/move/stop", handle, self.cancel.as_ref())
            .await
    }

    /// Set an immediate full-body target, bypassing interpolation.
    pub async fn set_target(&self, target: &FullBodyTarget) -> Result<StatusMap> {
        self.transport
            .post_json("/api/move/set_target", target, self.cancel.as_ref())
            .await
    }
}
