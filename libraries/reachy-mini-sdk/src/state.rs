//! Robot state queries.

use crate::error::Result;
use crate::transport::Transport;
use crate::types::{FullState, FullStateQuery, Pose};
use tokio_util::sync::CancellationToken;

/// Client for reading the robot state.
pub struct StateClient<'a> {
    transport: &'a Transport,
    cancel: Option<CancellationToken>,
}

impl<'a> StateClient<'a> {
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

    /// Present head pose, as a matrix when `use_pose_matrix` is set.
    pub async fn head_pose(&self, use_pose_matrix: bool) -> Result<Pose> {
        self.transport
            .get(
                &format!(
                    "/api/state/present_head_pose?use_pose_matrix={}",
                    use_pose_matrix
                ),
                self.cancel.as_ref(),
            )
            .await
    }

    /// Present body yaw in radians.
    pub async fn body_yaw(&self) -> Result<f64> {
        self.transport
            .get("/api/state/present_body_yaw", self.cancel.as_ref())
            .await
    }

    /// Present antenna positions in radians, (left, right).
    pub async fn antenna_joint_positions(&self) -> Result<[f64; 2]> {
        self.transport
            .get(
                "/api/state/present_antenna_joint_positions",
                self.cancel.as_ref(),
            )
            .await
    }

    /// Full robot state with the fields selected by `query`.
    pub async fn full_state(&self, query: &FullStateQuery) -> Result<FullState> {
        self.transport
            .get(
                &format!("/api/state/full{}", query.to_query_string()),
                self.cancel.as_ref(),
            )
            .await
    }
}
