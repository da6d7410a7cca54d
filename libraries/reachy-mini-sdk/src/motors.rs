//! Motor control operations.

use crate::error::Result;
use crate::transport::Transport;
use crate::types::{MotorControlMode, MotorStatus, StatusMap};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Client for the robot motors.
pub struct MotorsClient<'a> {
    transport: &'a Transport,
    cancel: Option<CancellationToken>,
}

impl<'a> MotorsClient<'a> {
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

    pub async fn status(&self) -> Result<MotorStatus> {
        self.transport
            .get("/api/motors/status", self.cancel.as_ref())
            .await
    }

    /// Switch the motors to `mode`.
    pub async fn set_mode(&self, mode: MotorControlMode) -> Result<StatusMap> {
        debug!(mode = %mode, "Setting motor control mode");
        self.transport
            .post(
                &format!("/api/motors/set_mode/{}", mode.as_str()),
                self.cancel.as_ref(),
            )
            .await
    }
}
