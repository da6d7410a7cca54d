//! Speaker and microphone volume.

use crate::error::{ReachyMiniError, Result};
use crate::transport::Transport;
use crate::types::{TestSoundResponse, VolumeRequest, VolumeResponse};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Client for volume and audio settings.
pub struct VolumeClient<'a> {
    transport: &'a Transport,
    cancel: Option<CancellationToken>,
}

impl<'a> VolumeClient<'a> {
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

    pub async fn volume(&self) -> Result<VolumeResponse> {
        self.transport
            .get("/api/volume/current", self.cancel.as_ref())
            .await
    }

    /// Set the speaker volume; the daemon plays a test sound afterwards.
    pub async fn set_volume(&self, request: VolumeRequest) -> Result<VolumeResponse> {
        check_range(request)?;
        debug!(volume = request.volume, "Setting speaker volume");
        self.transport
            .post_json("/api/volume/set", &request, self.cancel.as_ref())
            .await
    }

    pub async fn play_test_sound(&self) -> Result<TestSoundResponse> {
        self.transport
            .post("/api/volume/test-sound", self.cancel.as_ref())
            .await
    }

    pub async fn microphone_volume(&self) -> Result<VolumeResponse> {
        self.transport
            .get("/api/volume/microphone/current", self.cancel.as_ref())
            .await
    }

    pub async fn set_microphone_volume(&self, request: VolumeRequest) -> Result<VolumeResponse> {
        check_range(request)?;
        debug!(volume = request.volume, "Setting microphone volume");
        self.transport
            .post_json("/api/volume/microphone/set", &request, self.cancel.as_ref())
            .await
    }
}

fn check_range(request: VolumeRequest) -> Result<()> {
    if request.volume > VolumeRequest::MAX {
        return Err(ReachyMiniError::InvalidRequest(format!(
            "volume must be between 0 and {}, got {}",
            VolumeRequest::MAX,
            request.volume
        )));
    }
    Ok(())
}
