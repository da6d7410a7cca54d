//! Main Reachy Mini client.

use crate::apps::AppsClient;
use crate::auth::AuthClient;
use crate::config::ReachyMiniConfig;
use crate::daemon::DaemonClient;
use crate::error::Result;
use crate::motors::MotorsClient;
use crate::moves::MoveClient;
use crate::state::StateClient;
use crate::transport::Transport;
use crate::types::StatusMap;
use crate::volume::VolumeClient;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Entry point for the Reachy Mini daemon API.
///
/// One client owns one HTTP transport; the endpoint groups returned by
/// [`daemon`](Self::daemon), [`moves`](Self::moves) and friends borrow it.
/// The client is cheap to clone and safe to share between tasks.
///
/// # Example
///
/// ```ignore
/// use reachy_mini_sdk::{ReachyMiniClient, ReachyMiniConfig};
///
/// let client = ReachyMiniClient::new(ReachyMiniConfig::new("http://localhost:8080"))?;
///
/// let status = client.daemon().status().await?;
/// println!("{} is {}", status.robot_name, status.state);
///
/// let handle = client.moves().wake_up().await?;
/// println!("Wake up move started: {}", handle);
/// ```
#[derive(Debug, Clone)]
pub struct ReachyMiniClient {
    transport: Transport,
    config: ReachyMiniConfig,
}

impl ReachyMiniClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ReachyMiniConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;

        info!(
            base_url = %transport.base_url(),
            timeout_ms = config.timeout.as_millis() as u64,
            retry_count = config.retry_count,
            throw_on_error = config.throw_on_error,
            "Reachy Mini client created"
        );

        Ok(Self { transport, config })
    }

    /// Normalized base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn config(&self) -> &ReachyMiniConfig {
        &self.config
    }

    pub fn apps(&self) -> AppsClient<'_> {
        AppsClient::new(&self.transport)
    }

    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.transport)
    }

    pub fn daemon(&self) -> DaemonClient<'_> {
        DaemonClient::new(&self.transport)
    }

    pub fn motors(&self) -> MotorsClient<'_> {
        MotorsClient::new(&self.transport)
    }

    pub fn moves(&self) -> MoveClient<'_> {
        MoveClient::new(&self.transport)
    }

    pub fn state(&self) -> StateClient<'_> {
        StateClient::new(&self.transport)
    }

    pub fn volume(&self) -> VolumeClient<'_> {
        VolumeClient::new(&self.transport)
    }

    /// Reset the daemon's health-check timer.
    ///
    /// Returns whatever string map the daemon sends back.
    pub async fn health_check(&self, cancel: Option<&CancellationToken>) -> Result<StatusMap> {
        self.transport.post("/health-check", cancel).await
    }
}
