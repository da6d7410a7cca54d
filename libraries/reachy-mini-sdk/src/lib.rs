//! Reachy Mini SDK
//!
//! Typed async client for the Reachy Mini robot daemon HTTP API.
//!
//! # Features
//!
//! - **Daemon**: start, stop, restart, status
//! - **Motors**: status and control mode
//! - **Move**: goto, wake up / sleep, recorded moves, stop, direct targets
//! - **State**: head pose, body yaw, antennas, full state
//! - **Apps**: list, install, remove, start/stop, job status
//! - **Volume**: speaker and microphone volume, test sound
//! - **Auth**: HuggingFace token management
//!
//! Every call goes through one shared pipeline: JSON with snake_case field
//! names, failures classified into [`ReachyMiniError`], transport failures
//! retried with a fixed delay, optional cancellation through a
//! [`CancellationToken`].
//!
//! # Example
//!
//! ```ignore
//! use reachy_mini_sdk::{FullStateQuery, ReachyMiniClient, ReachyMiniConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ReachyMiniClient::new(ReachyMiniConfig::new("http://localhost:8080"))?;
//!
//!     let status = client.daemon().status().await?;
//!     println!("Robot {} is {}", status.robot_name, status.state);
//!
//!     let handle = client.moves().wake_up().await?;
//!     println!("Wake up move started: {}", handle);
//!
//!     let state = client.state().full_state(&FullStateQuery::default()).await?;
//!     println!("Body yaw: {:?}", state.body_yaw);
//!
//!     Ok(())
//! }
//! ```

mod apps;
mod auth;
mod client;
mod config;
mod daemon;
mod error;
mod motors;
mod moves;
mod state;
mod transport;
pub mod types;
mod volume;

// Re-export main types
pub use client::ReachyMiniClient;
pub use config::{
    ReachyMiniConfig, DEFAULT_BASE_URL, DEFAULT_RETRY_COUNT, DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT,
};
pub use error::{ReachyMiniError, Result};
pub use types::{
    AppInfo, AppState, AppStatus, DaemonState, DaemonStatus, EulerPose, FullBodyTarget, FullState,
    FullStateQuery, InterpolationMode, JobInfo, JobStatus, MatrixPose, MotorControlMode,
    MotorStatus, MoveHandle, MoveRequest, Pose, PrivateSpaceInstallRequest, SourceKind, StatusMap,
    TestSoundResponse, TokenRequest, TokenResponse, VolumeRequest, VolumeResponse,
};

// Endpoint groups, obtained through `ReachyMiniClient`
pub use apps::AppsClient;
pub use auth::AuthClient;
pub use daemon::DaemonClient;
pub use motors::MotorsClient;
pub use moves::MoveClient;
pub use state::StateClient;
pub use volume::VolumeClient;

pub use tokio_util::sync::CancellationToken;
