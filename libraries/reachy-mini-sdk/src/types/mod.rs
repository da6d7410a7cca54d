mod apps;
mod enums;
mod misc;
mod movement;
mod pose;
mod state;
mod status;
mod timestamp;

pub use apps::{AppInfo, AppStatus, JobInfo, PrivateSpaceInstallRequest};
pub use enums::{AppState, DaemonState, InterpolationMode, JobStatus, MotorControlMode, SourceKind};
pub use misc::{TestSoundResponse, TokenRequest, TokenResponse, VolumeRequest, VolumeResponse};
pub use movement::{FullBodyTarget, MoveHandle, MoveRequest};
pub use pose::{EulerPose, MatrixPose, Pose};
pub use state::{FullState, FullStateQuery};
pub use status::{DaemonStatus, MotorStatus};

/// Plain `{"key": "value"}` acknowledgement most write endpoints return.
pub type StatusMap = std::collections::HashMap<String, String>;
