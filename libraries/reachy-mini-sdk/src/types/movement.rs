/// Movement request and handle types
use super::enums::InterpolationMode;
use super::pose::Pose;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/move/goto`.
///
/// Unset targets are left out of the JSON so the daemon keeps the current
/// value for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_pose: Option<Pose>,

    /// [left, right] in radians
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antennas: Option<[f64; 2]>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_yaw: Option<f64>,

    /// Seconds; must be positive.
    pub duration: f64,

    #[serde(default)]
    pub interpolation: InterpolationMode,
}

impl MoveRequest {
    /// A move that only sets a duration; add targets with the `with_*` methods.
    pub fn new(duration: f64) -> Self {
        Self {
            head_pose: None,
            antennas: None,
            body_yaw: None,
            duration,
            interpolation: InterpolationMode::default(),
        }
    }

    pub fn with_head_pose(mut self, pose: impl Into<Pose>) -> Self {
        self.head_pose = Some(pose.into());
        self
    }

    pub fn with_antennas(mut self, left: f64, right: f64) -> Self {
        self.antennas = Some([left, right]);
        self
    }

    pub fn with_body_yaw(mut self, body_yaw: f64) -> Self {
        self.body_yaw = Some(body_yaw);
        self
    }

    pub fn with_interpolation(mut self, interpolation: InterpolationMode) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub(crate) fn has_valid_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }
}

/// Identifier of a move task running on the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MoveHandle {
    pub uuid: Uuid,
}

impl MoveHandle {
    pub fn new(uuid: Uuid) -> Self {
        Self { uuid }
    }
}

impl std::fmt::Display for MoveHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uuid)
    }
}

/// Immediate full-body target for `POST /api/move/set_target`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FullBodyTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_head_pose: Option<Pose>,

    /// [left, right] in radians
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_antennas: Option<[f64; 2]>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_body_yaw: Option<f64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::timestamp::deserialize_optional"
    )]
    pub timestamp: Option<DateTime<Utc>>,
}
