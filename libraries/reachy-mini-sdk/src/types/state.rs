/// Robot state snapshot and the flags that select its fields
use super::enums::MotorControlMode;
use super::pose::Pose;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full robot state. Only the fields requested through [`FullStateQuery`]
/// are populated; everything else stays `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FullState {
    pub control_mode: Option<MotorControlMode>,
    pub head_pose: Option<Pose>,
    pub target_head_pose: Option<Pose>,
    pub head_joints: Option<Vec<f64>>,
    pub target_head_joints: Option<Vec<f64>>,
    /// Radians
    pub body_yaw: Option<f64>,
    pub target_body_yaw: Option<f64>,
    /// [left, right] in radians
    pub antennas_position: Option<Vec<f64>>,
    pub target_antennas_position: Option<Vec<f64>>,
    pub passive_joints: Option<Vec<f64>>,
    #[serde(default, deserialize_with = "super::timestamp::deserialize_optional")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Flags for `GET /api/state/full`.
///
/// The defaults match the daemon's: control mode, head pose, body yaw and
/// antenna positions on, everything else off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullStateQuery {
    pub with_control_mode: bool,
    pub with_head_pose: bool,
    pub with_target_head_pose: bool,
    pub with_head_joints: bool,
    pub with_target_head_joints: bool,
    pub with_body_yaw: bool,
    pub with_target_body_yaw: bool,
    pub with_antenna_positions: bool,
    pub with_target_antenna_positions: bool,
    pub with_passive_joints: bool,
    pub use_pose_matrix: bool,
}

impl Default for FullStateQuery {
    fn default() -> Self {
        Self {
            with_control_mode: true,
            with_head_pose: true,
            with_target_head_pose: false,
            with_head_joints: false,
            with_target_head_joints: false,
            with_body_yaw: true,
            with_target_body_yaw: false,
            with_antenna_positions: true,
            with_target_antenna_positions: false,
            with_passive_joints: false,
            use_pose_matrix: false,
        }
    }
}

impl FullStateQuery {
    /// Every flag off.
    pub fn none() -> Self {
        Self {
            with_control_mode: false,
            with_head_pose: false,
            with_target_head_pose: false,
            with_head_joints: false,
            with_target_head_joints: false,
            with_body_yaw: false,
            with_target_body_yaw: false,
            with_antenna_positions: false,
            with_target_antenna_positions: false,
            with_passive_joints: false,
            use_pose_matrix: false,
        }
    }

    /// Every `with_*` flag on; poses stay in Euler form.
    pub fn all() -> Self {
        Self {
            with_control_mode: true,
            with_head_pose: true,
            with_target_head_pose: true,
            with_head_joints: true,
            with_target_head_joints: true,
            with_body_yaw: true,
            with_target_body_yaw: true,
            with_antenna_positions: true,
            with_target_antenna_positions: true,
            with_passive_joints: true,
            use_pose_matrix: false,
        }
    }

    pub fn with_body_yaw(mut self, enabled: bool) -> Self {
        self.with_body_yaw = enabled;
        self
    }

    pub fn with_head_pose(mut self, enabled: bool) -> Self {
        self.with_head_pose = enabled;
        self
    }

    pub fn with_control_mode(mut self, enabled: bool) -> Self {
        self.with_control_mode = enabled;
        self
    }

    pub fn with_target_head_pose(mut self, enabled: bool) -> Self {
        self.with_target_head_pose = enabled;
        self
    }

    pub fn with_target_head_joints(mut self, enabled: bool) -> Self {
        self.with_target_head_joints = enabled;
        self
    }

    pub fn with_target_body_yaw(mut self, enabled: bool) -> Self {
        self.with_target_body_yaw = enabled;
        self
    }

    pub fn with_antenna_positions(mut self, enabled: bool) -> Self {
        self.with_antenna_positions = enabled;
        self
    }

    pub fn with_target_antenna_positions(mut self, enabled: bool) -> Self {
        self.with_target_antenna_positions = enabled;
        self
    }

    pub fn with_head_joints(mut self, enabled: bool) -> Self {
        self.with_head_joints = enabled;
        self
    }

    pub fn with_passive_joints(mut self, enabled: bool) -> Self {
        self.with_passive_joints = enabled;
        self
    }

    pub fn use_pose_matrix(mut self, enabled: bool) -> Self {
        self.use_pose_matrix = enabled;
        self
    }

    /// Query string including the leading `?`. All eleven flags are always
    /// present, in the order the daemon documents them.
    pub fn to_query_string(&self) -> String {
        let flags = [
            ("with_control_mode", self.with_control_mode),
            ("with_head_pose", self.with_head_pose),
            ("with_target_head_pose", self.with_target_head_pose),
            ("with_head_joints", self.with_head_joints),
            ("with_target_head_joints", self.with_target_head_joints),
            ("with_body_yaw", self.with_body_yaw),
            ("with_target_body_yaw", self.with_target_body_yaw),
            ("with_antenna_positions", self.with_antenna_positions),
            ("with_target_antenna_positions", self.with_target_antenna_positions),
            ("with_passive_joints", self.with_passive_joints),
            ("use_pose_matrix", self.use_pose_matrix),
        ];

        let params: Vec<String> = flags
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();

        format!("?{}", params.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_string() {
        assert_eq!(
            FullStateQuery::default().to_query_string(),
            "?with_control_mode=true&with_head_pose=true&with_target_head_pose=false\
             &with_head_joints=false&with_target_head_joints=false&with_body_yaw=true\
             &with_target_body_yaw=false&with_antenna_positions=true\
             &with_target_antenna_positions=false&with_passive_joints=false\
             &use_pose_matrix=false"
        );
    }

    #[test]
    fn test_only_body_yaw() {
        let query = FullStateQuery::none().with_body_yaw(true).to_query_string();

        let pairs: Vec<&str> = query.trim_start_matches('?').split('&').collect();
        assert_eq!(pairs.len(), 11);
        assert_eq!(pairs[5], "with_body_yaw=true");
        assert_eq!(
            pairs.iter().filter(|pair| pair.ends_with("=true")).count(),
            1
        );
    }

    #[test]
    fn test_missing_fields_stay_unset() {
        let state: FullState = serde_json::from_str(r#"{"body_yaw": 0.0}"#).unwrap();

        assert_eq!(state.body_yaw, Some(0.0));
        assert!(state.control_mode.is_none());
        assert!(state.head_pose.is_none());
        assert!(state.timestamp.is_none());
    }

    #[test]
    fn test_full_state_parses_daemon_payload() {
        let state: FullState = serde_json::from_str(
            r#"{
                "control_mode": "enabled",
                "head_pose": {"x": 0.0, "y": 0.0, "z": 0.0, "roll": 0.0, "pitch": 0.0, "yaw": 0.0},
                "body_yaw": 0.12,
                "antennas_position": [0.1, -0.1],
                "timestamp": "2025-06-01T12:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(state.control_mode, Some(MotorControlMode::Enabled));
        assert!(state.head_pose.and_then(|p| p.as_euler().copied()).is_some());
        assert_eq!(state.antennas_position, Some(vec![0.1, -0.1]));
        assert!(state.timestamp.is_some());
    }

    #[test]
    fn test_builders_cover_every_flag() {
        let query = FullStateQuery::none()
            .with_control_mode(true)
            .with_head_pose(true)
            .with_target_head_pose(true)
            .with_head_joints(true)
            .with_target_head_joints(true)
            .with_body_yaw(true)
            .with_target_body_yaw(true)
            .with_antenna_positions(true)
            .with_target_antenna_positions(true)
            .with_passive_joints(true);

        assert_eq!(query, FullStateQuery::all());
        assert!(query.use_pose_matrix(true).use_pose_matrix);
    }

    #[test]
    fn test_timestamp_without_offset_is_utc() {
        let state: FullState = serde_json::from_str(
            r#"{"body_yaw": 0.1, "timestamp": "2025-06-01T12:00:00.123456"}"#,
        )
        .unwrap();

        assert_eq!(state.body_yaw, Some(0.1));
        let expected: DateTime<Utc> = "2025-06-01T12:00:00.123456Z".parse().unwrap();
        assert_eq!(state.timestamp, Some(expected));
    }

    #[test]
    fn test_positional_head_pose_is_rejected() {
        let result = serde_json::from_str::<FullState>(r#"{"head_pose": [1, 2, 3, 4, 5, 6]}"#);
        assert!(result.is_err());
    }
}
