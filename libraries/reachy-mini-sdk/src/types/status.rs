/// Daemon and motor status snapshots
use super::enums::{DaemonState, MotorControlMode};
use serde::{Deserialize, Serialize};

/// Status of the Reachy Mini daemon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DaemonStatus {
    pub robot_name: String,
    pub state: DaemonState,
    pub wireless_version: bool,
    pub desktop_app_daemon: bool,
    pub simulation_enabled: Option<bool>,
    /// Backend-specific payload, passed through untouched
    pub backend_status: Option<serde_json::Value>,
    pub error: Option<String>,
    pub wlan_ip: Option<String>,
    pub version: Option<String>,
}

/// Status of the motors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MotorStatus {
    pub mode: MotorControlMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daemon_status_optional_fields() {
        let status: DaemonStatus = serde_json::from_str(
            r#"{
                "robot_name": "reachy_mini",
                "state": "running",
                "wireless_version": false,
                "desktop_app_daemon": true,
                "simulation_enabled": null
            }"#,
        )
        .unwrap();

        assert_eq!(status.robot_name, "reachy_mini");
        assert_eq!(status.state, DaemonState::Running);
        assert!(status.desktop_app_daemon);
        assert!(status.simulation_enabled.is_none());
        assert!(status.backend_status.is_none());
        assert!(status.version.is_none());
    }

    #[test]
    fn test_daemon_status_requires_core_fields() {
        let result = serde_json::from_str::<DaemonStatus>(r#"{"robot_name": "reachy_mini"}"#);
        assert!(result.is_err());
    }
}
