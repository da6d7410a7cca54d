/// Enumerations shared by requests and responses.
///
/// Every enum travels as its lower snake_case name, never as an integer.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// State of the Reachy Mini daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaemonState {
    #[default]
    NotInitialized,
    Starting,
    Running,
    Stopping,
    Stopped,
    Error,
}

impl DaemonState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "not_initialized",
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Stopping => "stopping",
            Self::Stopped => "stopped",
            Self::Error => "error",
        }
    }
}

/// Motor control mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorControlMode {
    #[default]
    Enabled,
    Disabled,
    GravityCompensation,
}

impl MotorControlMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::GravityCompensation => "gravity_compensation",
        }
    }
}

impl FromStr for MotorControlMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            "gravity_compensation" => Ok(Self::GravityCompensation),
            other => Err(format!(
                "unknown motor mode '{}' (expected enabled, disabled or gravity_compensation)",
                other
            )),
        }
    }
}

/// Trajectory shaping between the current and target positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMode {
    Linear,
    #[default]
    #[serde(rename = "minjerk")]
    MinimumJerk,
    Ease,
    Cartoon,
}

impl InterpolationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::MinimumJerk => "minjerk",
            Self::Ease => "ease",
            Self::Cartoon => "cartoon",
        }
    }
}

impl FromStr for InterpolationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "minjerk" | "minimum_jerk" => Ok(Self::MinimumJerk),
            "ease" => Ok(Self::Ease),
            "cartoon" => Ok(Self::Cartoon),
            other => Err(format!(
                "unknown interpolation '{}' (expected linear, minjerk, ease or cartoon)",
                other
            )),
        }
    }
}

/// Where an app comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    HfSpace,
    DashboardSelection,
    Local,
    Installed,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HfSpace => "hf_space",
            Self::DashboardSelection => "dashboard_selection",
            Self::Local => "local",
            Self::Installed => "installed",
        }
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hf_space" => Ok(Self::HfSpace),
            "dashboard_selection" => Ok(Self::DashboardSelection),
            "local" => Ok(Self::Local),
            "installed" => Ok(Self::Installed),
            other => Err(format!("unknown source kind '{}'", other)),
        }
    }
}

/// Lifecycle state of a running app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    #[default]
    Starting,
    Running,
    Done,
    Stopping,
    Error,
}

impl AppState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Done => "done",
            Self::Stopping => "stopping",
            Self::Error => "error",
        }
    }
}

/// Status of a background install/remove job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Pending,
    InProgress,
    Done,
    Failed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )*
    };
}

impl_display_via_as_str!(
    DaemonState,
    MotorControlMode,
    InterpolationMode,
    SourceKind,
    AppState,
    JobStatus,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_as_str() {
        let cases = [
            (serde_json::to_value(DaemonState::NotInitialized).unwrap(), "not_initialized"),
            (
                serde_json::to_value(MotorControlMode::GravityCompensation).unwrap(),
                "gravity_compensation",
            ),
            (serde_json::to_value(InterpolationMode::MinimumJerk).unwrap(), "minjerk"),
            (serde_json::to_value(SourceKind::HfSpace).unwrap(), "hf_space"),
            (serde_json::to_value(AppState::Stopping).unwrap(), "stopping"),
            (serde_json::to_value(JobStatus::InProgress).unwrap(), "in_progress"),
        ];

        for (value, expected) in cases {
            assert_eq!(value, serde_json::Value::String(expected.to_string()));
        }
    }

    #[test]
    fn test_deserialize_from_wire_names() {
        let mode: MotorControlMode = serde_json::from_str("\"disabled\"").unwrap();
        assert_eq!(mode, MotorControlMode::Disabled);

        let state: DaemonState = serde_json::from_str("\"running\"").unwrap();
        assert_eq!(state, DaemonState::Running);

        assert!(serde_json::from_str::<JobStatus>("2").is_err());
        assert!(serde_json::from_str::<JobStatus>("\"InProgress\"").is_err());
    }

    #[test]
    fn test_default_interpolation_is_minimum_jerk() {
        assert_eq!(InterpolationMode::default(), InterpolationMode::MinimumJerk);
    }

    #[test]
    fn test_from_str_round_trips_display() {
        for mode in [
            MotorControlMode::Enabled,
            MotorControlMode::Disabled,
            MotorControlMode::GravityCompensation,
        ] {
            assert_eq!(mode.to_string().parse::<MotorControlMode>().unwrap(), mode);
        }

        assert_eq!(
            "minimum_jerk".parse::<InterpolationMode>().unwrap(),
            InterpolationMode::MinimumJerk
        );
        assert!("sideways".parse::<InterpolationMode>().is_err());
        assert!("cloud".parse::<SourceKind>().is_err());
    }
}
