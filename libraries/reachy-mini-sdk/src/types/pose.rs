/// Head pose representations.
///
/// The daemon does not tag which representation it sends; the shape of the
/// JSON decides. A 16-number array (bare or wrapped as `{"m": [...]}`) is a
/// matrix, an object with the six named fields is an Euler pose, anything
/// else is rejected.
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Position (x, y, z) in meters and orientation (roll, pitch, yaw) in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EulerPose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl EulerPose {
    pub fn new(x: f64, y: f64, z: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            x,
            y,
            z,
            roll,
            pitch,
            yaw,
        }
    }
}

/// Row-major 4x4 homogeneous transform; translation in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixPose {
    pub m: [f64; 16],
}

impl MatrixPose {
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Translation column (x, y, z).
    pub fn translation(&self) -> [f64; 3] {
        [self.m[3], self.m[7], self.m[11]]
    }
}

impl Default for MatrixPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A head pose, in either representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pose {
    Matrix(MatrixPose),
    Euler(EulerPose),
}

impl Default for Pose {
    fn default() -> Self {
        Self::Euler(EulerPose::default())
    }
}

impl From<EulerPose> for Pose {
    fn from(pose: EulerPose) -> Self {
        Self::Euler(pose)
    }
}

impl From<MatrixPose> for Pose {
    fn from(pose: MatrixPose) -> Self {
        Self::Matrix(pose)
    }
}

impl Pose {
    pub fn as_euler(&self) -> Option<&EulerPose> {
        match self {
            Self::Euler(pose) => Some(pose),
            Self::Matrix(_) => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&MatrixPose> {
        match self {
            Self::Matrix(pose) => Some(pose),
            Self::Euler(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for Pose {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_shape(value).map_err(D::Error::custom)
    }
}

impl Pose {
    /// Resolve a pose from its JSON shape. Only a 16-element array or an
    /// object qualifies.
    fn from_shape(value: Value) -> Result<Self, String> {
        match value {
            Value::Array(items) if items.len() == 16 => {
                serde_json::from_value::<[f64; 16]>(Value::Array(items))
                    .map(|m| Self::Matrix(MatrixPose { m }))
                    .map_err(|e| format!("invalid pose matrix: {}", e))
            }
            Value::Object(fields) if fields.contains_key("m") => {
                serde_json::from_value(Value::Object(fields))
                    .map(Self::Matrix)
                    .map_err(|e| format!("invalid pose matrix: {}", e))
            }
            Value::Object(fields) => serde_json::from_value(Value::Object(fields))
                .map(Self::Euler)
                .map_err(|e| format!("invalid euler pose: {}", e)),
            other => Err(format!(
                "pose must be a 16-number array or an object, got {}",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_euler_shape() {
        let pose: Pose = serde_json::from_value(json!({
            "x": 0.01, "y": 0.0, "z": 0.02, "roll": 0.0, "pitch": 0.1, "yaw": -0.2
        }))
        .unwrap();

        let euler = pose.as_euler().expect("euler pose");
        assert_eq!(euler.z, 0.02);
        assert_eq!(euler.yaw, -0.2);
    }

    #[test]
    fn test_bare_matrix_shape() {
        let values: Vec<f64> = (0..16).map(f64::from).collect();
        let pose: Pose = serde_json::from_value(json!(values)).unwrap();

        let matrix = pose.as_matrix().expect("matrix pose");
        assert_eq!(matrix.m[15], 15.0);
        assert_eq!(matrix.translation(), [3.0, 7.0, 11.0]);
    }

    #[test]
    fn test_wrapped_matrix_shape() {
        let pose: Pose = serde_json::from_value(json!({ "m": MatrixPose::IDENTITY.m })).unwrap();
        assert_eq!(pose, Pose::Matrix(MatrixPose::IDENTITY));
    }

    #[test]
    fn test_ambiguous_shapes_are_rejected() {
        // Wrong element count
        assert!(serde_json::from_value::<Pose>(json!([1.0, 2.0, 3.0])).is_err());
        // Missing orientation fields
        assert!(serde_json::from_value::<Pose>(json!({ "x": 0.0, "y": 0.0, "z": 0.0 })).is_err());
        // Both shapes at once
        assert!(serde_json::from_value::<Pose>(json!({
            "m": MatrixPose::IDENTITY.m,
            "x": 0.0, "y": 0.0, "z": 0.0, "roll": 0.0, "pitch": 0.0, "yaw": 0.0
        }))
        .is_err());
        assert!(serde_json::from_value::<Pose>(json!("identity")).is_err());
    }

    #[test]
    fn test_positional_arrays_are_not_guessed() {
        // Six numbers are not an Euler pose
        assert!(serde_json::from_value::<Pose>(json!([0.0, 0.0, 0.01, 0.0, 0.1, 0.2])).is_err());

        // A matrix nested one level too deep
        let nested = json!([MatrixPose::IDENTITY.m]);
        assert!(serde_json::from_value::<Pose>(nested).is_err());

        // Wrapped matrix with a nested array inside
        assert!(serde_json::from_value::<Pose>(json!({ "m": [MatrixPose::IDENTITY.m] })).is_err());

        // Sixteen values that are not all numbers
        let mut values: Vec<serde_json::Value> = vec![json!(0.0); 15];
        values.push(json!("1"));
        assert!(serde_json::from_value::<Pose>(json!(values)).is_err());
    }

    #[test]
    fn test_serialized_shapes() {
        let matrix = serde_json::to_value(Pose::Matrix(MatrixPose::IDENTITY)).unwrap();
        assert_eq!(matrix["m"].as_array().map(Vec::len), Some(16));

        let euler = serde_json::to_value(Pose::from(EulerPose::new(0.0, 0.0, 0.01, 0.0, 0.0, 0.0)))
            .unwrap();
        assert_eq!(euler["z"], json!(0.01));
        assert!(euler.get("m").is_none());
    }
}
