use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Step sizes applied by the keyboard bindings.
pub struct ControlOptions {
    /// Per-press rotation about X, Y, Z in degrees.
    pub rotate_step: [f32; 3],
    /// Per-press translation in world units.
    pub translate_step: f32,
    /// Per-press eye movement for the dolly keys.
    pub camera_step: f32,
    /// Multiplicative display-scale step.
    pub scale_factor: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            rotate_step: [5.0, 5.0, 5.0],
            translate_step: 0.2,
            camera_step: 10.0,
            scale_factor: 1.2,
        }
    }
}
