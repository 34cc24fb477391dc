use serde::{Deserialize, Serialize};

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// rotate_x_forward = "x"
/// toggle_axes = "g"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Rotate about X by `+step`.
    RotateXForward,
    /// Rotate about X by `-step`.
    RotateXBackward,
    /// Rotate about Y by `+step`.
    RotateYForward,
    /// Rotate about Y by `-step`.
    RotateYBackward,
    /// Rotate about Z by `+step`.
    RotateZForward,
    /// Rotate about Z by `-step`.
    RotateZBackward,
    /// Translate along +X.
    TranslateXForward,
    /// Translate along -X.
    TranslateXBackward,
    /// Translate along +Y.
    TranslateYForward,
    /// Translate along -Y.
    TranslateYBackward,
    /// Translate along +Z.
    TranslateZForward,
    /// Translate along -Z.
    TranslateZBackward,
    /// Move the eye toward the origin.
    CameraCloser,
    /// Move the eye away from the origin.
    CameraFarther,
    /// Shrink the display scale.
    ScaleDown,
    /// Grow the display scale.
    ScaleUp,
    /// Show or hide the axis overlay.
    ToggleAxes,
    /// Start (or resume) the animation.
    StartAnimation,
    /// Pause the animation.
    PauseAnimation,
    /// Stop the animation and reset its angle.
    StopAnimation,
    /// Exit the viewer.
    Quit,
}
