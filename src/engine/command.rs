//! The viewer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture, or a programmatic call, is represented as a `ViewCommand`.
//! Commands carry their parameters (step sizes, pointer positions) so that
//! applying one never needs to consult options.

use glam::Vec3;

/// Principal axis for key-driven rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// World X.
    X,
    /// World Y.
    Y,
    /// World Z.
    Z,
}

impl Axis {
    /// Unit vector along this axis.
    #[must_use]
    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }
}

/// A discrete or parameterized operation the viewer can perform.
///
/// ```ignore
/// let state = state.apply(&ViewCommand::Scale { factor: 1.2 }, viewport);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    // ── Model transform ─────────────────────────────────────────────
    /// Rotate about a principal axis; the angle wraps into `[0, 360)`.
    Rotate {
        /// Axis to rotate about.
        axis: Axis,
        /// Signed increment in degrees.
        degrees: f32,
    },

    /// Offset the model translation.
    Translate {
        /// World-space offset.
        delta: Vec3,
    },

    /// Multiply the uniform display scale.
    Scale {
        /// Scale multiplier.
        factor: f32,
    },

    // ── Camera ──────────────────────────────────────────────────────
    /// Move the eye along z by a fixed amount (clamped).
    Dolly {
        /// Signed world-unit offset.
        delta: f32,
    },

    /// Wheel zoom: eye z moves by `wheel_delta * scale` (clamped).
    Zoom {
        /// Platform wheel units.
        wheel_delta: f32,
        /// World units per wheel unit.
        scale: f32,
    },

    // ── Drag rotation ───────────────────────────────────────────────
    /// Start a drag gesture at the given pointer position.
    BeginDrag {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },

    /// Pointer moved during a drag gesture.
    UpdateDrag {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },

    /// End the drag gesture and commit its rotation.
    EndDrag,

    // ── Display ─────────────────────────────────────────────────────
    /// Show or hide the axis overlay.
    ToggleAxes,

    // ── Animation ───────────────────────────────────────────────────
    /// Enter Running from Stopped or Paused.
    StartAnimation,
    /// Enter Paused from Running.
    PauseAnimation,
    /// Enter Stopped and reset the animation angle.
    StopAnimation,

    // ── Application ─────────────────────────────────────────────────
    /// Exit the viewer.
    Quit,
}
