//! Committed-plus-gesture model rotation.

use glam::{Mat4, Quat};

/// Drag-driven model rotation, split into a committed part and the
/// in-progress gesture.
///
/// The gesture rotation is replaced wholesale on every pointer move and only
/// folded into the committed rotation when the gesture ends, so long drags
/// never accumulate error from repeated multiplication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    committed: Quat,
    gesture: Quat,
}

impl Orientation {
    /// No rotation.
    pub const IDENTITY: Self = Self {
        committed: Quat::IDENTITY,
        gesture: Quat::IDENTITY,
    };

    /// Rotation committed by previous gestures.
    #[must_use]
    pub fn committed(&self) -> Quat {
        self.committed
    }

    /// Rotation of the gesture in progress (identity when idle).
    #[must_use]
    pub fn gesture(&self) -> Quat {
        self.gesture
    }

    /// The rotation to render: the gesture applied after the committed
    /// rotation.
    #[must_use]
    pub fn current(&self) -> Quat {
        self.gesture * self.committed
    }

    /// Rotation matrix for [`current`](Self::current).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_quat(self.current())
    }

    /// Replace the in-progress gesture rotation.
    #[must_use]
    pub fn with_gesture(mut self, gesture: Quat) -> Self {
        self.gesture = gesture;
        self
    }

    /// Fold the gesture into the committed rotation and clear it.
    #[must_use]
    pub fn committed_gesture(self) -> Self {
        Self {
            committed: self.current().normalize(),
            gesture: Quat::IDENTITY,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Vec3;

    use super::*;

    #[test]
    fn gesture_does_not_touch_committed_until_commit() {
        let spin = Quat::from_rotation_y(FRAC_PI_2);
        let o = Orientation::IDENTITY.with_gesture(spin);
        assert_eq!(o.committed(), Quat::IDENTITY);
        assert!(o.current().abs_diff_eq(spin, 1e-6));

        let o = o.committed_gesture();
        assert!(o.committed().abs_diff_eq(spin, 1e-6));
        assert_eq!(o.gesture(), Quat::IDENTITY);
    }

    #[test]
    fn identity_gesture_leaves_committed_unchanged() {
        let base = Orientation::IDENTITY
            .with_gesture(Quat::from_rotation_x(0.7))
            .committed_gesture();
        let o = base.with_gesture(Quat::IDENTITY);
        assert_eq!(o.current(), base.committed());
    }

    #[test]
    fn gesture_applies_after_committed() {
        let o = Orientation::IDENTITY
            .with_gesture(Quat::from_rotation_y(FRAC_PI_2))
            .committed_gesture()
            .with_gesture(Quat::from_rotation_x(FRAC_PI_2));
        // +Z → (Y turn) → +X → (X turn) → +X
        let v = o.current() * Vec3::Z;
        assert!(v.abs_diff_eq(Vec3::X, 1e-5));
    }
}
