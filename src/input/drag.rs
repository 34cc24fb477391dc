//! Pointer-drag to rotation mapping.
//!
//! A drag is measured from the point where the gesture started, never from
//! the previous move event, so the rotation for a given pointer position is
//! always the same no matter how many move events led there.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2};

/// An active modifier-gated drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position (physical pixels) when the gesture began.
    pub start: Vec2,
}

impl DragSession {
    /// Begin a gesture at the given pointer position.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            start: Vec2::new(x, y),
        }
    }

    /// Rotation for the pointer now being at `(x, y)`.
    #[must_use]
    pub fn rotation_to(&self, x: f32, y: f32, viewport: (u32, u32)) -> Quat {
        drag_rotation(self.start, Vec2::new(x, y), viewport)
    }
}

/// Convert a pointer displacement into a rotation.
///
/// The displacement is normalized by the viewport size, its length `d` is
/// mapped to the quaternion half-angle `d * π/2`, and the axis lies in the
/// XY plane: horizontal motion turns about Y, vertical motion about X.
/// There is no roll.
///
/// Zero displacement and zero-sized viewports give the identity.
#[must_use]
pub fn drag_rotation(start: Vec2, current: Vec2, viewport: (u32, u32)) -> Quat {
    let (width, height) = viewport;
    if width == 0 || height == 0 {
        return Quat::IDENTITY;
    }

    let dx = (current.x - start.x) / width as f32;
    let dy = (current.y - start.y) / height as f32;
    let d = dx.hypot(dy);
    if d == 0.0 || !d.is_finite() {
        return Quat::IDENTITY;
    }

    let (sin, cos) = (d * FRAC_PI_2).sin_cos();
    Quat::from_xyzw(dy / d * sin, dx / d * sin, 0.0, cos)
}
