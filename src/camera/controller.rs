use glam::Vec3;

use crate::camera::core::{aspect_ratio, Camera};
use crate::options::CameraOptions;

/// Line-based wheel deltas are reported in notches; one notch is 120
/// platform wheel units.
pub const WHEEL_UNITS_PER_LINE: f32 = 120.0;

/// Fixed-target camera rig: the eye moves, the camera always looks at the
/// origin with +Y up.
///
/// Only the eye's z coordinate is adjusted by input, and it is kept inside
/// `[min_distance, max_distance]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraController {
    position: Vec3,
    min_distance: f32,
    max_distance: f32,
}

impl CameraController {
    /// Build a controller from camera options. The starting z is clamped
    /// into range.
    ///
    /// Non-finite limits or positions are replaced by the defaults.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let defaults = CameraOptions::default();
        let limits = (options.min_distance, options.max_distance);
        let (min, max) = if limits.0.is_finite() && limits.1.is_finite() {
            limits
        } else {
            log::warn!(
                "camera limits {limits:?} are not finite, using defaults"
            );
            (defaults.min_distance, defaults.max_distance)
        };
        let min_distance = min.min(max);
        let max_distance = max.max(min);
        let mut position = Vec3::from_array(options.position);
        if !position.is_finite() {
            log::warn!("camera position {position} is not finite, using default");
            position = Vec3::from_array(defaults.position);
        }
        Self {
            position: Vec3::new(
                position.x,
                position.y,
                position.z.clamp(min_distance, max_distance),
            ),
            min_distance,
            max_distance,
        }
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// The adjustable z coordinate of the eye.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.position.z
    }

    /// Allowed `(min, max)` range for [`distance`](Self::distance).
    #[must_use]
    pub fn limits(&self) -> (f32, f32) {
        (self.min_distance, self.max_distance)
    }

    /// Apply a wheel delta expressed in platform wheel units.
    ///
    /// `distance += delta * scale`, then clamped. Positive deltas move the
    /// eye away from the origin.
    #[must_use]
    pub fn zoomed(self, wheel_delta: f32, scale: f32) -> Self {
        self.dollied(wheel_delta * scale)
    }

    /// Move the eye along z by `delta` world units, then clamp. Non-finite
    /// deltas are ignored.
    #[must_use]
    pub fn dollied(mut self, delta: f32) -> Self {
        if !delta.is_finite() {
            return self;
        }
        let z = self.position.z + delta;
        self.position.z = z.clamp(self.min_distance, self.max_distance);
        self
    }

    /// Build the projection camera for the current viewport. Rebuilt every
    /// frame and on every resize.
    #[must_use]
    pub fn camera(&self, viewport: (u32, u32), options: &CameraOptions) -> Camera {
        Camera {
            eye: self.position,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect_ratio(viewport.0, viewport.1),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rig_matches_demo_camera() {
        let rig = CameraController::default();
        assert_eq!(rig.position(), Vec3::new(4.0, 4.0, 4.0));
        assert_eq!(rig.limits(), (1.0, 30.0));
    }

    #[test]
    fn repeated_wheel_in_never_passes_min() {
        let mut rig = CameraController::default();
        for _ in 0..50 {
            rig = rig.zoomed(-120.0, 0.01);
            assert!(rig.distance() >= 1.0);
        }
        assert_eq!(rig.distance(), 1.0);
    }

    #[test]
    fn repeated_wheel_out_never_passes_max() {
        let mut rig = CameraController::default();
        for _ in 0..50 {
            rig = rig.zoomed(1200.0, 0.01);
            assert!(rig.distance() <= 30.0);
        }
        assert_eq!(rig.distance(), 30.0);
    }

    #[test]
    fn wheel_sequence_within_bounds_is_not_clamped() {
        let mut rig = CameraController::default();
        for delta in [500.0, 500.0, 500.0] {
            rig = rig.zoomed(delta, 0.01);
        }
        assert!((rig.distance() - 19.0).abs() < 1e-4);
    }

    #[test]
    fn dolly_is_clamped_like_the_wheel() {
        let rig = CameraController::default().dollied(-10.0);
        assert_eq!(rig.distance(), 1.0);
        let rig = rig.dollied(10.0).dollied(10.0).dollied(10.0);
        assert_eq!(rig.distance(), 30.0);
    }

    #[test]
    fn camera_always_looks_at_origin() {
        let rig = CameraController::default().zoomed(300.0, 0.01);
        let camera = rig.camera((800, 600), &CameraOptions::default());
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.up, Vec3::Y);
        assert!((camera.eye.z - 7.0).abs() < 1e-5);
        assert_eq!(camera.fovy, 45.0);
        assert_eq!(camera.znear, 1.0);
        assert_eq!(camera.zfar, 100.0);
    }

    #[test]
    fn nan_limits_fall_back_to_defaults() {
        let options = crate::options::Options::from_toml_str(
            "[camera]\nmin_distance = nan\nmax_distance = nan\n",
        )
        .unwrap();
        let rig = CameraController::new(&options.camera);
        assert_eq!(rig.limits(), (1.0, 30.0));
        let rig = rig.dollied(-100.0).zoomed(f32::NAN, 0.01);
        assert_eq!(rig.distance(), 1.0);
    }

    #[test]
    fn infinite_position_falls_back_to_default() {
        let options = CameraOptions {
            position: [0.0, f32::INFINITY, 4.0],
            ..CameraOptions::default()
        };
        let rig = CameraController::new(&options);
        assert_eq!(rig.position(), Vec3::new(4.0, 4.0, 4.0));
    }
}
