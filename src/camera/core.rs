use glam::{Mat4, Vec3};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Look-at view matrix from `eye` toward `target`.
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Perspective projection matrix.
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}

/// Aspect ratio of a viewport, falling back to 1.0 for degenerate sizes.
#[must_use]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    fn test_camera() -> Camera {
        Camera {
            eye: Vec3::new(4.0, 4.0, 4.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 800.0 / 600.0,
            fovy: 45.0,
            znear: 1.0,
            zfar: 100.0,
        }
    }

    #[test]
    fn view_places_target_in_front_of_eye() {
        let camera = test_camera();
        let target_in_view = camera.build_view() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let distance = camera.eye.length();
        // Right-handed view space looks down -Z.
        assert!(target_in_view.x.abs() < 1e-5);
        assert!(target_in_view.y.abs() < 1e-5);
        assert!((target_in_view.z + distance).abs() < 1e-4);
    }

    #[test]
    fn projection_maps_near_and_far_planes_to_unit_depth() {
        let camera = test_camera();
        let proj = camera.build_projection();
        let near = proj * Vec4::new(0.0, 0.0, -1.0, 1.0);
        let far = proj * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert!((near.z / near.w).abs() < 1e-5);
        assert!((far.z / far.w - 1.0).abs() < 1e-5);
    }

    #[test]
    fn degenerate_viewport_has_unit_aspect() {
        assert_eq!(aspect_ratio(0, 600), 1.0);
        assert_eq!(aspect_ratio(800, 0), 1.0);
        assert!((aspect_ratio(800, 600) - 4.0 / 3.0).abs() < 1e-6);
    }
}
