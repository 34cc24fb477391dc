//! Per-viewport numeric state, updated by a pure function per command.

use glam::{Mat4, Vec3};

use super::command::{Axis, ViewCommand};
use super::orientation::Orientation;
use crate::camera::controller::CameraController;
use crate::input::drag::DragSession;
use crate::options::Options;

/// Everything that determines what a frame looks like, apart from the
/// animation angle.
///
/// `ViewState` is a plain value: commands produce a new state through
/// [`apply`](Self::apply), which makes every transform testable without a
/// GPU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Eye position and zoom limits.
    pub camera: CameraController,
    /// Key-driven rotation about X, Y, Z in degrees, each in `[0, 360)`.
    pub rotation: Vec3,
    /// Model translation.
    pub translation: Vec3,
    /// Uniform display scale.
    pub scale: f32,
    /// Drag-driven rotation.
    pub orientation: Orientation,
    /// The drag gesture in progress, if any.
    pub drag: Option<DragSession>,
    /// Whether the axis overlay is drawn.
    pub show_axes: bool,
}

impl ViewState {
    /// Initial state for the given options.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            camera: CameraController::new(&options.camera),
            rotation: Vec3::ZERO,
            translation: Vec3::ZERO,
            scale: 1.0,
            orientation: Orientation::IDENTITY,
            drag: None,
            show_axes: options.display.show_axes,
        }
    }

    /// Apply one command. `viewport` is the current surface size in
    /// physical pixels, used to normalize drag displacements.
    ///
    /// Animation and quit commands are not view-state changes and leave the
    /// state untouched.
    #[must_use]
    pub fn apply(mut self, command: &ViewCommand, viewport: (u32, u32)) -> Self {
        match *command {
            ViewCommand::Rotate { axis, degrees } => {
                let angle = match axis {
                    Axis::X => &mut self.rotation.x,
                    Axis::Y => &mut self.rotation.y,
                    Axis::Z => &mut self.rotation.z,
                };
                *angle = wrap_degrees(*angle + degrees);
            }
            ViewCommand::Translate { delta } => self.translation += delta,
            ViewCommand::Scale { factor } => self.scale *= factor,
            ViewCommand::Dolly { delta } => {
                self.camera = self.camera.dollied(delta);
            }
            ViewCommand::Zoom { wheel_delta, scale } => {
                self.camera = self.camera.zoomed(wheel_delta, scale);
            }
            ViewCommand::BeginDrag { x, y } => {
                self.drag = Some(DragSession::new(x, y));
            }
            ViewCommand::UpdateDrag { x, y } => {
                if let Some(session) = self.drag {
                    self.orientation = self
                        .orientation
                        .with_gesture(session.rotation_to(x, y, viewport));
                }
            }
            ViewCommand::EndDrag => {
                if self.drag.take().is_some() {
                    self.orientation = self.orientation.committed_gesture();
                }
            }
            ViewCommand::ToggleAxes => self.show_axes = !self.show_axes,
            ViewCommand::StartAnimation
            | ViewCommand::PauseAnimation
            | ViewCommand::StopAnimation
            | ViewCommand::Quit => {}
        }
        self
    }

    /// Model matrix for a frame, given the animation angle in degrees.
    ///
    /// Order (applied right to left to vertices): drag rotation, translate,
    /// scale, key rotations Z then Y then X, animation rotation about X.
    #[must_use]
    pub fn model_matrix(&self, animation_degrees: f32) -> Mat4 {
        Mat4::from_rotation_x(animation_degrees.to_radians())
            * self.viewpoint_matrix()
            * self.orientation.matrix()
    }

    /// The key-driven viewpoint transform: key rotations X, Y, Z, then
    /// scale, then translation. The axis overlay is drawn with this alone.
    #[must_use]
    pub fn viewpoint_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation.x.to_radians())
            * Mat4::from_rotation_y(self.rotation.y.to_radians())
            * Mat4::from_rotation_z(self.rotation.z.to_radians())
            * Mat4::from_scale(Vec3::splat(self.scale))
            * Mat4::from_translation(self.translation)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
#[must_use]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec4};

    use super::*;

    const VIEWPORT: (u32, u32) = (800, 600);

    fn rotate(axis: Axis, degrees: f32) -> ViewCommand {
        ViewCommand::Rotate { axis, degrees }
    }

    #[test]
    fn rotation_wraps_forward_and_backward() {
        let mut state = ViewState::default();
        state.rotation.x = 358.0;
        let state = state.apply(&rotate(Axis::X, 5.0), VIEWPORT);
        assert!((state.rotation.x - 3.0).abs() < 1e-4);

        let state = state.apply(&rotate(Axis::Y, -5.0), VIEWPORT);
        assert!((state.rotation.y - 355.0).abs() < 1e-4);
    }

    #[test]
    fn rotations_stay_in_range_after_many_presses() {
        let mut state = ViewState::default();
        for _ in 0..500 {
            state = state.apply(&rotate(Axis::Z, -5.0), VIEWPORT);
            assert!((0.0..360.0).contains(&state.rotation.z));
        }
    }

    #[test]
    fn wrap_degrees_handles_edges() {
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-360.0), 0.0);
        assert_eq!(wrap_degrees(-1e-9), 0.0);
        assert!((wrap_degrees(725.0) - 5.0).abs() < 1e-4);
    }

    #[test]
    fn translate_scale_and_toggle() {
        let state = ViewState::default()
            .apply(
                &ViewCommand::Translate {
                    delta: Vec3::new(0.2, 0.0, 0.0),
                },
                VIEWPORT,
            )
            .apply(&ViewCommand::Scale { factor: 1.2 }, VIEWPORT)
            .apply(&ViewCommand::Scale { factor: 1.2 }, VIEWPORT)
            .apply(&ViewCommand::ToggleAxes, VIEWPORT);
        assert!((state.translation.x - 0.2).abs() < 1e-6);
        assert!((state.scale - 1.44).abs() < 1e-5);
        assert!(state.show_axes);
        let state = state.apply(&ViewCommand::ToggleAxes, VIEWPORT);
        assert!(!state.show_axes);
    }

    #[test]
    fn zero_length_drag_keeps_committed_rotation() {
        let committed = Quat::from_rotation_y(0.5);
        let mut state = ViewState::default();
        state.orientation = Orientation::IDENTITY
            .with_gesture(committed)
            .committed_gesture();

        let state = state
            .apply(&ViewCommand::BeginDrag { x: 100.0, y: 100.0 }, VIEWPORT)
            .apply(&ViewCommand::UpdateDrag { x: 100.0, y: 100.0 }, VIEWPORT);
        assert!(state.orientation.current().abs_diff_eq(committed, 1e-6));

        let state = state.apply(&ViewCommand::EndDrag, VIEWPORT);
        assert!(state.orientation.committed().abs_diff_eq(committed, 1e-6));
    }

    #[test]
    fn drag_recomputes_from_gesture_start() {
        let start = ViewState::default()
            .apply(&ViewCommand::BeginDrag { x: 400.0, y: 300.0 }, VIEWPORT);
        let direct = start
            .apply(&ViewCommand::UpdateDrag { x: 600.0, y: 300.0 }, VIEWPORT);
        let wandering = start
            .apply(&ViewCommand::UpdateDrag { x: 450.0, y: 500.0 }, VIEWPORT)
            .apply(&ViewCommand::UpdateDrag { x: 10.0, y: 20.0 }, VIEWPORT)
            .apply(&ViewCommand::UpdateDrag { x: 600.0, y: 300.0 }, VIEWPORT);
        assert_eq!(direct.orientation, wandering.orientation);
        // Nothing is committed while the gesture is live.
        assert_eq!(direct.orientation.committed(), Quat::IDENTITY);
    }

    #[test]
    fn end_drag_commits_and_next_gesture_builds_on_it() {
        let state = ViewState::default()
            .apply(&ViewCommand::BeginDrag { x: 400.0, y: 300.0 }, VIEWPORT)
            .apply(&ViewCommand::UpdateDrag { x: 600.0, y: 300.0 }, VIEWPORT)
            .apply(&ViewCommand::EndDrag, VIEWPORT);
        assert!(state.drag.is_none());
        let first = state.orientation.committed();
        assert!(first.abs_diff_eq(
            Quat::from_xyzw(0.0, 0.382_683, 0.0, 0.923_88),
            1e-4
        ));

        let state = state
            .apply(&ViewCommand::BeginDrag { x: 0.0, y: 0.0 }, VIEWPORT)
            .apply(&ViewCommand::UpdateDrag { x: 200.0, y: 0.0 }, VIEWPORT)
            .apply(&ViewCommand::EndDrag, VIEWPORT);
        // Two 45° turns about Y.
        let (axis, angle) = state.orientation.committed().to_axis_angle();
        assert!(axis.abs_diff_eq(Vec3::Y, 1e-4));
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn update_without_session_is_ignored() {
        let state = ViewState::default()
            .apply(&ViewCommand::UpdateDrag { x: 600.0, y: 300.0 }, VIEWPORT)
            .apply(&ViewCommand::EndDrag, VIEWPORT);
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn wheel_sequence_moves_camera_without_clamping() {
        let mut state = ViewState::default();
        for _ in 0..3 {
            state = state.apply(
                &ViewCommand::Zoom {
                    wheel_delta: 500.0,
                    scale: 0.01,
                },
                VIEWPORT,
            );
        }
        assert!((state.camera.distance() - 19.0).abs() < 1e-4);
    }

    #[test]
    fn model_matrix_is_identity_for_default_state() {
        let m = ViewState::default().model_matrix(0.0);
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn model_matrix_applies_translation_before_scale() {
        let mut state = ViewState::default();
        state.translation = Vec3::new(1.0, 0.0, 0.0);
        state.scale = 2.0;
        let p = state.model_matrix(0.0) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((p.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn animation_angle_rotates_about_x() {
        let state = ViewState::default();
        let p = state.model_matrix(90.0) * Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert!(p.truncate().abs_diff_eq(Vec3::Z, 1e-5));
    }

    #[test]
    fn viewpoint_follows_keys_but_not_drag() {
        let state = ViewState::default()
            .apply(&rotate(Axis::X, 90.0), VIEWPORT)
            .apply(&ViewCommand::BeginDrag { x: 400.0, y: 300.0 }, VIEWPORT)
            .apply(&ViewCommand::UpdateDrag { x: 600.0, y: 300.0 }, VIEWPORT);
        let y_tip = state.viewpoint_matrix() * Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert!(y_tip.truncate().abs_diff_eq(Vec3::Z, 1e-5));

        let plain = ViewState::default()
            .apply(&rotate(Axis::X, 90.0), VIEWPORT);
        assert!(state
            .viewpoint_matrix()
            .abs_diff_eq(plain.viewpoint_matrix(), 1e-6));
    }
}
