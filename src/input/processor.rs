//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! control modifier, the drag gate) together with the key-binding map and
//! step sizes. It is the only thing that sits between raw window events and
//! [`ViewSession::apply`](crate::engine::session::ViewSession::apply).

use glam::Vec3;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use crate::demo::DemoKind;
use crate::engine::command::{Axis, ViewCommand};
use crate::options::{ControlOptions, KeybindingOptions, Options};

/// Converts raw window events into [`ViewCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     session.apply(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Which behaviors the running demo exposes.
    demo: DemoKind,
    /// Last known cursor position in physical pixels.
    cursor: (f32, f32),
    /// Whether the control modifier is currently held.
    control_pressed: bool,
    /// Whether a drag gesture is in progress.
    dragging: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Step sizes for key actions.
    controls: ControlOptions,
    /// World units per wheel unit.
    wheel_scale: f32,
}

impl InputProcessor {
    /// Create a processor for the given demo using the bindings and step
    /// sizes in `options`.
    #[must_use]
    pub fn new(demo: DemoKind, options: &Options) -> Self {
        Self {
            demo,
            cursor: (0.0, 0.0),
            control_pressed: false,
            dragging: false,
            key_bindings: options.keybindings.clone(),
            controls: options.controls.clone(),
            wheel_scale: options.camera.wheel_scale,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    /// Whether the control modifier is held.
    #[must_use]
    pub fn control_pressed(&self) -> bool {
        self.control_pressed
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ViewCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => {
                self.demo.mouse().then_some(ViewCommand::Zoom {
                    wheel_delta: delta,
                    scale: self.wheel_scale,
                })
            }
            InputEvent::ModifiersChanged { control } => {
                self.control_pressed = control;
                None
            }
            InputEvent::KeyTyped { ch } => self.handle_key(ch),
        }
    }

    /// Cursor moved: feed the drag while the modifier is still held.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewCommand> {
        self.cursor = (x, y);
        (self.dragging && self.control_pressed)
            .then_some(ViewCommand::UpdateDrag { x, y })
    }

    /// Left or right press with control held starts a drag; any release
    /// ends it.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ViewCommand> {
        if !self.demo.mouse() {
            return None;
        }

        if pressed {
            let gated = matches!(button, MouseButton::Left | MouseButton::Right)
                && self.control_pressed;
            if gated && !self.dragging {
                self.dragging = true;
                let (x, y) = self.cursor;
                return Some(ViewCommand::BeginDrag { x, y });
            }
            return None;
        }

        if self.dragging {
            self.dragging = false;
            return Some(ViewCommand::EndDrag);
        }
        None
    }

    /// Look up a typed character and build the bound command.
    fn handle_key(&self, ch: char) -> Option<ViewCommand> {
        let action = self.key_bindings.lookup_char(ch)?;
        if !self.demo.supports(action) {
            return None;
        }
        Some(self.command_for(action))
    }

    /// Translate a bound action into a parameterized command.
    fn command_for(&self, action: KeyAction) -> ViewCommand {
        let [rx, ry, rz] = self.controls.rotate_step;
        let step = self.controls.translate_step;
        let rotate = |axis, degrees| ViewCommand::Rotate { axis, degrees };
        let translate = |delta| ViewCommand::Translate { delta };

        match action {
            KeyAction::RotateXForward => rotate(Axis::X, rx),
            KeyAction::RotateXBackward => rotate(Axis::X, -rx),
            KeyAction::RotateYForward => rotate(Axis::Y, ry),
            KeyAction::RotateYBackward => rotate(Axis::Y, -ry),
            KeyAction::RotateZForward => rotate(Axis::Z, rz),
            KeyAction::RotateZBackward => rotate(Axis::Z, -rz),
            KeyAction::TranslateXForward => translate(Vec3::X * step),
            KeyAction::TranslateXBackward => translate(Vec3::X * -step),
            KeyAction::TranslateYForward => translate(Vec3::Y * step),
            KeyAction::TranslateYBackward => translate(Vec3::Y * -step),
            KeyAction::TranslateZForward => translate(Vec3::Z * step),
            KeyAction::TranslateZBackward => translate(Vec3::Z * -step),
            KeyAction::CameraCloser => ViewCommand::Dolly {
                delta: -self.controls.camera_step,
            },
            KeyAction::CameraFarther => ViewCommand::Dolly {
                delta: self.controls.camera_step,
            },
            KeyAction::ScaleDown => ViewCommand::Scale {
                factor: self.controls.scale_factor.recip(),
            },
            KeyAction::ScaleUp => ViewCommand::Scale {
                factor: self.controls.scale_factor,
            },
            KeyAction::ToggleAxes => ViewCommand::ToggleAxes,
            KeyAction::StartAnimation => ViewCommand::StartAnimation,
            KeyAction::PauseAnimation => ViewCommand::PauseAnimation,
            KeyAction::StopAnimation => ViewCommand::StopAnimation,
            KeyAction::Quit => ViewCommand::Quit,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(DemoKind::All, &Options::default())
    }
}
