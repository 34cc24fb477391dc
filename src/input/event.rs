/// A window-system event reduced to what the viewer reacts to.
///
/// Hosts translate their native events into these and pass them to
/// [`ViewSession::handle_input`](crate::engine::session::ViewSession::handle_input).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position inside the viewport, physical pixels from the
    /// top-left corner.
    CursorMoved {
        /// Pixels from the left edge.
        x: f32,
        /// Pixels from the top edge.
        y: f32,
    },
    /// A pointer button went down or up.
    MouseButton {
        /// The button.
        button: MouseButton,
        /// Down (`true`) or up (`false`).
        pressed: bool,
    },
    /// Wheel motion in notch units: one detent is 120.
    Scroll {
        /// Positive pushes the camera back.
        delta: f32,
    },
    /// The set of held modifiers changed.
    ModifiersChanged {
        /// Control is held.
        control: bool,
    },
    /// A key press that produced one character of text.
    KeyTyped {
        /// The character, with shift already applied.
        ch: char,
    },
}

/// Pointer buttons the viewer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button.
    Left,
    /// Right button.
    Right,
    /// Middle and any extra buttons. Never starts a drag.
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            // Back/Forward/Other never start a drag either.
            _ => Self::Middle,
        }
    }
}
