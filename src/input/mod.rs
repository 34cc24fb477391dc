//! Input handling: event types, drag gestures, key actions, and the input
//! processor that converts raw window events into viewer commands.

/// Pointer-drag to rotation mapping.
pub mod drag;
/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Converts raw events into viewer commands.
pub mod processor;

pub use drag::{drag_rotation, DragSession};
pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
