//! The four demo variants and the behaviors each one exposes.

use std::fmt;
use std::str::FromStr;

use crate::error::CubeviewError;
use crate::input::KeyAction;

/// Which demo the viewer runs.
///
/// Every variant draws the same cuboid; they differ only in which inputs
/// drive it. `All` enables everything at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DemoKind {
    /// Static cuboid, no interaction beyond quitting.
    Cube,
    /// Timed X-axis rotation with start/pause/stop.
    Animation,
    /// Key-driven rotation, translation, scale, camera and axis overlay.
    Keyboard,
    /// Control-drag rotation and wheel zoom.
    Mouse,
    /// Every behavior.
    #[default]
    All,
}

impl DemoKind {
    /// All variants in launcher order.
    pub const ALL: [Self; 5] =
        [Self::Cube, Self::Animation, Self::Keyboard, Self::Mouse, Self::All];

    /// Command-line name of this variant.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Animation => "animation",
            Self::Keyboard => "keyboard",
            Self::Mouse => "mouse",
            Self::All => "all",
        }
    }

    /// Whether key bindings for the model transform and camera are live.
    #[must_use]
    pub fn keyboard(self) -> bool {
        matches!(self, Self::Keyboard | Self::All)
    }

    /// Whether control-drag rotation and wheel zoom are live.
    #[must_use]
    pub fn mouse(self) -> bool {
        matches!(self, Self::Mouse | Self::All)
    }

    /// Whether the animation ticker can be driven.
    #[must_use]
    pub fn animation(self) -> bool {
        matches!(self, Self::Animation | Self::All)
    }

    /// Whether a key action is available in this variant.
    #[must_use]
    pub fn supports(self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => true,
            KeyAction::StartAnimation
            | KeyAction::PauseAnimation
            | KeyAction::StopAnimation => self.animation(),
            _ => self.keyboard(),
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoKind {
    type Err = CubeviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == lowered)
            .ok_or_else(|| CubeviewError::UnknownDemo(s.to_owned()))
    }
}
