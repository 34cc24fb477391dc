//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (camera, key step sizes, display toggles,
//! animation cadence, keybindings) are consolidated here. Options serialize
//! to/from TOML so a preset file can override any subset of them.

mod animation;
mod camera;
mod controls;
mod display;
mod keybindings;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};

use crate::error::CubeviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera placement, projection, and zoom limits.
    pub camera: CameraOptions,
    /// Keyboard step sizes.
    pub controls: ControlOptions,
    /// Display toggles and cuboid size.
    pub display: DisplayOptions,
    /// Animation ticker cadence.
    pub animation: AnimationOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CubeviewError::OptionsParse`] for malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, CubeviewError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| CubeviewError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CubeviewError::Io`] if the file cannot be read, or
    /// [`CubeviewError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, CubeviewError> {
        let content = std::fs::read_to_string(path).map_err(CubeviewError::Io)?;
        let opts = Self::from_toml_str(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), CubeviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CubeviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CubeviewError::Io)?;
        }
        std::fs::write(path, content).map_err(CubeviewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
max_distance = 50.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.max_distance, 50.0);
        // Everything else should be default
        assert_eq!(opts.camera.min_distance, 1.0);
        assert_eq!(opts.camera.position, [4.0, 4.0, 4.0]);
        assert_eq!(opts.controls.rotate_step, [5.0, 5.0, 5.0]);
        assert_eq!(opts.animation.tick_interval_ms, 10);
        assert_eq!(opts.keybindings.lookup("q"), Some(KeyAction::Quit));
    }

    #[test]
    fn keybinding_lookup_is_case_sensitive() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("x"),
            Some(KeyAction::RotateXForward)
        );
        assert_eq!(
            opts.keybindings.lookup("X"),
            Some(KeyAction::RotateXBackward)
        );
        assert_eq!(opts.keybindings.lookup("S"), Some(KeyAction::ScaleUp));
        assert_eq!(opts.keybindings.lookup("s"), Some(KeyAction::ScaleDown));
        assert_eq!(opts.keybindings.lookup("w"), None);
    }

    #[test]
    fn rebinding_from_toml_updates_reverse_map() {
        let toml_str = r#"
[keybindings.bindings]
quit = "Q"
toggle_axes = "h"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("Q"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("h"), Some(KeyAction::ToggleAxes));
        // A bindings table replaces the default map wholesale.
        assert_eq!(opts.keybindings.lookup("q"), None);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml_str("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, CubeviewError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = std::env::temp_dir()
            .join(format!("cubeview-options-{}", std::process::id()));
        let path = dir.join("nested").join("options.toml");

        let mut opts = Options::default();
        opts.camera.max_distance = 12.5;
        opts.display.show_axes = true;
        opts.keybindings.bind(KeyAction::Quit, "Q");
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(loaded.keybindings.lookup("Q"), Some(KeyAction::Quit));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("cubeview-does-not-exist.toml");
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, CubeviewError::Io(_)));
    }

    #[test]
    fn zero_tick_interval_is_bumped() {
        let opts = AnimationOptions {
            tick_interval_ms: 0,
            ..AnimationOptions::default()
        };
        assert_eq!(opts.tick_interval().as_millis(), 1);
    }
}
