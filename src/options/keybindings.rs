use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to typed characters.
///
/// Keys are the text a key press produces, so bindings are case-sensitive:
/// `"x"` and `"X"` are different keys.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `RotateXForward` → `"x"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::RotateXForward, "x".into()),
            (KeyAction::RotateXBackward, "X".into()),
            (KeyAction::RotateYForward, "y".into()),
            (KeyAction::RotateYBackward, "Y".into()),
            (KeyAction::RotateZForward, "z".into()),
            (KeyAction::RotateZBackward, "Z".into()),
            (KeyAction::TranslateXForward, "a".into()),
            (KeyAction::TranslateXBackward, "A".into()),
            (KeyAction::TranslateZForward, "b".into()),
            (KeyAction::TranslateZBackward, "B".into()),
            (KeyAction::TranslateYForward, "c".into()),
            (KeyAction::TranslateYBackward, "C".into()),
            (KeyAction::CameraCloser, "i".into()),
            (KeyAction::CameraFarther, "o".into()),
            (KeyAction::ScaleDown, "s".into()),
            (KeyAction::ScaleUp, "S".into()),
            (KeyAction::ToggleAxes, "g".into()),
            (KeyAction::StartAnimation, "r".into()),
            (KeyAction::PauseAnimation, "p".into()),
            (KeyAction::StopAnimation, "t".into()),
            (KeyAction::Quit, "q".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Look up the action for a typed character.
    #[must_use]
    pub fn lookup_char(&self, ch: char) -> Option<KeyAction> {
        let mut buf = [0u8; 4];
        self.lookup(ch.encode_utf8(&mut buf))
    }

    /// Bind `action` to `key`, replacing its previous key. Any other action
    /// that was on `key` becomes unbound.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings.retain(|a, k| *a == action || *k != key);
        let _ = self.bindings.insert(action, key);
        self.rebuild_reverse_map();
    }
}
