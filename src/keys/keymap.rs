use serde::{Deserialize, Serialize};

use super::binding::{BindingDescriptor, ShortcutBinding};
use super::event::KeyEvent;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Speed,
    Loop,
    Back,
    PlayPause,
    Forward,
    Reset,
    Rewind,
    Fullscreen,
}

impl Action {
    /// Dispatch order. When two bindings accept the same event the earlier one wins.
    pub const ALL: [Action; 8] = [
        Action::Speed,
        Action::Loop,
        Action::Back,
        Action::PlayPause,
        Action::Forward,
        Action::Reset,
        Action::Rewind,
        Action::Fullscreen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Speed => "speed",
            Action::Loop => "loop",
            Action::Back => "back",
            Action::PlayPause => "playPause",
            Action::Forward => "forward",
            Action::Reset => "reset",
            Action::Rewind => "rewind",
            Action::Fullscreen => "fullscreen",
        }
    }
}

/// One shortcut as written in configuration: `{ "key": "w", "modifiers": "shift,alt" }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BindingSpec {
    pub key: String,
    #[serde(default)]
    pub modifiers: String,
}

impl BindingSpec {
    fn shift_alt(key: &str) -> Self {
        Self {
            key: key.to_string(),
            modifiers: "shift,alt".to_string(),
        }
    }
}

/// Raw shortcut configuration. Actions missing from a parsed document keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct KeymapConfig {
    pub speed: BindingSpec,
    pub r#loop: BindingSpec,
    pub back: BindingSpec,
    pub play_pause: BindingSpec,
    pub forward: BindingSpec,
    pub reset: BindingSpec,
    pub rewind: BindingSpec,
    pub fullscreen: BindingSpec,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            speed: BindingSpec::shift_alt("e"),
            r#loop: BindingSpec::shift_alt("w"),
            back: BindingSpec::shift_alt("a"),
            play_pause: BindingSpec::shift_alt("s"),
            forward: BindingSpec::shift_alt("d"),
            reset: BindingSpec::shift_alt("q"),
            rewind: BindingSpec::shift_alt("r"),
            fullscreen: BindingSpec::shift_alt("f"),
        }
    }
}

impl KeymapConfig {
    pub fn spec(&self, action: Action) -> &BindingSpec {
        match action {
            Action::Speed => &self.speed,
            Action::Loop => &self.r#loop,
            Action::Back => &self.back,
            Action::PlayPause => &self.play_pause,
            Action::Forward => &self.forward,
            Action::Reset => &self.reset,
            Action::Rewind => &self.rewind,
            Action::Fullscreen => &self.fullscreen,
        }
    }
}

/// Normalized bindings for all eight actions, built once at startup.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(Action, ShortcutBinding)>,
}

impl Keymap {
    pub fn from_config(config: &KeymapConfig) -> Self {
        let bindings = Action::ALL
            .iter()
            .map(|&action| {
                let spec = config.spec(action);
                let binding = ShortcutBinding::new(&spec.key, &spec.modifiers);
                log_debug!("{} bound to {:?} ({})", action.as_str(), binding.code(), spec.modifiers);
                (action, binding)
            })
            .collect();
        Self { bindings }
    }

    pub fn resolve(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(_, binding)| binding.matches(event))
            .map(|(action, _)| *action)
    }

    pub fn descriptors(&self) -> Vec<BindingDescriptor> {
        self.bindings
            .iter()
            .filter_map(|(_, binding)| binding.descriptor())
            .collect()
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}
