use serde::Serialize;

use super::event::KeyEvent;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_warn;

/// Subset of {ctrl, shift, alt}.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        alt: false,
    };

    /// True when every modifier in `required` is also set in `self`.
    pub fn covers(self, required: Modifiers) -> bool {
        (!required.ctrl || self.ctrl) && (!required.shift || self.shift) && (!required.alt || self.alt)
    }

    /// Names in the form used by the configuration surface and the page bridge.
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(3);
        if self.ctrl {
            names.push("ctrl");
        }
        if self.shift {
            names.push("shift");
        }
        if self.alt {
            names.push("alt");
        }
        names
    }

    /// Parses a comma separated list such as `"shift,alt"`.
    ///
    /// Empty segments are skipped, so `""` means no modifier is required. An unknown name is
    /// returned as the error.
    pub fn parse(raw: &str) -> Result<Modifiers, String> {
        let mut modifiers = Modifiers::NONE;
        for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            match name.to_ascii_lowercase().as_str() {
                "ctrl" => modifiers.ctrl = true,
                "shift" => modifiers.shift = true,
                "alt" => modifiers.alt = true,
                _ => return Err(name.to_string()),
            }
        }
        Ok(modifiers)
    }
}

/// A normalized shortcut: one alphanumeric key plus the modifiers it requires.
///
/// `code` follows the DOM `KeyboardEvent.code` naming (`KeyW`, `Digit3`). A binding built
/// from an unsupported character or modifier has no code and never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutBinding {
    code: Option<String>,
    modifiers: Modifiers,
}

impl ShortcutBinding {
    pub fn new(key: &str, modifiers: &str) -> Self {
        let Some(first) = key.chars().next() else {
            log_warn!("empty shortcut key; binding disabled");
            return Self::disabled();
        };

        let Some(code) = key_code(first) else {
            log_warn!("unsupported shortcut key {first:?}; only a-z and 0-9 are supported");
            return Self::disabled();
        };

        match Modifiers::parse(modifiers) {
            Ok(modifiers) => Self {
                code: Some(code),
                modifiers,
            },
            Err(unknown) => {
                log_warn!("unknown modifier {unknown:?} for key {first:?}; binding disabled");
                Self::disabled()
            }
        }
    }

    fn disabled() -> Self {
        Self {
            code: None,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Code must be equal and every required modifier held; extra modifiers are ignored.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        match &self.code {
            Some(code) => *code == event.code && event.modifiers().covers(self.modifiers),
            None => false,
        }
    }

    /// Form handed to the page bridge so it can suppress the browser default synchronously.
    pub fn descriptor(&self) -> Option<BindingDescriptor> {
        self.code.as_ref().map(|code| BindingDescriptor {
            code: code.clone(),
            modifiers: self.modifiers.names(),
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BindingDescriptor {
    pub code: String,
    pub modifiers: Vec<&'static str>,
}

fn key_code(key: char) -> Option<String> {
    if key.is_ascii_alphabetic() {
        Some(format!("Key{}", key.to_ascii_uppercase()))
    } else if key.is_ascii_digit() {
        Some(format!("Digit{key}"))
    } else {
        None
    }
}
