use serde::Deserialize;

use super::binding::Modifiers;

/// A keyup as forwarded by the page bridge, in DOM naming.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    pub code: String,
    #[serde(default)]
    pub ctrl_key: bool,
    #[serde(default)]
    pub shift_key: bool,
    #[serde(default)]
    pub alt_key: bool,
}

impl KeyEvent {
    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            ctrl: self.ctrl_key,
            shift: self.shift_key,
            alt: self.alt_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_dom_field_names() {
        let event: KeyEvent =
            serde_json::from_str(r#"{"code":"KeyW","shiftKey":true,"altKey":true}"#)
                .expect("valid event json");
        assert_eq!(event.code, "KeyW");
        assert!(!event.ctrl_key);
        assert!(event.modifiers().covers(Modifiers {
            ctrl: false,
            shift: true,
            alt: true
        }));
    }
}
