//! Keyboard events as the numeric inputs see them.

/// The key value of the Backspace key.
pub const BACKSPACE: &str = "Backspace";
/// The key value of the Delete key.
pub const DELETE: &str = "Delete";
/// Legacy key value some platforms report for Delete.
pub const DEL: &str = "Del";

/// A `keydown` as delivered to an input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// DOM key value: a single character for printable keys, otherwise a
    /// name such as `"ArrowLeft"`.
    pub key: String,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    /// An IME composition session is active.
    pub is_composing: bool,
}

impl KeyboardEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn composing(mut self) -> Self {
        self.is_composing = true;
        self
    }

    /// Alt, Ctrl or Meta is held. Shift only changes which character is
    /// produced.
    pub fn has_modifier(&self) -> bool {
        self.alt || self.ctrl || self.meta
    }

    /// The key produces exactly one character.
    pub fn is_printable(&self) -> bool {
        let mut chars = self.key.chars();
        chars.next().is_some() && chars.next().is_none()
    }
}

/// What the input decided about a `keydown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Let the host apply the key.
    Allow,
    /// Prevent the default action and stop propagation.
    Prevent,
}

impl KeyOutcome {
    pub fn is_prevented(self) -> bool {
        self == KeyOutcome::Prevent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_keys_are_single_characters() {
        assert!(KeyboardEvent::new("7").is_printable());
        assert!(KeyboardEvent::new("€").is_printable());
        assert!(!KeyboardEvent::new(BACKSPACE).is_printable());
        assert!(!KeyboardEvent::new("ArrowLeft").is_printable());
        assert!(!KeyboardEvent::new("").is_printable());
    }

    #[test]
    fn shift_is_not_a_modifier() {
        assert!(!KeyboardEvent::new("+").with_shift().has_modifier());
        assert!(KeyboardEvent::new("v").with_ctrl().has_modifier());
        assert!(KeyboardEvent::new("v").with_meta().has_modifier());
        assert!(KeyboardEvent::new("v").with_alt().has_modifier());
    }
}
