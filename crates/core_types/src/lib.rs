//! Plain data shared by the formatting, validation and input crates.

/// How the native value changed between two change events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChangeType {
    /// Characters were appended at the end of the value.
    #[default]
    Add,
    /// The caret ended up before the end of the value: a selection was
    /// replaced or the edit happened mid-string.
    Replace,
    Backspace,
    Delete,
}

impl ChangeType {
    /// `true` for edits that removed characters.
    pub fn is_deletion(self) -> bool {
        matches!(self, ChangeType::Backspace | ChangeType::Delete)
    }
}

/// The lifecycle point a validator is being asked about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidateContextType {
    /// The element lost focus.
    Blur,
    /// The element value changed.
    Change,
    /// The component has mounted.
    Mount,
}

impl ValidateContextType {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidateContextType::Blur => "blur",
            ValidateContextType::Change => "change",
            ValidateContextType::Mount => "mount",
        }
    }
}

/// Event that triggered a format request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatEvent {
    Blur,
    Change,
}

/// The context under which a formatter is invoked.
///
/// The default context (no event, not user keyed) is what mount and
/// programmatic formatting use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FormatterContext {
    pub event: Option<FormatEvent>,
    /// True if the user typed a single printable key to make the change.
    pub user_keyed: bool,
}

impl FormatterContext {
    pub const fn blur() -> Self {
        Self {
            event: Some(FormatEvent::Blur),
            user_keyed: false,
        }
    }

    pub const fn change(user_keyed: bool) -> Self {
        Self {
            event: Some(FormatEvent::Change),
            user_keyed,
        }
    }

    pub const fn user_keyed(user_keyed: bool) -> Self {
        Self {
            event: None,
            user_keyed,
        }
    }

    #[inline]
    pub fn is_blur(&self) -> bool {
        self.event == Some(FormatEvent::Blur)
    }

    /// A live keystroke: rounding must not apply.
    #[inline]
    pub fn is_keyed_change(&self) -> bool {
        self.event == Some(FormatEvent::Change) && self.user_keyed
    }
}

/// Virtual keyboard hint written to the element's `inputmode` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputMode {
    None,
    Text,
    Decimal,
    Numeric,
    Tel,
    Search,
    Email,
    Url,
}

impl InputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::None => "none",
            InputMode::Text => "text",
            InputMode::Decimal => "decimal",
            InputMode::Numeric => "numeric",
            InputMode::Tel => "tel",
            InputMode::Search => "search",
            InputMode::Email => "email",
            InputMode::Url => "url",
        }
    }
}
