/// Why a built-in validator failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidateErrorKind {
    LessThanMinLength,
    LessThanMinValue,
}

impl ValidateErrorKind {
    pub const ALL: [ValidateErrorKind; 2] = [
        ValidateErrorKind::LessThanMinLength,
        ValidateErrorKind::LessThanMinValue,
    ];

    /// Symbolic tag, stable across releases.
    pub const fn tag(self) -> &'static str {
        match self {
            ValidateErrorKind::LessThanMinLength => "INVALID_LESS_THAN_MIN_LENGTH",
            ValidateErrorKind::LessThanMinValue => "INVALID_LESS_THAN_MIN_VALUE",
        }
    }

    pub const fn default_message(self) -> &'static str {
        match self {
            ValidateErrorKind::LessThanMinLength => {
                "The entered value is shorter than the required minimum number of characters."
            }
            ValidateErrorKind::LessThanMinValue => {
                "The entered value is less than the required minimum value."
            }
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

/// A directive for the host element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidateResult {
    /// Message for the element's custom validity; empty means valid.
    pub custom_validity: String,
    /// Ask the element to surface the message immediately.
    pub report: bool,
}

impl ValidateResult {
    pub fn valid(report: bool) -> Self {
        Self {
            custom_validity: String::new(),
            report,
        }
    }

    pub fn invalid(message: impl Into<String>, report: bool) -> Self {
        Self {
            custom_validity: message.into(),
            report,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.custom_validity.is_empty()
    }
}

/// The tag form of a directive, handed to override hooks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidateResultError {
    /// `None` means valid.
    pub custom_validity: Option<ValidateErrorKind>,
    pub report: bool,
}

impl ValidateResultError {
    pub const fn valid(report: bool) -> Self {
        Self {
            custom_validity: None,
            report,
        }
    }

    pub const fn invalid(kind: ValidateErrorKind, report: bool) -> Self {
        Self {
            custom_validity: Some(kind),
            report,
        }
    }
}

impl From<ValidateResultError> for ValidateResult {
    fn from(error: ValidateResultError) -> Self {
        Self {
            custom_validity: error
                .custom_validity
                .map(|kind| kind.tag().to_string())
                .unwrap_or_default(),
            report: error.report,
        }
    }
}

/// Translate a tag message to its default text, then substitute `title` for
/// any non-empty message.
///
/// ```
/// use validity::{ValidateResult, update_default_custom_validity};
///
/// let tagged = ValidateResult::invalid("INVALID_LESS_THAN_MIN_VALUE", true);
/// let out = update_default_custom_validity(tagged, None);
/// assert_eq!(out.custom_validity, "The entered value is less than the required minimum value.");
///
/// let out = update_default_custom_validity(ValidateResult::invalid("nope", false), Some("Enter 7+"));
/// assert_eq!(out.custom_validity, "Enter 7+");
///
/// let out = update_default_custom_validity(ValidateResult::valid(true), Some("Enter 7+"));
/// assert_eq!(out.custom_validity, "");
/// ```
pub fn update_default_custom_validity(
    mut result: ValidateResult,
    title: Option<&str>,
) -> ValidateResult {
    if let Some(kind) = ValidateErrorKind::from_tag(&result.custom_validity) {
        result.custom_validity = kind.default_message().to_string();
    }

    if let Some(title) = title.filter(|title| !title.is_empty()) {
        if !result.custom_validity.is_empty() {
            result.custom_validity = title.to_string();
        }
    }

    result
}
