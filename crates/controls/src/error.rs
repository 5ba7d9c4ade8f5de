use numeric_format::FormatError;
use validity::ValidatorError;

/// A control could not be configured.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    #[error("invalid format options: {0}")]
    Format(#[from] FormatError),
    #[error("invalid validation options: {0}")]
    Validator(#[from] ValidatorError),
}
