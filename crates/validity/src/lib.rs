//! # validity
//!
//! Validators map a canonical numeric value and a lifecycle point (mount,
//! change, blur) to an optional directive for the host element's native
//! constraint validation:
//!
//! - `None`: leave the element's validity untouched
//! - `Some(ValidateResult { custom_validity: "", .. })`: mark it valid
//! - anything else: mark it invalid with that message
//!
//! Built-in failures are produced as [`ValidateErrorKind`] tags and translated
//! to default messages before they leave the validator. A caller-supplied
//! [`UpdateCustomValidity`] hook sees the tag form and may replace the
//! directive. A non-empty message is finally replaced by the element title,
//! when one is set.

mod error;
mod result;
mod validators;

pub use core_types::ValidateContextType;
pub use error::ValidatorError;
pub use result::{
    ValidateErrorKind, ValidateResult, ValidateResultError, update_default_custom_validity,
};
pub use validators::{
    HookContext, MinLength, MinValue, MinValueValidator, NumericLengthValidator,
    UpdateCustomValidity, ValidateContext, Validator, telephone_min_length, validate_currency,
    validate_min_value, validate_numeric_length, validate_telephone_number,
};
