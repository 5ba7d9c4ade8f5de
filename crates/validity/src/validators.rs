//! The built-in validators and the shared minimum-check state machine.
//!
//! | lifecycle | satisfied                  | not satisfied                   |
//! |-----------|----------------------------|---------------------------------|
//! | change    | valid, report              | valid, report                   |
//! | blur      | valid, report              | invalid, report                 |
//! | mount     | no directive               | invalid, no report              |

use crate::error::ValidatorError;
use crate::result::{
    ValidateErrorKind, ValidateResult, ValidateResultError, update_default_custom_validity,
};
use bigdecimal::BigDecimal;
use core_types::ValidateContextType;
use numeric_format::{Locales, parse_decimal};
use std::fmt;
use std::rc::Rc;

/// Examines a canonical value at a lifecycle point.
///
/// `None` leaves the element's validity unchanged.
pub trait Validator {
    fn validate(&self, number: &str, kind: ValidateContextType) -> Option<ValidateResult>;
}

impl<F> Validator for F
where
    F: Fn(&str, ValidateContextType) -> Option<ValidateResult>,
{
    #[inline]
    fn validate(&self, number: &str, kind: ValidateContextType) -> Option<ValidateResult> {
        self(number, kind)
    }
}

/// What an override hook is told about the validation in progress.
#[derive(Debug)]
pub struct HookContext<'a, P> {
    pub properties: &'a P,
    pub kind: ValidateContextType,
}

/// Caller-supplied override, invoked after the built-in check.
///
/// Receives the canonical value, the validation parameters with the lifecycle
/// type, and the built-in directive in tag form. Returning `Some` replaces the
/// directive; `None` keeps it.
pub type UpdateCustomValidity<P> = Rc<
    dyn Fn(&str, &HookContext<'_, P>, Option<ValidateResultError>) -> Option<ValidateResult>,
>;

/// Validation parameters plus the shared `title` and override hook.
pub struct ValidateContext<P> {
    pub properties: P,
    /// Replaces every non-empty message when set.
    pub title: Option<String>,
    pub update_custom_validity: Option<UpdateCustomValidity<P>>,
}

impl<P> ValidateContext<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            title: None,
            update_custom_validity: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_update_custom_validity<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &HookContext<'_, P>, Option<ValidateResultError>) -> Option<ValidateResult>
            + 'static,
    {
        self.update_custom_validity = Some(Rc::new(hook));
        self
    }

    fn finish(
        &self,
        number: &str,
        kind: ValidateContextType,
        result: Option<ValidateResultError>,
    ) -> Option<ValidateResult> {
        let result = match &self.update_custom_validity {
            Some(hook) => {
                let context = HookContext {
                    properties: &self.properties,
                    kind,
                };
                match hook(number, &context, result) {
                    Some(replaced) => {
                        log::trace!(
                            target: "numerics.input",
                            "{} validity for {number:?} overridden by hook",
                            kind.as_str()
                        );
                        Some(replaced)
                    }
                    None => result.map(Into::into),
                }
            }
            None => result.map(Into::into),
        };

        result.map(|result| update_default_custom_validity(result, self.title.as_deref()))
    }
}

impl<P: Clone> Clone for ValidateContext<P> {
    fn clone(&self) -> Self {
        Self {
            properties: self.properties.clone(),
            title: self.title.clone(),
            update_custom_validity: self.update_custom_validity.clone(),
        }
    }
}

impl<P: Default> Default for ValidateContext<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: fmt::Debug> fmt::Debug for ValidateContext<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidateContext")
            .field("properties", &self.properties)
            .field("title", &self.title)
            .field("update_custom_validity", &self.update_custom_validity.is_some())
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MinValue {
    pub min: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinLength {
    pub min_length: usize,
}

fn check_minimum(
    kind: ValidateContextType,
    error: ValidateErrorKind,
    satisfied: impl FnOnce() -> bool,
) -> Option<ValidateResultError> {
    match kind {
        // Never scold while the user is still typing.
        ValidateContextType::Change => Some(ValidateResultError::valid(true)),
        ValidateContextType::Blur => Some(if satisfied() {
            ValidateResultError::valid(true)
        } else {
            ValidateResultError::invalid(error, true)
        }),
        ValidateContextType::Mount => {
            (!satisfied()).then_some(ValidateResultError::invalid(error, false))
        }
    }
}

/// Fails when the value is below a minimum. Empty values pass.
#[derive(Debug)]
pub struct MinValueValidator {
    min: Option<BigDecimal>,
    context: ValidateContext<MinValue>,
}

impl MinValueValidator {
    fn satisfied(&self, number: &str) -> bool {
        let Some(min) = &self.min else {
            return true;
        };
        if number.is_empty() {
            return true;
        }
        parse_decimal(number).is_some_and(|value| value >= *min)
    }
}

impl Validator for MinValueValidator {
    fn validate(&self, number: &str, kind: ValidateContextType) -> Option<ValidateResult> {
        let result = check_minimum(kind, ValidateErrorKind::LessThanMinValue, || {
            self.satisfied(number)
        });
        self.context.finish(number, kind, result)
    }
}

/// ```
/// use validity::{MinValue, ValidateContext, ValidateContextType, Validator, validate_min_value};
///
/// let context = ValidateContext::new(MinValue { min: Some("7".into()) });
/// let validator = validate_min_value(context).unwrap();
/// assert_eq!(validator.validate("", ValidateContextType::Mount), None);
/// assert!(!validator.validate("5", ValidateContextType::Blur).unwrap().is_valid());
/// ```
pub fn validate_min_value(
    context: ValidateContext<MinValue>,
) -> Result<MinValueValidator, ValidatorError> {
    let min = match context.properties.min.as_deref() {
        Some(raw) => Some(parse_decimal(raw).ok_or_else(|| ValidatorError::InvalidMin {
            value: raw.to_string(),
        })?),
        None => None,
    };
    Ok(MinValueValidator { min, context })
}

/// Currency amounts only have a minimum-value rule.
pub fn validate_currency(
    context: ValidateContext<MinValue>,
) -> Result<MinValueValidator, ValidatorError> {
    validate_min_value(context)
}

/// Fails when the value has fewer characters than required. Empty values pass.
#[derive(Debug)]
pub struct NumericLengthValidator {
    context: ValidateContext<MinLength>,
}

impl NumericLengthValidator {
    pub fn min_length(&self) -> usize {
        self.context.properties.min_length
    }
}

impl Validator for NumericLengthValidator {
    fn validate(&self, number: &str, kind: ValidateContextType) -> Option<ValidateResult> {
        let min_length = self.context.properties.min_length;
        let result = check_minimum(kind, ValidateErrorKind::LessThanMinLength, || {
            let length = number.chars().count();
            length == 0 || length >= min_length
        });
        self.context.finish(number, kind, result)
    }
}

pub fn validate_numeric_length(context: ValidateContext<MinLength>) -> NumericLengthValidator {
    NumericLengthValidator { context }
}

/// Digits in a complete telephone number for `locales`; 0 when unknown.
pub fn telephone_min_length(locales: &Locales) -> usize {
    if locales.is_en_us() { 10 } else { 0 }
}

/// A length validator whose minimum comes from the locale's telephone layout.
///
/// Any `min_length` already in `context` is replaced.
pub fn validate_telephone_number(
    locales: impl Into<Locales>,
    mut context: ValidateContext<MinLength>,
) -> NumericLengthValidator {
    context.properties.min_length = telephone_min_length(&locales.into());
    validate_numeric_length(context)
}
