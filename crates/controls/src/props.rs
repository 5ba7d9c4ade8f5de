//! Props shared by every control.

use bus::TaskSender;
use core_types::InputMode;
use input_core::{FormattedNumericInput, NumericCallback};
use numeric_format::Locales;
use std::fmt;
use std::rc::Rc;
use validity::{
    HookContext, UpdateCustomValidity, ValidateContext, ValidateResult, ValidateResultError,
    Validator,
};

/// What the owner hands to a control.
#[derive(Default)]
pub struct InputProps {
    /// Defaults to `en-US`.
    pub locales: Locales,
    /// Overrides the control's default virtual keyboard hint.
    pub input_mode: Option<InputMode>,
    /// Written to the element and used as the message of every failed check.
    pub title: Option<String>,
    pub on_numeric_change: Option<NumericCallback>,
    pub on_blur: Option<NumericCallback>,
    /// Where post-mount notifications are queued.
    pub tasks: Option<TaskSender>,
    /// Used when the control's own validation is not active.
    pub validator: Option<Box<dyn Validator>>,
}

impl InputProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locales(mut self, locales: impl Into<Locales>) -> Self {
        self.locales = locales.into();
        self
    }

    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = Some(mode);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_on_numeric_change(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.on_numeric_change = Some(Rc::new(callback));
        self
    }

    pub fn with_on_blur(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.on_blur = Some(Rc::new(callback));
        self
    }

    pub fn with_tasks(mut self, tasks: TaskSender) -> Self {
        self.tasks = Some(tasks);
        self
    }

    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Build the core input. A built-in `validator` wins over the caller's.
    pub(crate) fn into_input(
        self,
        default_mode: Option<InputMode>,
        validator: Option<Box<dyn Validator>>,
    ) -> FormattedNumericInput {
        let mut input = FormattedNumericInput::new()
            .with_callbacks(self.on_numeric_change, self.on_blur)
            .with_boxed_validator(validator.or(self.validator));

        if let Some(mode) = self.input_mode.or(default_mode) {
            input = input.with_input_mode(mode);
        }
        if let Some(title) = self.title {
            input = input.with_title(title);
        }
        if let Some(tasks) = self.tasks {
            input = input.with_tasks(tasks);
        }
        input
    }
}

impl fmt::Debug for InputProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputProps")
            .field("locales", &self.locales)
            .field("input_mode", &self.input_mode)
            .field("title", &self.title)
            .field("validator", &self.validator.is_some())
            .finish_non_exhaustive()
    }
}

/// Opt-in validation for a control.
///
/// Validation runs when `validate` is set or an override hook is present.
pub struct Validation<P> {
    pub validate: bool,
    pub update_custom_validity: Option<UpdateCustomValidity<P>>,
}

impl<P> Validation<P> {
    pub fn enabled() -> Self {
        Self {
            validate: true,
            update_custom_validity: None,
        }
    }

    pub fn with_update_custom_validity<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &HookContext<'_, P>, Option<ValidateResultError>) -> Option<ValidateResult>
            + 'static,
    {
        self.update_custom_validity = Some(Rc::new(hook));
        self
    }

    pub fn is_active(&self) -> bool {
        self.validate || self.update_custom_validity.is_some()
    }

    pub(crate) fn context(&self, properties: P, title: Option<&str>) -> Option<ValidateContext<P>> {
        if !self.is_active() {
            return None;
        }
        Some(ValidateContext {
            properties,
            title: title.map(str::to_string),
            update_custom_validity: self.update_custom_validity.clone(),
        })
    }
}

impl<P> Default for Validation<P> {
    fn default() -> Self {
        Self {
            validate: false,
            update_custom_validity: None,
        }
    }
}

impl<P> Clone for Validation<P> {
    fn clone(&self) -> Self {
        Self {
            validate: self.validate,
            update_custom_validity: self.update_custom_validity.clone(),
        }
    }
}

impl<P> fmt::Debug for Validation<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validation")
            .field("validate", &self.validate)
            .field("hook", &self.update_custom_validity.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validity::MinLength;

    #[test]
    fn validation_is_opt_in() {
        let off = Validation::<MinLength>::default();
        assert!(!off.is_active());
        assert!(off.context(MinLength { min_length: 9 }, None).is_none());

        assert!(Validation::<MinLength>::enabled().is_active());

        let hooked = Validation::<MinLength>::default().with_update_custom_validity(|_, _, _| None);
        assert!(hooked.is_active());
        let context = hooked.context(MinLength { min_length: 9 }, Some("Nine digits"));
        assert_eq!(context.and_then(|c| c.title), Some("Nine digits".to_string()));
    }

    #[test]
    fn input_mode_override_wins() {
        let input = InputProps::new()
            .with_input_mode(InputMode::Text)
            .into_input(Some(InputMode::Numeric), None);
        assert_eq!(input.input_mode(), Some(InputMode::Text));

        let input = InputProps::new().into_input(Some(InputMode::Numeric), None);
        assert_eq!(input.input_mode(), Some(InputMode::Numeric));
    }
}
