//! Inputs for real numbers: the generic number input and percent.

use crate::error::ControlError;
use crate::props::{InputProps, Validation};
use core_types::InputMode;
use input_core::{FormattedNumericInput, NumericControl};
use numeric_format::{
    Formatter, NumberFormatOptions, RoundingMode, convert_number, filter_to_signed_float,
    format_float, format_percent,
};
use validity::{MinValue, Validator, validate_min_value};

/// Options for number-valued inputs.
#[derive(Clone, Debug, Default)]
pub struct NumberInputOptions {
    /// Maximum fraction digits; `0` makes an integer input.
    pub decimal_places: Option<u32>,
    /// Lower bound. Also the minimum checked by validation.
    pub min: Option<String>,
    pub max: Option<String>,
    pub rounding_mode: Option<RoundingMode>,
    pub validation: Validation<MinValue>,
}

impl NumberInputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = Some(places);
        self
    }

    pub fn with_min(mut self, min: impl ToString) -> Self {
        self.min = Some(min.to_string());
        self
    }

    pub fn with_max(mut self, max: impl ToString) -> Self {
        self.max = Some(max.to_string());
        self
    }

    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = Some(mode);
        self
    }

    pub fn with_validation(mut self, validation: Validation<MinValue>) -> Self {
        self.validation = validation;
        self
    }

    fn format_options(&self, props: &InputProps) -> NumberFormatOptions {
        NumberFormatOptions {
            locales: props.locales.clone(),
            min: self.min.clone(),
            max: self.max.clone(),
            decimal_places: self.decimal_places,
            rounding_mode: self.rounding_mode,
        }
    }
}

/// Build a minimum-value validator if validation is active.
pub(crate) fn min_value_validator(
    validation: &Validation<MinValue>,
    min: Option<String>,
    title: Option<&str>,
) -> Result<Option<Box<dyn Validator>>, ControlError> {
    let Some(context) = validation.context(MinValue { min }, title) else {
        return Ok(None);
    };
    Ok(Some(Box::new(validate_min_value(context)?)))
}

/// The signed-float pipeline: locale converter, signed float filter and
/// `formatter`.
pub(crate) fn number_input(
    props: InputProps,
    formatter: Box<dyn Formatter>,
    default_mode: Option<InputMode>,
    validator: Option<Box<dyn Validator>>,
) -> FormattedNumericInput {
    let converter = convert_number(props.locales.clone());
    props
        .into_input(default_mode, validator)
        .with_converter(converter)
        .with_filter(filter_to_signed_float)
        .with_boxed_formatter(formatter)
}

/// A locale-aware number. The starting point for any input whose value is an
/// actual number.
///
/// - integer: `decimal_places = 0`
/// - positive: `min = 0`
#[derive(Debug)]
pub struct FormattedNumberInput {
    input: FormattedNumericInput,
}

impl FormattedNumberInput {
    pub fn new(props: InputProps, options: NumberInputOptions) -> Result<Self, ControlError> {
        let formatter = format_float(options.format_options(&props))?;
        Self::with_formatter(props, options, formatter)
    }

    /// Use `formatter` for display. `options` only feed validation.
    pub fn with_formatter(
        props: InputProps,
        options: NumberInputOptions,
        formatter: impl Formatter + 'static,
    ) -> Result<Self, ControlError> {
        let validator =
            min_value_validator(&options.validation, options.min, props.title.as_deref())?;
        Ok(Self {
            input: number_input(props, Box::new(formatter), None, validator),
        })
    }
}

impl NumericControl for FormattedNumberInput {
    fn input(&self) -> &FormattedNumericInput {
        &self.input
    }

    fn input_mut(&mut self) -> &mut FormattedNumericInput {
        &mut self.input
    }
}

/// A number followed by `%`. The sign is appended once the user stops typing
/// (blur, paste, programmatic updates).
#[derive(Debug)]
pub struct PercentNumberInput {
    input: FormattedNumericInput,
}

impl PercentNumberInput {
    pub fn new(props: InputProps, options: NumberInputOptions) -> Result<Self, ControlError> {
        let formatter = format_percent(options.format_options(&props))?;
        let validator =
            min_value_validator(&options.validation, options.min, props.title.as_deref())?;
        Ok(Self {
            input: number_input(
                props,
                Box::new(formatter),
                Some(InputMode::Decimal),
                validator,
            ),
        })
    }
}

impl NumericControl for PercentNumberInput {
    fn input(&self) -> &FormattedNumericInput {
        &self.input
    }

    fn input_mut(&mut self) -> &mut FormattedNumericInput {
        &mut self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input_core::{HostElement, InputElement};
    use numeric_format::FormatError;

    #[test]
    fn percent_defaults_to_decimal_keyboard() {
        let mut control = PercentNumberInput::new(InputProps::new(), NumberInputOptions::new())
            .unwrap();
        let mut element = InputElement::new();
        control.mount(&mut element, "222");
        assert_eq!(element.value(), "222%");
        assert_eq!(element.input_mode(), Some(InputMode::Decimal));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let options = NumberInputOptions::new().with_min(10).with_max(1);
        let err = FormattedNumberInput::new(InputProps::new(), options).unwrap_err();
        assert!(matches!(err, ControlError::Format(FormatError::MaxLessThanMin { .. })));
    }

    #[test]
    fn malformed_min_is_rejected_only_when_validating() {
        let identity = |input: &str, _: &str, _: numeric_format::FormatterContext| {
            input.to_string()
        };

        let options = NumberInputOptions::new().with_min("ten");
        assert!(FormattedNumberInput::with_formatter(InputProps::new(), options, identity).is_ok());

        let options = NumberInputOptions::new()
            .with_min("ten")
            .with_validation(Validation::enabled());
        let err = FormattedNumberInput::with_formatter(InputProps::new(), options, identity)
            .unwrap_err();
        assert!(matches!(err, ControlError::Validator(_)));
    }

    #[test]
    fn integer_input_truncates_fraction_on_mount() {
        let options = NumberInputOptions::new().with_decimal_places(0);
        let mut control = FormattedNumberInput::new(InputProps::new(), options).unwrap();
        let mut element = InputElement::new();
        control.mount(&mut element, "1234.9");
        assert_eq!(element.value(), "1,234");
        assert_eq!(control.numeric_value(), "1234");
    }
}
