use crate::error::ControlError;
use crate::number::{min_value_validator, number_input};
use crate::props::{InputProps, Validation};
use core_types::InputMode;
use input_core::{FormattedNumericInput, HostElement, NumericControl};
use numeric_format::{
    CurrencyOptions, Locales, PadOptions, RoundingMode, format_currency, pad_numeric_fraction,
};
use validity::MinValue;

/// Options for [`CurrencyNumberInput`].
#[derive(Clone, Debug)]
pub struct CurrencyInputOptions {
    /// Allow a fractional part (e.g. cents). On by default.
    pub show_fraction: bool,
    /// Defaults to half-up.
    pub rounding_mode: RoundingMode,
    /// Minimum checked by validation. Not a formatting bound.
    pub min: Option<String>,
    pub validation: Validation<MinValue>,
}

impl Default for CurrencyInputOptions {
    fn default() -> Self {
        Self {
            show_fraction: true,
            rounding_mode: RoundingMode::HalfUp,
            min: None,
            validation: Validation::default(),
        }
    }
}

impl CurrencyInputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_show_fraction(mut self, show_fraction: bool) -> Self {
        self.show_fraction = show_fraction;
        self
    }

    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    pub fn with_min(mut self, min: impl ToString) -> Self {
        self.min = Some(min.to_string());
        self
    }

    pub fn with_validation(mut self, validation: Validation<MinValue>) -> Self {
        self.validation = validation;
        self
    }
}

/// A currency amount shown with the locale's symbol, e.g. `$1,234.50`.
///
/// The canonical value is never rounded; only the display is. With
/// `show_fraction` the owner receives the value right-padded to the locale's
/// fraction length once after mount and again on every blur.
#[derive(Debug)]
pub struct CurrencyNumberInput {
    input: FormattedNumericInput,
    locales: Locales,
    show_fraction: bool,
}

impl CurrencyNumberInput {
    pub fn new(props: InputProps, options: CurrencyInputOptions) -> Result<Self, ControlError> {
        let formatter = format_currency(
            props.locales.clone(),
            CurrencyOptions::default()
                .with_show_fraction(options.show_fraction)
                .with_rounding_mode(options.rounding_mode),
        )?;
        let validator =
            min_value_validator(&options.validation, options.min, props.title.as_deref())?;
        let locales = props.locales.clone();

        let input = number_input(
            props,
            Box::new(formatter),
            Some(InputMode::Decimal),
            validator,
        )
        .with_correct_on_mount(false);

        Ok(Self {
            input,
            locales,
            show_fraction: options.show_fraction,
        })
    }

    fn padded(&self, value: &str) -> String {
        let padded = pad_numeric_fraction(
            self.locales.clone(),
            value,
            PadOptions {
                decimal_separator: Some('.'),
                ..PadOptions::default()
            },
        );
        log::trace!(target: "numerics.input", "currency value {value:?} padded to {padded:?}");
        padded
    }
}

impl NumericControl for CurrencyNumberInput {
    fn input(&self) -> &FormattedNumericInput {
        &self.input
    }

    fn input_mut(&mut self) -> &mut FormattedNumericInput {
        &mut self.input
    }

    fn mount(&mut self, element: &mut dyn HostElement, numeric_value: &str) {
        self.input.mount(element, numeric_value);
        if self.show_fraction {
            self.input.schedule_numeric_change(self.padded(numeric_value));
        }
    }

    fn blur(&mut self, element: &mut dyn HostElement) {
        self.input.blur(element);
        if self.show_fraction {
            let padded = self.padded(self.input.numeric_value());
            self.input.notify(&padded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input_core::InputElement;

    fn mount(options: CurrencyInputOptions, locale: &str, value: &str) -> InputElement {
        let props = InputProps::new().with_locales(locale);
        let mut control = CurrencyNumberInput::new(props, options).unwrap();
        let mut element = InputElement::new();
        control.mount(&mut element, value);
        element
    }

    #[test]
    fn midpoint_rounds_up_for_display() {
        assert_eq!(mount(CurrencyInputOptions::new(), "en-US", "2.225").value(), "$2.23");
        assert_eq!(mount(CurrencyInputOptions::new(), "en-US", "2.224").value(), "$2.22");
    }

    #[test]
    fn rounding_mode_is_configurable() {
        let options = CurrencyInputOptions::new().with_rounding_mode(RoundingMode::Down);
        assert_eq!(mount(options, "en-US", "2.229").value(), "$2.22");
    }

    #[test]
    fn whole_units_without_fraction() {
        let options = CurrencyInputOptions::new().with_show_fraction(false);
        assert_eq!(mount(options, "en-US", "1234.56").value(), "$1,235");
    }

    #[test]
    fn defaults_to_decimal_keyboard() {
        let element = mount(CurrencyInputOptions::new(), "en-US", "");
        assert_eq!(element.input_mode(), Some(InputMode::Decimal));
        assert_eq!(element.value(), "");
    }
}
