//! Digit-only inputs rendered through a fixed template.

use crate::props::{InputProps, Validation};
use core_types::InputMode;
use input_core::{FormattedNumericInput, NumericControl};
use numeric_format::{
    TemplateFormatter, filter_to_numeric, format_employer_identification_number,
    format_postal_code_number, format_social_security_number, format_telephone_number,
};
use validity::{
    MinLength, Validator, validate_numeric_length, validate_telephone_number,
};

/// Digits in a social security or employer identification number.
pub const IDENTIFICATION_NUMBER_LENGTH: usize = 9;
/// Digits in a U.S. zip code.
pub const POSTAL_CODE_LENGTH: usize = 5;

fn masked_input(
    props: InputProps,
    formatter: TemplateFormatter,
    default_mode: InputMode,
    validator: Option<Box<dyn Validator>>,
) -> FormattedNumericInput {
    props
        .into_input(Some(default_mode), validator)
        .with_filter(filter_to_numeric)
        .with_formatter(formatter)
}

fn length_validator(
    validation: &Validation<MinLength>,
    min_length: usize,
    title: Option<&str>,
) -> Option<Box<dyn Validator>> {
    let context = validation.context(MinLength { min_length }, title)?;
    Some(Box::new(validate_numeric_length(context)))
}

macro_rules! numeric_control {
    ($name:ident) => {
        impl NumericControl for $name {
            fn input(&self) -> &FormattedNumericInput {
                &self.input
            }

            fn input_mut(&mut self) -> &mut FormattedNumericInput {
                &mut self.input
            }
        }
    };
}

/// A telephone number, e.g. `(222) 333-4444`. Every locale currently uses
/// the U.S. ten digit layout.
#[derive(Debug)]
pub struct TelephoneNumberInput {
    input: FormattedNumericInput,
}

impl TelephoneNumberInput {
    /// Validation requires a complete number for `en-US` and nothing
    /// elsewhere.
    pub fn new(props: InputProps, validation: Validation<MinLength>) -> Self {
        let formatter = format_telephone_number(props.locales.clone());
        let validator = validation
            .context(MinLength::default(), props.title.as_deref())
            .map(|context| {
                Box::new(validate_telephone_number(props.locales.clone(), context))
                    as Box<dyn Validator>
            });
        Self {
            input: masked_input(props, formatter, InputMode::Tel, validator),
        }
    }
}

numeric_control!(TelephoneNumberInput);

/// A U.S. social security number, e.g. `123-45-6789`.
#[derive(Debug)]
pub struct SocialSecurityNumberInput {
    input: FormattedNumericInput,
}

impl SocialSecurityNumberInput {
    pub fn new(props: InputProps, validation: Validation<MinLength>) -> Self {
        let validator = length_validator(
            &validation,
            IDENTIFICATION_NUMBER_LENGTH,
            props.title.as_deref(),
        );
        Self {
            input: masked_input(
                props,
                format_social_security_number(),
                InputMode::Numeric,
                validator,
            ),
        }
    }
}

numeric_control!(SocialSecurityNumberInput);

/// A U.S. employer identification number, e.g. `12-3456789`.
#[derive(Debug)]
pub struct EmployerIdentificationNumberInput {
    input: FormattedNumericInput,
}

impl EmployerIdentificationNumberInput {
    pub fn new(props: InputProps, validation: Validation<MinLength>) -> Self {
        let validator = length_validator(
            &validation,
            IDENTIFICATION_NUMBER_LENGTH,
            props.title.as_deref(),
        );
        Self {
            input: masked_input(
                props,
                format_employer_identification_number(),
                InputMode::Numeric,
                validator,
            ),
        }
    }
}

numeric_control!(EmployerIdentificationNumberInput);

/// A U.S. five digit zip code.
#[derive(Debug)]
pub struct PostalCodeNumberInput {
    input: FormattedNumericInput,
}

impl PostalCodeNumberInput {
    pub fn new(props: InputProps, validation: Validation<MinLength>) -> Self {
        let validator = length_validator(&validation, POSTAL_CODE_LENGTH, props.title.as_deref());
        Self {
            input: masked_input(
                props,
                format_postal_code_number(),
                InputMode::Numeric,
                validator,
            ),
        }
    }
}

numeric_control!(PostalCodeNumberInput);
