//! # numerics
//!
//! Controlled numeric text inputs. The workspace crates are re-exported
//! here under short names:
//!
//! - [`format`]: filters, converters and display formatters
//! - [`validity`]: validators and custom-validity directives
//! - [`input`]: the input state machine and the host element seam
//! - [`controls`]: currency, percent, telephone, SSN, EIN and postal inputs
//! - [`bus`]: the deferred task queue hosts drain after each update
//!
//! The usual entry points are also available at the crate root.

pub use ::bus;
pub use ::controls;
pub use ::validity;
pub use input_core as input;
pub use numeric_format as format;

pub use ::controls::{
    ControlError, CurrencyInputOptions, CurrencyNumberInput, EmployerIdentificationNumberInput,
    FormattedNumberInput, InputProps, NumberInputOptions, PercentNumberInput,
    PostalCodeNumberInput, SocialSecurityNumberInput, TelephoneNumberInput, Validation,
};
pub use core_types::{ChangeType, FormatEvent, FormatterContext, InputMode, ValidateContextType};
pub use input_core::{
    FormattedNumericInput, HostElement, InputElement, KeyOutcome, KeyboardEvent, NumericControl,
};
pub use numeric_format::{Converter, Filter, Formatter, Locales, RoundingMode};
