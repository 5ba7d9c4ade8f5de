//! # controls
//!
//! Ready-made numeric inputs. Each one binds a filter, converter, formatter
//! and optional validator onto a [`FormattedNumericInput`] and picks a
//! default virtual keyboard:
//!
//! | control | value | keyboard |
//! |---|---|---|
//! | [`FormattedNumberInput`] | locale number | caller's choice |
//! | [`CurrencyNumberInput`] | `$1,234.50` | decimal |
//! | [`PercentNumberInput`] | `12.5%` | decimal |
//! | [`TelephoneNumberInput`] | `(222) 333-4444` | tel |
//! | [`SocialSecurityNumberInput`] | `123-45-6789` | numeric |
//! | [`EmployerIdentificationNumberInput`] | `12-3456789` | numeric |
//! | [`PostalCodeNumberInput`] | `12345` | numeric |
//!
//! Every control implements [`NumericControl`], so hosts drive them the same
//! way as the bare core.
//!
//! [`FormattedNumericInput`]: input_core::FormattedNumericInput
//! [`NumericControl`]: input_core::NumericControl

mod currency;
mod error;
mod masked;
mod number;
mod props;

pub use currency::{CurrencyInputOptions, CurrencyNumberInput};
pub use error::ControlError;
pub use masked::{
    EmployerIdentificationNumberInput, IDENTIFICATION_NUMBER_LENGTH, POSTAL_CODE_LENGTH,
    PostalCodeNumberInput, SocialSecurityNumberInput, TelephoneNumberInput,
};
pub use number::{FormattedNumberInput, NumberInputOptions, PercentNumberInput};
pub use props::{InputProps, Validation};
