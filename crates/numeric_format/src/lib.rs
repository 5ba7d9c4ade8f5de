//! # numeric_format
//!
//! Pure functions that turn user input into canonical numeric strings and
//! canonical numeric strings into locale-formatted display strings.
//!
//! - [`filters`]: strip characters that are not allowed for a numeric domain
//! - [`converters`]: map locale punctuation to canonical en-US punctuation
//! - [`NumberFormat`]: the bounds/rounding/grouping engine
//! - [`formatters`]: currency, percent, float, integer and masked templates
//!
//! A canonical value only ever contains `-`, `+`, digits and at most one `.`.
//! Nothing in this crate performs I/O or keeps state between calls.

mod error;
mod locale;
mod number;

pub mod converters;
pub mod filters;
pub mod formatters;

pub use converters::{Converter, NumberConverter, convert_number};
pub use error::FormatError;
pub use filters::{Filter, filter_to_numeric, filter_to_signed_float, filter_to_signed_numeric};
pub use formatters::{
    CurrencyFormatter, CurrencyOptions, FloatFormatter, Formatter, IntegerFormatter,
    PadOptions, PercentFormatter, TemplateFormatter, format_currency,
    format_employer_identification_number, format_float, format_integer, format_numeric_string,
    format_percent, format_postal_code_number, format_social_security_number,
    format_telephone_number, pad_numeric_fraction,
};
pub use locale::{Locales, NumberLocale, get_locale, lookup_locale};
pub use number::{
    DEFAULT_MAX_DECIMAL_PLACES, NumberFormat, NumberFormatOptions, RoundingMode,
    format_number_string, parse_decimal,
};

pub use core_types::{FormatEvent, FormatterContext};
