//! Locale punctuation to canonical en-US punctuation.

use crate::locale::{Locales, NumberLocale};

/// Maps a locale-formatted string to en-US punctuation.
pub trait Converter {
    fn convert(&self, input: &str) -> String;
}

impl<F> Converter for F
where
    F: Fn(&str) -> String,
{
    #[inline]
    fn convert(&self, input: &str) -> String {
        self(input)
    }
}

/// Swaps a locale's decimal and group separators for `.` and `,`.
///
/// Identity for locales that already use en-US punctuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberConverter {
    locale: &'static NumberLocale,
}

impl NumberConverter {
    pub fn new(locale: &'static NumberLocale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &'static NumberLocale {
        self.locale
    }
}

impl Converter for NumberConverter {
    fn convert(&self, input: &str) -> String {
        let NumberLocale {
            decimal_separator,
            group_separator,
            ..
        } = *self.locale;

        if decimal_separator == '.' && group_separator == ',' {
            return input.to_string();
        }

        input
            .chars()
            .map(|ch| {
                if ch == decimal_separator {
                    '.'
                } else if ch == group_separator {
                    ','
                } else if ch == '.' {
                    // A literal `.` in a `,`-decimal locale is grouping.
                    ','
                } else {
                    ch
                }
            })
            .collect()
    }
}

/// Create a converter for the first of `locales`.
///
/// ```
/// use numeric_format::{Converter, convert_number};
///
/// assert_eq!(convert_number("de-DE").convert("1.234,5"), "1,234.5");
/// assert_eq!(convert_number("en-US").convert("1,234.5"), "1,234.5");
/// ```
pub fn convert_number(locales: impl Into<Locales>) -> NumberConverter {
    NumberConverter::new(locales.into().number_locale())
}
