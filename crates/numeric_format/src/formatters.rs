//! Display formatters built on [`NumberFormat`] plus the masked templates.

use crate::error::FormatError;
use crate::locale::{Locales, NumberLocale};
use crate::number::{NumberFormat, NumberFormatOptions, RoundingMode};
use core_types::FormatterContext;

/// Turns a canonical numeric string into a display string.
///
/// `input` uses en-US punctuation. `previous` is the display value currently
/// shown; a formatter returns it to reject an edit.
pub trait Formatter {
    fn format(&self, input: &str, previous: &str, context: FormatterContext) -> String;

    /// Format with no previous value and the default (mount) context.
    fn format_value(&self, input: &str) -> String {
        self.format(input, "", FormatterContext::default())
    }
}

impl<F> Formatter for F
where
    F: Fn(&str, &str, FormatterContext) -> String,
{
    #[inline]
    fn format(&self, input: &str, previous: &str, context: FormatterContext) -> String {
        self(input, previous, context)
    }
}

/// Floating point numbers. Excess fraction digits are truncated unless a
/// rounding mode is configured.
#[derive(Clone, Debug)]
pub struct FloatFormatter {
    number: NumberFormat,
}

impl Formatter for FloatFormatter {
    fn format(&self, input: &str, previous: &str, context: FormatterContext) -> String {
        self.number.format(input, previous, context)
    }
}

/// Create a float formatter; `rounding_mode` defaults to [`RoundingMode::Down`].
///
/// ```
/// use numeric_format::{Formatter, NumberFormatOptions, format_float};
///
/// let f = format_float(NumberFormatOptions::new("de-DE")).unwrap();
/// assert_eq!(f.format_value("3.14"), "3,14");
/// ```
pub fn format_float(mut options: NumberFormatOptions) -> Result<FloatFormatter, FormatError> {
    options.rounding_mode.get_or_insert(RoundingMode::Down);
    Ok(FloatFormatter {
        number: NumberFormat::new(&options)?,
    })
}

/// Integers: no fraction, truncated.
#[derive(Clone, Debug)]
pub struct IntegerFormatter {
    number: NumberFormat,
}

impl Formatter for IntegerFormatter {
    fn format(&self, input: &str, previous: &str, _context: FormatterContext) -> String {
        self.number
            .format(input, previous, FormatterContext::default())
    }
}

pub fn format_integer(locales: impl Into<Locales>) -> IntegerFormatter {
    IntegerFormatter {
        number: NumberFormat::unbounded(&locales.into(), Some(0), RoundingMode::Down),
    }
}

/// Numbers followed by `%` once the user stops typing.
#[derive(Clone, Debug)]
pub struct PercentFormatter {
    number: NumberFormat,
}

impl Formatter for PercentFormatter {
    fn format(&self, input: &str, previous: &str, context: FormatterContext) -> String {
        let previous = previous.strip_suffix('%').unwrap_or(previous);
        let mut value = self.number.format(input, previous, context);

        if !value.is_empty() && !context.user_keyed {
            value.push('%');
        }
        value
    }
}

/// ```
/// use numeric_format::{Formatter, FormatterContext, NumberFormatOptions, format_percent};
///
/// let f = format_percent(NumberFormatOptions::default().with_decimal_places(2)).unwrap();
/// assert_eq!(f.format("1.239", "1.23", FormatterContext::change(true)), "1.23");
/// assert_eq!(f.format_value("1.239"), "1.24%");
/// ```
pub fn format_percent(options: NumberFormatOptions) -> Result<PercentFormatter, FormatError> {
    Ok(PercentFormatter {
        number: NumberFormat::new(&options)?,
    })
}

/// Currency-specific options. Fraction length and symbol come from the locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyOptions {
    /// Allow a fractional part (e.g. cents).
    pub show_fraction: bool,
    /// Always right-pad the fraction with zeros, not only on blur.
    pub pad_right: bool,
    pub rounding_mode: Option<RoundingMode>,
    pub min: Option<String>,
    pub max: Option<String>,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            show_fraction: true,
            pad_right: false,
            rounding_mode: None,
            min: None,
            max: None,
        }
    }
}

impl CurrencyOptions {
    pub fn with_show_fraction(mut self, show_fraction: bool) -> Self {
        self.show_fraction = show_fraction;
        self
    }

    pub fn with_pad_right(mut self, pad_right: bool) -> Self {
        self.pad_right = pad_right;
        self
    }

    pub fn with_rounding_mode(mut self, rounding_mode: RoundingMode) -> Self {
        self.rounding_mode = Some(rounding_mode);
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
}

/// Localised currency: symbol prefix, locale fraction length.
#[derive(Clone, Debug)]
pub struct CurrencyFormatter {
    number: NumberFormat,
    show_fraction: bool,
    pad_right: bool,
}

impl CurrencyFormatter {
    pub fn locale(&self) -> &'static NumberLocale {
        self.number.locale()
    }
}

impl Formatter for CurrencyFormatter {
    fn format(&self, input: &str, previous: &str, context: FormatterContext) -> String {
        let locale = self.number.locale();
        let previous = previous
            .strip_prefix(locale.currency_symbol)
            .unwrap_or(previous);

        let mut value = self.number.format(input, previous, context);

        if !value.is_empty() && self.show_fraction && (self.pad_right || context.is_blur()) {
            value = pad_fraction(
                &value,
                locale.decimal_separator,
                locale.currency_fraction_length,
            );
        }

        if value.is_empty() {
            return value;
        }
        let mut out = String::with_capacity(locale.currency_symbol.len() + value.len());
        out.push_str(locale.currency_symbol);
        out.push_str(&value);
        out
    }
}

/// ```
/// use numeric_format::{CurrencyOptions, Formatter, format_currency};
///
/// let f = format_currency("en-US", CurrencyOptions::default()).unwrap();
/// assert_eq!(f.format_value("2.225"), "$2.23");
/// assert_eq!(f.format_value(""), "");
/// ```
pub fn format_currency(
    locales: impl Into<Locales>,
    options: CurrencyOptions,
) -> Result<CurrencyFormatter, FormatError> {
    let locales = locales.into();
    let fraction_length = locales.number_locale().currency_fraction_length;
    let number = NumberFormat::new(&NumberFormatOptions {
        locales,
        min: options.min,
        max: options.max,
        decimal_places: Some(if options.show_fraction {
            fraction_length
        } else {
            0
        }),
        rounding_mode: options.rounding_mode,
    })?;

    Ok(CurrencyFormatter {
        number,
        show_fraction: options.show_fraction,
        pad_right: options.pad_right,
    })
}

/// Overrides for [`pad_numeric_fraction`]; unset fields come from the locale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PadOptions {
    pub decimal_separator: Option<char>,
    pub fraction_length: Option<u32>,
}

/// Right-zero-pad the fractional part of an already formatted number.
///
/// Works on any string split by the decimal separator; no rounding or bounds
/// checks happen here. Values without a digit are returned unchanged.
///
/// ```
/// use numeric_format::{PadOptions, pad_numeric_fraction};
///
/// let canonical = PadOptions { decimal_separator: Some('.'), ..PadOptions::default() };
/// assert_eq!(pad_numeric_fraction("en-US", "4", canonical), "4.00");
/// assert_eq!(pad_numeric_fraction("en-US", "4.5", canonical), "4.50");
/// assert_eq!(pad_numeric_fraction("en-US", "4.567", canonical), "4.567");
/// assert_eq!(pad_numeric_fraction("en-US", "", canonical), "");
/// ```
pub fn pad_numeric_fraction(
    locales: impl Into<Locales>,
    value: &str,
    options: PadOptions,
) -> String {
    let locale = locales.into().number_locale();
    pad_fraction(
        value,
        options.decimal_separator.unwrap_or(locale.decimal_separator),
        options
            .fraction_length
            .unwrap_or(locale.currency_fraction_length),
    )
}

fn pad_fraction(value: &str, decimal_separator: char, fraction_length: u32) -> String {
    if !value.chars().any(|ch| ch.is_ascii_digit()) {
        return value.to_string();
    }

    let (integer, fraction) = value
        .split_once(decimal_separator)
        .unwrap_or((value, ""));

    let fraction_length = fraction_length as usize;
    let fraction_chars = fraction.chars().count();
    if fraction_chars == 0 && fraction_length == 0 {
        return integer.to_string();
    }

    let mut out = String::with_capacity(value.len() + fraction_length + 1);
    out.push_str(integer);
    out.push(decimal_separator);
    out.push_str(fraction);
    out.extend(std::iter::repeat_n(
        '0',
        fraction_length.saturating_sub(fraction_chars),
    ));
    out
}

pub const EMPLOYER_IDENTIFICATION_NUMBER_TEMPLATE: &[&str] =
    &["", "", "-", "", "", "", "", "", ""];
pub const SOCIAL_SECURITY_NUMBER_TEMPLATE: &[&str] = &["", "", "", "-", "", "-", "", "", ""];
pub const TELEPHONE_NUMBER_TEMPLATE: &[&str] = &["(", "", "", ") ", "", "", "-", "", "", ""];
pub const POSTAL_CODE_TEMPLATE: &[&str] = &["", "", "", "", ""];

/// Walk canonical digits against a fixed template of literal prefixes.
///
/// Each slot emits its prefix followed by one digit. Output stops when either
/// the template or the input runs out, so over-long input is not rendered.
///
/// ```
/// use numeric_format::format_numeric_string;
///
/// assert_eq!(format_numeric_string(&["(", "", ") "], "12"), "(12");
/// assert_eq!(format_numeric_string(&["", "-", ""], "1234"), "1-23");
/// ```
pub fn format_numeric_string(template: &[&str], number: &str) -> String {
    let mut out = String::with_capacity(number.len() * 2);
    for (prefix, digit) in template.iter().zip(number.chars()) {
        out.push_str(prefix);
        out.push(digit);
    }
    out
}

/// A masked formatter over one of the fixed templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateFormatter {
    template: &'static [&'static str],
}

impl TemplateFormatter {
    pub const fn new(template: &'static [&'static str]) -> Self {
        Self { template }
    }

    /// Number of digits the template can render.
    pub fn capacity(&self) -> usize {
        self.template.len()
    }
}

impl Formatter for TemplateFormatter {
    fn format(&self, input: &str, _previous: &str, _context: FormatterContext) -> String {
        format_numeric_string(self.template, input)
    }
}

/// U.S. employer identification number, e.g. `12-3456789`.
pub const fn format_employer_identification_number() -> TemplateFormatter {
    TemplateFormatter::new(EMPLOYER_IDENTIFICATION_NUMBER_TEMPLATE)
}

/// U.S. social security number, e.g. `123-45-6789`.
pub const fn format_social_security_number() -> TemplateFormatter {
    TemplateFormatter::new(SOCIAL_SECURITY_NUMBER_TEMPLATE)
}

/// U.S. five digit zip code.
pub const fn format_postal_code_number() -> TemplateFormatter {
    TemplateFormatter::new(POSTAL_CODE_TEMPLATE)
}

/// Telephone number; every locale currently uses the U.S. ten digit layout.
pub fn format_telephone_number(locales: impl Into<Locales>) -> TemplateFormatter {
    let locales = locales.into();
    if !locales.is_en_us() {
        log::debug!(
            target: "numerics.format",
            "no telephone layout for {:?}, using en-US",
            locales.primary()
        );
    }
    TemplateFormatter::new(TELEPHONE_NUMBER_TEMPLATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_preserves_partial_input() {
        let f = format_float(NumberFormatOptions::default()).unwrap();
        assert_eq!(f.format_value("3.14"), "3.14");
        assert_eq!(f.format_value("-"), "-");
        assert_eq!(f.format_value("+"), "+");
        assert_eq!(f.format_value("0.5"), "0.5");
        assert_eq!(f.format_value("0.0"), "0.0");
        assert_eq!(f.format_value("-0.0"), "-0.0");
        assert_eq!(f.format_value(".5"), "0.5");
        assert_eq!(f.format_value("0."), "0.");
        assert_eq!(f.format_value(" -0.0\n"), "-0.0");
        assert_eq!(f.format_value("1234.5"), "1,234.5");
    }

    #[test]
    fn float_truncates_beyond_twenty_places() {
        let f = format_float(NumberFormatOptions::default()).unwrap();
        assert_eq!(
            f.format_value(".11111111111111111111"),
            "0.11111111111111111111"
        );
        assert_eq!(
            f.format_value(".111111111111111111119"),
            "0.11111111111111111111"
        );
    }

    #[test]
    fn integer_truncates_fraction() {
        let f = format_integer("en-US");
        assert_eq!(f.format_value("1234"), "1,234");
        assert_eq!(f.format_value("123.9"), "123");
        assert_eq!(f.format_value("-123.9"), "-123");
        assert_eq!(f.format_value("-123.0"), "-123");
        assert_eq!(format_integer("de-DE").format_value("7777777"), "7.777.777");
    }

    #[test]
    fn currency_rounds_half_up_at_the_fraction_boundary() {
        let f = format_currency("en-US", CurrencyOptions::default()).unwrap();
        assert_eq!(f.format_value("2.225"), "$2.23");
        assert_eq!(f.format_value("2.226"), "$2.23");
        assert_eq!(f.format_value("2.224"), "$2.22");
        assert_eq!(f.format_value("2.00"), "$2.00");
        assert_eq!(f.format_value("1000.99"), "$1,000.99");
    }

    #[test]
    fn currency_padding() {
        let padded = format_currency("en-US", CurrencyOptions::default().with_pad_right(true))
            .unwrap();
        assert_eq!(padded.format_value("4"), "$4.00");
        assert_eq!(padded.format_value(""), "");

        let no_fraction = format_currency(
            "en-US",
            CurrencyOptions::default()
                .with_pad_right(true)
                .with_show_fraction(false),
        )
        .unwrap();
        assert_eq!(no_fraction.format_value("7"), "$7");
        assert_eq!(no_fraction.format_value("7.99"), "$8");
        assert_eq!(no_fraction.format_value(""), "");
    }

    #[test]
    fn currency_pads_on_blur_only_by_default() {
        let f = format_currency("en-US", CurrencyOptions::default()).unwrap();
        assert_eq!(f.format("4.5", "$4.5", FormatterContext::change(true)), "$4.5");
        assert_eq!(f.format("4.5", "$4.5", FormatterContext::blur()), "$4.50");
        assert_eq!(f.format("3.", "$3", FormatterContext::blur()), "$3.00");
        assert_eq!(f.format("-", "", FormatterContext::blur()), "$-");
    }

    #[test]
    fn currency_uses_locale_symbol_and_separators() {
        let f = format_currency("de-DE", CurrencyOptions::default()).unwrap();
        assert_eq!(f.format("1234.5", "", FormatterContext::blur()), "€1.234,50");

        let yen = format_currency("ja-JP", CurrencyOptions::default()).unwrap();
        assert_eq!(yen.format("1234.5", "", FormatterContext::blur()), "¥1,235");
    }

    #[test]
    fn currency_rejection_does_not_duplicate_the_symbol() {
        let f = format_currency("en-US", CurrencyOptions::default().with_max(100)).unwrap();
        assert_eq!(
            f.format("1000", "$100", FormatterContext::change(true)),
            "$100"
        );
    }

    #[test]
    fn percent_suffix_only_when_not_keyed() {
        let f = format_percent(NumberFormatOptions::default().with_decimal_places(2)).unwrap();
        assert_eq!(f.format("1.239", "1.23", FormatterContext::change(true)), "1.23");
        assert_eq!(f.format_value("1.239"), "1.24%");
        assert_eq!(f.format("12", "12", FormatterContext::blur()), "12%");
        assert_eq!(f.format("", "12%", FormatterContext::blur()), "");
    }

    #[test]
    fn percent_rejection_does_not_duplicate_the_suffix() {
        let f = format_percent(NumberFormatOptions::default().with_max(100)).unwrap();
        assert_eq!(f.format("200", "100%", FormatterContext::change(false)), "100%");
    }

    #[test]
    fn masked_templates() {
        assert_eq!(
            format_employer_identification_number().format_value("227777777"),
            "22-7777777"
        );
        assert_eq!(
            format_social_security_number().format_value("222222222"),
            "222-22-2222"
        );
        assert_eq!(
            format_telephone_number("en-US").format_value("2222222222"),
            "(222) 222-2222"
        );
        assert_eq!(format_postal_code_number().format_value("22222"), "22222");
    }

    #[test]
    fn masked_templates_render_partial_and_drop_overflow() {
        let tel = format_telephone_number("en-US");
        assert_eq!(tel.format_value("2"), "(2");
        assert_eq!(tel.format_value("2223"), "(222) 3");
        assert_eq!(
            format_employer_identification_number().format_value("5432109876"),
            "54-3210987"
        );
        assert_eq!(format_employer_identification_number().capacity(), 9);
    }

    #[test]
    fn empty_input_is_empty_for_every_formatter() {
        let formatters: Vec<Box<dyn Formatter>> = vec![
            Box::new(format_float(NumberFormatOptions::default()).unwrap()),
            Box::new(format_integer("en-US")),
            Box::new(format_percent(NumberFormatOptions::default()).unwrap()),
            Box::new(
                format_currency("en-US", CurrencyOptions::default().with_pad_right(true))
                    .unwrap(),
            ),
            Box::new(format_employer_identification_number()),
            Box::new(format_social_security_number()),
            Box::new(format_telephone_number("en-US")),
            Box::new(format_postal_code_number()),
        ];
        for f in &formatters {
            assert_eq!(f.format_value(""), "");
            assert_eq!(f.format("", "prev", FormatterContext::blur()), "");
        }
    }

    #[test]
    fn closures_are_formatters() {
        let upper = |input: &str, _previous: &str, _ctx: FormatterContext| input.to_uppercase();
        assert_eq!(upper.format_value("abc"), "ABC");
    }

    #[test]
    fn pad_respects_overrides() {
        assert_eq!(
            pad_numeric_fraction(
                "de-DE",
                "4,5",
                PadOptions {
                    fraction_length: Some(3),
                    ..PadOptions::default()
                }
            ),
            "4,500"
        );
        assert_eq!(
            pad_numeric_fraction(
                "en-US",
                "-",
                PadOptions::default()
            ),
            "-"
        );
    }
}
