//! The numeric string formatter engine.
//!
//! [`NumberFormat`] turns a canonical numeric string (en-US punctuation) into
//! a display string for a locale. It is called on every keystroke, so it has
//! to cope with partial input: a lone sign, a trailing separator, or a value
//! that is not a number at all. The rules:
//!
//! - empty input formats to an empty string
//! - a lone sign passes through unless the bounds make it impossible
//! - input that does not parse is returned unchanged (fail open)
//! - a value outside `min..=max` rejects the edit by returning the previous
//!   formatted value verbatim
//! - live typing truncates extra fraction digits, every other path rounds

use crate::error::FormatError;
use crate::locale::{Locales, NumberLocale};
use bigdecimal::BigDecimal;
use core_types::FormatterContext;
use std::str::FromStr;

/// Fraction digits rendered when no `decimal_places` limit is configured.
pub const DEFAULT_MAX_DECIMAL_PLACES: u32 = 20;

const GROUP_SIZE: usize = 3;

/// How a value with more precision than allowed is rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero (truncation).
    Down,
    Ceiling,
    Floor,
    #[default]
    HalfUp,
    HalfDown,
    HalfEven,
}

impl From<RoundingMode> for bigdecimal::RoundingMode {
    fn from(mode: RoundingMode) -> Self {
        match mode {
            RoundingMode::Up => bigdecimal::RoundingMode::Up,
            RoundingMode::Down => bigdecimal::RoundingMode::Down,
            RoundingMode::Ceiling => bigdecimal::RoundingMode::Ceiling,
            RoundingMode::Floor => bigdecimal::RoundingMode::Floor,
            RoundingMode::HalfUp => bigdecimal::RoundingMode::HalfUp,
            RoundingMode::HalfDown => bigdecimal::RoundingMode::HalfDown,
            RoundingMode::HalfEven => bigdecimal::RoundingMode::HalfEven,
        }
    }
}

/// Options recognised by [`NumberFormat`].
///
/// Bounds are kept as strings until [`NumberFormat::new`] validates them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberFormatOptions {
    pub locales: Locales,
    pub min: Option<String>,
    pub max: Option<String>,
    pub decimal_places: Option<u32>,
    pub rounding_mode: Option<RoundingMode>,
}

impl NumberFormatOptions {
    pub fn new(locales: impl Into<Locales>) -> Self {
        Self {
            locales: locales.into(),
            ..Self::default()
        }
    }

    pub fn with_locales(mut self, locales: impl Into<Locales>) -> Self {
        self.locales = locales.into();
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

    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = Some(decimal_places);
        self
    }

    pub fn with_rounding_mode(mut self, rounding_mode: RoundingMode) -> Self {
        self.rounding_mode = Some(rounding_mode);
        self
    }
}

/// A validated, reusable number formatter.
#[derive(Clone, Debug)]
pub struct NumberFormat {
    locale: &'static NumberLocale,
    min: Option<BigDecimal>,
    max: Option<BigDecimal>,
    decimal_places: Option<u32>,
    rounding_mode: RoundingMode,
}

impl NumberFormat {
    /// Validate `options`.
    ///
    /// Fails when a bound is not a number or when `max < min`.
    pub fn new(options: &NumberFormatOptions) -> Result<Self, FormatError> {
        let min = parse_bound("min", options.min.as_deref())?;
        let max = parse_bound("max", options.max.as_deref())?;

        if let (Some(min_value), Some(max_value)) = (&min, &max) {
            if max_value < min_value {
                return Err(FormatError::MaxLessThanMin {
                    min: options.min.clone().unwrap_or_default(),
                    max: options.max.clone().unwrap_or_default(),
                });
            }
        }

        Ok(Self {
            locale: options.locales.number_locale(),
            min,
            max,
            decimal_places: options.decimal_places,
            rounding_mode: options.rounding_mode.unwrap_or_default(),
        })
    }

    /// A formatter with no bounds, which cannot fail validation.
    pub(crate) fn unbounded(
        locales: &Locales,
        decimal_places: Option<u32>,
        rounding_mode: RoundingMode,
    ) -> Self {
        Self {
            locale: locales.number_locale(),
            min: None,
            max: None,
            decimal_places,
            rounding_mode,
        }
    }

    pub fn locale(&self) -> &'static NumberLocale {
        self.locale
    }

    pub fn decimal_places(&self) -> Option<u32> {
        self.decimal_places
    }

    /// A negative value (or a lone `-`) is structurally possible.
    fn allows_negative(&self) -> bool {
        self.min.as_ref().is_none_or(|min| *min < BigDecimal::from(0i64))
    }

    /// A lone `+` is structurally possible.
    fn allows_positive(&self) -> bool {
        self.max.as_ref().is_none_or(|max| *max >= BigDecimal::from(0i64))
    }

    fn out_of_bounds(&self, value: &BigDecimal) -> bool {
        self.min.as_ref().is_some_and(|min| value < min)
            || self.max.as_ref().is_some_and(|max| value > max)
    }

    /// Format a canonical numeric string for display.
    ///
    /// `previous` is returned verbatim when `raw` is outside the bounds.
    pub fn format(&self, raw: &str, previous: &str, context: FormatterContext) -> String {
        let raw = raw.trim();

        if raw.is_empty() {
            return String::new();
        }

        match raw {
            "-" => {
                return if self.allows_negative() {
                    raw.to_string()
                } else {
                    String::new()
                };
            }
            "+" => {
                return if self.allows_positive() {
                    raw.to_string()
                } else {
                    String::new()
                };
            }
            _ => {}
        }

        let Some(parsed) = ParsedNumber::parse(raw) else {
            log::trace!(target: "numerics.format", "not a number, passing through: {raw:?}");
            return raw.to_string();
        };

        if self.out_of_bounds(&parsed.value) {
            log::trace!(target: "numerics.format", "{raw:?} out of bounds, keeping {previous:?}");
            return previous.to_string();
        }

        let max_places = self.decimal_places.unwrap_or(DEFAULT_MAX_DECIMAL_PLACES);
        let places = (parsed.fraction_len as u32).min(max_places);

        // Live typing never rounds a digit up; it only drops the excess.
        let mode = if context.is_keyed_change() {
            RoundingMode::Down
        } else {
            self.rounding_mode
        };

        let rounded = parsed.value.with_scale_round(i64::from(places), mode.into());
        let formatted = render_grouped(&rounded, self.locale);

        let mut out = String::with_capacity(formatted.len() + 2);

        // Preserve the sign of `-0.0` when negatives are allowed.
        if let Some(sign) = raw.chars().next().filter(|ch| *ch == '-' || *ch == '+') {
            if !formatted.starts_with(['-', '+']) && self.allows_negative() {
                out.push(sign);
            }
        }

        out.push_str(&formatted);

        let include_separator =
            raw.ends_with('.') && !context.is_blur() && self.decimal_places.unwrap_or(1) >= 1;
        if include_separator {
            out.push(self.locale.decimal_separator);
        }

        out
    }
}

/// Format `raw` with freshly validated `options`.
///
/// ```
/// use numeric_format::{FormatterContext, NumberFormatOptions, format_number_string};
///
/// let options = NumberFormatOptions::new("en-US").with_decimal_places(2);
/// let out = format_number_string("1234.567", &options, "", FormatterContext::default());
/// assert_eq!(out.unwrap(), "1,234.57");
/// ```
pub fn format_number_string(
    raw: &str,
    options: &NumberFormatOptions,
    previous: &str,
    context: FormatterContext,
) -> Result<String, FormatError> {
    Ok(NumberFormat::new(options)?.format(raw, previous, context))
}

/// Parse a complete canonical number (`[+-]?digits[.digits]`).
///
/// ```
/// use numeric_format::parse_decimal;
///
/// assert!(parse_decimal("-1.5").is_some());
/// assert!(parse_decimal(" 7 ").is_some());
/// assert!(parse_decimal("1.2.3").is_none());
/// assert!(parse_decimal("").is_none());
/// ```
pub fn parse_decimal(s: &str) -> Option<BigDecimal> {
    ParsedNumber::parse(s.trim()).map(|parsed| parsed.value)
}

fn parse_bound(bound: &'static str, value: Option<&str>) -> Result<Option<BigDecimal>, FormatError> {
    let Some(value) = value else {
        return Ok(None);
    };
    ParsedNumber::parse(value.trim())
        .map(|parsed| Some(parsed.value))
        .ok_or_else(|| FormatError::InvalidBound {
            bound,
            value: value.to_string(),
        })
}

/// A canonical string that is a complete number: `[+-]?digits[.digits]`
/// where either side of the separator may be empty but not both.
pub(crate) struct ParsedNumber {
    pub(crate) value: BigDecimal,
    pub(crate) fraction_len: usize,
}

impl ParsedNumber {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let (negative, unsigned) = match s.as_bytes().first()? {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction)
        {
            return None;
        }

        let mut normalized = String::with_capacity(s.len() + 2);
        if negative {
            normalized.push('-');
        }
        normalized.push_str(if integer.is_empty() { "0" } else { integer });
        if !fraction.is_empty() {
            normalized.push('.');
            normalized.push_str(fraction);
        }

        let value = BigDecimal::from_str(&normalized).ok()?;
        Some(Self {
            value,
            fraction_len: fraction.len(),
        })
    }
}

/// Render a value with grouped integer digits and the locale separators.
fn render_grouped(value: &BigDecimal, locale: &NumberLocale) -> String {
    let (mantissa, scale) = value.as_bigint_and_exponent();
    let mantissa = mantissa.to_string();
    let (negative, digits) = match mantissa.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, mantissa.as_str()),
    };

    let mut plain = String::with_capacity(digits.len() + 2);
    let split = if scale > 0 {
        let scale = scale as usize;
        if digits.len() <= scale {
            plain.extend(std::iter::repeat_n('0', scale + 1 - digits.len()));
        }
        plain.push_str(digits);
        plain.len() - scale
    } else {
        plain.push_str(digits);
        plain.extend(std::iter::repeat_n('0', scale.unsigned_abs() as usize));
        plain.len()
    };
    let (integer, fraction) = plain.split_at(split);

    let mut out = String::with_capacity(plain.len() + plain.len() / GROUP_SIZE + 2);
    if negative {
        out.push('-');
    }
    let len = integer.len();
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % GROUP_SIZE == 0 {
            out.push(locale.group_separator);
        }
        out.push(ch);
    }
    if !fraction.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(fraction);
    }
    out
}
