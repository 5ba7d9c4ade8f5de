//! Character filters for numeric domains.
//!
//! Every filter is total (never panics, worst case returns an empty string)
//! and idempotent: `filter(filter(s)) == filter(s)`.

/// Accepts a string and returns a copy with disallowed characters removed.
///
/// `previous` is the last canonical value accepted by the input. The built-in
/// filters do not need it, but custom filters may use it to reject an edit
/// wholesale.
pub trait Filter {
    fn filter(&self, next: &str, previous: &str) -> String;
}

impl<F> Filter for F
where
    F: Fn(&str) -> String,
{
    #[inline]
    fn filter(&self, next: &str, _previous: &str) -> String {
        self(next)
    }
}

#[inline]
fn is_sign(ch: char) -> bool {
    ch == '-' || ch == '+'
}

/// Removes all non-digit characters.
///
/// ```
/// use numeric_format::filter_to_numeric;
///
/// assert_eq!(filter_to_numeric("(222) 333-4444"), "2223334444");
/// assert_eq!(filter_to_numeric("abc"), "");
/// ```
pub fn filter_to_numeric(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Removes all non-digit characters except a single leading sign.
///
/// A sign is kept only when nothing has been kept before it, so `"$-5"`
/// keeps its sign but `"5-"` does not.
///
/// ```
/// use numeric_format::filter_to_signed_numeric;
///
/// assert_eq!(filter_to_signed_numeric("-12a3"), "-123");
/// assert_eq!(filter_to_signed_numeric("--5"), "-5");
/// assert_eq!(filter_to_signed_numeric("5-"), "5");
/// ```
pub fn filter_to_signed_numeric(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii_digit() || (is_sign(ch) && out.is_empty()) {
            out.push(ch);
        }
    }
    out
}

/// Keeps a single leading sign, digits, and the first `.` separator.
///
/// The input must already use en-US punctuation (see
/// [`convert_number`](crate::convert_number)); grouping commas are dropped.
///
/// ```
/// use numeric_format::filter_to_signed_float;
///
/// assert_eq!(filter_to_signed_float("$-1,234.50"), "-1234.50");
/// assert_eq!(filter_to_signed_float("1.2.3"), "1.23");
/// assert_eq!(filter_to_signed_float("12%"), "12");
/// ```
pub fn filter_to_signed_float(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut seen_separator = false;
    for ch in input.chars() {
        match ch {
            '0'..='9' => out.push(ch),
            '.' if !seen_separator => {
                seen_separator = true;
                out.push(ch);
            }
            '-' | '+' if out.is_empty() => out.push(ch),
            _ => {}
        }
    }
    out
}
