//! UTF-8 helpers for caret and selection offsets.
//!
//! Carets are byte offsets into the element value and must always sit on a
//! character boundary; display values routinely carry multi-byte characters
//! (`€`, `£`, `¥`, NO-BREAK SPACE grouping).

use std::borrow::Cow;

/// Clamp an arbitrary byte index to a valid UTF-8 character boundary.
///
/// Indices past the end clamp to `s.len()`; indices inside a multi-byte
/// character move back to its start.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "€1"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 0), 0);
/// assert_eq!(clamp_to_char_boundary(s, 2), 0);
/// assert_eq!(clamp_to_char_boundary(s, 3), 3);
/// assert_eq!(clamp_to_char_boundary(s, 100), 4);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// The prefix of `s` up to `index`, clamped to a character boundary.
///
/// ```
/// use input_core::truncate_to_caret;
///
/// assert_eq!(truncate_to_caret("$1,234", 2), "$1");
/// assert_eq!(truncate_to_caret("€12", 1), "");
/// assert_eq!(truncate_to_caret("12", 99), "12");
/// ```
#[inline]
pub fn truncate_to_caret(s: &str, index: usize) -> &str {
    &s[..clamp_to_char_boundary(s, index)]
}

/// The character boundary before `i`, or 0.
///
/// ```
/// use input_core::prev_cursor_boundary;
///
/// let s = "a€b";
/// assert_eq!(prev_cursor_boundary(s, 4), 1);
/// assert_eq!(prev_cursor_boundary(s, 0), 0);
/// ```
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i == 0 {
        return 0;
    }
    s[..i]
        .char_indices()
        .last()
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// The character boundary after `i`, or `s.len()`.
///
/// ```
/// use input_core::next_cursor_boundary;
///
/// let s = "a€b";
/// assert_eq!(next_cursor_boundary(s, 1), 4);
/// assert_eq!(next_cursor_boundary(s, 5), 5);
/// ```
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    if i >= s.len() {
        return s.len();
    }

    let mut it = s[i..].char_indices();
    let _ = it.next();
    it.next().map(|(idx, _)| i + idx).unwrap_or(s.len())
}

/// Strip CR and LF; inputs are single line.
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("12"), "12");
/// assert_eq!(filter_single_line("1\r\n2"), "12");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains('\n') && !s.contains('\r') {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_boundary_basic() {
        let s = "a€b";
        assert_eq!(clamp_to_char_boundary(s, 0), 0);
        assert_eq!(clamp_to_char_boundary(s, 1), 1);
        assert_eq!(clamp_to_char_boundary(s, 2), 1);
        assert_eq!(clamp_to_char_boundary(s, 3), 1);
        assert_eq!(clamp_to_char_boundary(s, 4), 4);
        assert_eq!(clamp_to_char_boundary(s, 5), 5);
        assert_eq!(clamp_to_char_boundary(s, 100), 5);
    }

    #[test]
    fn prev_next_cursor_basic() {
        let s = "a€b";
        assert_eq!(prev_cursor_boundary(s, 5), 4);
        assert_eq!(prev_cursor_boundary(s, 4), 1);
        assert_eq!(prev_cursor_boundary(s, 1), 0);
        assert_eq!(prev_cursor_boundary(s, 0), 0);

        assert_eq!(next_cursor_boundary(s, 0), 1);
        assert_eq!(next_cursor_boundary(s, 1), 4);
        assert_eq!(next_cursor_boundary(s, 4), 5);
        assert_eq!(next_cursor_boundary(s, 5), 5);
    }

    #[test]
    fn truncation_respects_multibyte_grouping() {
        let s = "1\u{00A0}234";
        assert_eq!(truncate_to_caret(s, 2), "1");
        assert_eq!(truncate_to_caret(s, 3), "1\u{00A0}");
    }

    #[test]
    fn filter_single_line_basic() {
        assert_eq!(filter_single_line("hello"), "hello");
        assert_eq!(filter_single_line("a\r\nb"), "ab");
        assert_eq!(filter_single_line("\n\r"), "");
    }
}
