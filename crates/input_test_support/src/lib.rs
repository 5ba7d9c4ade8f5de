//! Test helpers for numeric inputs: an owner harness with user-event style
//! actions, TOML fixture loading, and readable list diffs.

mod fixtures;
mod stateful;

pub use fixtures::{SESSION_CASES_V1, SessionCase, Step, case_selected, load_cases};
pub use stateful::{Owner, Stateful};

/// Describe the first difference between two lists of values.
///
/// ```
/// use input_test_support::diff_lines;
///
/// let expected = vec!["1".to_string(), "12".to_string()];
/// let actual = vec!["1".to_string(), "13".to_string()];
/// assert!(diff_lines(&expected, &actual).contains("first mismatch at line 2"));
/// ```
pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    use std::fmt::Write;

    const MISSING: &str = "<missing>";
    let max = expected.len().max(actual.len());
    let line = |lines: &[String], i: usize| lines.get(i).map_or(MISSING, String::as_str).to_string();

    let mut out = String::new();
    match (0..max).find(|&i| line(expected, i) != line(actual, i)) {
        Some(i) => {
            let _ = writeln!(out, "first mismatch at line {}:", i + 1);
            for idx in i.saturating_sub(2)..(i + 3).min(max) {
                let marker = if idx == i { ">" } else { " " };
                let _ = writeln!(out, "{marker} {:>3}  expected: {}", idx + 1, line(expected, idx));
                let _ = writeln!(out, "{marker} {:>3}    actual: {}", idx + 1, line(actual, idx));
            }
        }
        None => {
            let _ = writeln!(out, "no differences");
        }
    }
    let _ = writeln!(
        out,
        "expected {} values, actual {} values",
        expected.len(),
        actual.len()
    );
    out
}
