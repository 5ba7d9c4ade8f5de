//! TOML fixtures: table-driven cases and scripted input sessions.

use crate::stateful::Stateful;
use input_core::NumericControl;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Format tag of session fixture files.
pub const SESSION_CASES_V1: &str = "numerics-session-cases-v1";

#[derive(Debug, Deserialize)]
struct CaseFile<T> {
    format: String,
    #[serde(rename = "case", default = "Vec::new")]
    cases: Vec<T>,
}

/// Load the `[[case]]` tables of a fixture whose `format` must equal
/// `format`. Panics with the path on any problem.
pub fn load_cases<T: DeserializeOwned>(path: &Path, format: &str) -> Vec<T> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read fixture file {path:?}: {err}"));
    let file: CaseFile<T> = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("invalid fixture file {path:?}: {err}"));
    assert_eq!(file.format, format, "unsupported format in {path:?}");
    assert!(!file.cases.is_empty(), "fixture file {path:?} has no cases");
    file.cases
}

/// `true` if `name` passes the substring filter in env var `var`.
pub fn case_selected(var: &str, name: &str) -> bool {
    std::env::var(var).map_or(true, |filter| name.contains(&filter))
}

/// One scripted interaction with a control.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionCase {
    pub name: String,
    /// Which control to build; interpreted by the test.
    pub control: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// The owner's initial value.
    #[serde(default)]
    pub initial: String,
    /// Mount empty and push `initial` as an owner update.
    #[serde(default)]
    pub deferred: bool,
    pub min: Option<String>,
    pub max: Option<String>,
    pub decimal_places: Option<u32>,
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Expected element value after the last step.
    pub display: String,
    /// Expected `on_numeric_change` calls, in order.
    #[serde(default)]
    pub changes: Vec<String>,
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn once() -> usize {
    1
}

/// A user action in a session.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    Type {
        text: String,
    },
    Paste {
        text: String,
    },
    Backspace {
        #[serde(default = "once")]
        times: usize,
    },
    Delete {
        #[serde(default = "once")]
        times: usize,
    },
    SelectAll,
    Cut,
    Caret {
        at: usize,
    },
    Select {
        start: usize,
        end: usize,
    },
    Blur,
    Focus,
}

impl Step {
    pub fn apply<C: NumericControl>(&self, harness: &mut Stateful<C>) {
        match self {
            Step::Type { text } => harness.type_text(text),
            Step::Paste { text } => harness.paste(text),
            Step::Backspace { times } => (0..*times).for_each(|_| harness.backspace()),
            Step::Delete { times } => (0..*times).for_each(|_| harness.delete()),
            Step::SelectAll => harness.select_all(),
            Step::Cut => {
                harness.cut();
            }
            Step::Caret { at } => harness.set_caret(*at),
            Step::Select { start, end } => harness.set_selection(*start, *end),
            Step::Blur => harness.blur(),
            Step::Focus => harness.focus(),
        }
    }
}
