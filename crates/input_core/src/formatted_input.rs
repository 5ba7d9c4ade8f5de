//! Edit classification for change events.

use crate::keyboard::{BACKSPACE, DEL, DELETE, KeyboardEvent};
use crate::text::truncate_to_caret;
use core_types::ChangeType;

/// The part of a change event a formatter may look at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    /// The native value truncated at the selection end.
    pub value: String,
    pub change_type: ChangeType,
}

/// Remembers the last key so the following change can be classified.
#[derive(Clone, Debug, Default)]
pub struct FormattedInput {
    last_key: Option<String>,
}

impl FormattedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_key(&self) -> Option<&str> {
        self.last_key.as_deref()
    }

    pub fn key_down(&mut self, event: &KeyboardEvent) {
        self.last_key = Some(event.key.clone());
    }

    /// Classify the edit that produced `value` and consume the recorded key.
    ///
    /// A caret left before the end of the value means a selection was
    /// replaced or the edit happened mid-string; that wins over the key.
    pub fn change(&mut self, value: &str, selection_end: usize) -> Edit {
        let key = self.last_key.take();

        let change_type = if selection_end < value.len() {
            ChangeType::Replace
        } else {
            match key.as_deref() {
                Some(BACKSPACE) => ChangeType::Backspace,
                Some(DELETE) | Some(DEL) => ChangeType::Delete,
                _ => ChangeType::Add,
            }
        };

        log::trace!(
            target: "numerics.input",
            "classified edit as {change_type:?} (key {key:?}, caret {selection_end} of {})",
            value.len()
        );

        Edit {
            value: truncate_to_caret(value, selection_end).to_string(),
            change_type,
        }
    }
}
