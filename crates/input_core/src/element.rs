//! The host element capability surface and an in-memory implementation.
//!
//! Components never own the element; each event hands them a
//! `&mut dyn HostElement` for the duration of the call. [`InputElement`] keeps
//! the state a native text input would (value, caret, selection, custom
//! validity) and records what the component asked of it.

use crate::selection::SelectionRange;
use crate::text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary,
};
use core_types::InputMode;

/// What the numeric components need from a native text input.
pub trait HostElement {
    /// The displayed value.
    fn value(&self) -> &str;

    /// Replace the displayed value. Setting the current value again is a
    /// no-op; any other value moves the caret to the end.
    fn set_value(&mut self, value: &str);

    /// Byte offset of the selection end, which is the caret when the
    /// selection is collapsed.
    fn selection_end(&self) -> usize;

    /// Set the constraint-validation message; empty means valid.
    fn set_custom_validity(&mut self, message: &str);

    /// Surface the current validity to the user. Returns `true` if valid.
    fn report_validity(&mut self) -> bool;

    fn set_input_mode(&mut self, mode: InputMode);

    fn set_title(&mut self, title: Option<&str>);

    /// `false` once the element has been removed from its document.
    fn is_connected(&self) -> bool;
}

/// An in-memory single-line text input.
///
/// # Example
///
/// ```
/// use input_core::{HostElement, InputElement};
///
/// let mut element = InputElement::new();
/// element.set_value("$12");
/// element.set_caret(1, false);
/// element.insert_text("9");
///
/// assert_eq!(element.value(), "$912");
/// assert_eq!(element.selection_end(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct InputElement {
    value: String,
    /// Incremented on every text change.
    value_rev: u64,
    /// Byte index into `value`, always on a char boundary.
    caret: usize,
    /// The selection is `min(anchor, caret)..max(anchor, caret)`.
    selection_anchor: Option<usize>,
    focused: bool,
    connected: bool,
    custom_validity: String,
    report_count: usize,
    /// Messages of every `invalid` event fired by `report_validity`.
    invalid_events: Vec<String>,
    input_mode: Option<InputMode>,
    title: Option<String>,
}

impl Default for InputElement {
    fn default() -> Self {
        Self {
            value: String::new(),
            value_rev: 0,
            caret: 0,
            selection_anchor: None,
            focused: false,
            connected: true,
            custom_validity: String::new(),
            report_count: 0,
            invalid_events: Vec::new(),
            input_mode: None,
            title: None,
        }
    }
}

impl InputElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value_revision(&self) -> u64 {
        self.value_rev
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> Option<SelectionRange> {
        selection_range(&self.value, self.selection_anchor, self.caret)
    }

    pub fn selected_text(&self) -> &str {
        self.selection()
            .and_then(|sel| sel.slice(&self.value))
            .unwrap_or_default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn validation_message(&self) -> &str {
        &self.custom_validity
    }

    pub fn is_valid(&self) -> bool {
        self.custom_validity.is_empty()
    }

    /// How many times validity was reported.
    pub fn report_count(&self) -> usize {
        self.report_count
    }

    pub fn invalid_events(&self) -> &[String] {
        &self.invalid_events
    }

    pub fn input_mode(&self) -> Option<InputMode> {
        self.input_mode
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Remove the element from its document.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    /// Gain focus; clamps the caret and clears the selection.
    pub fn focus(&mut self) {
        self.clamp();
        self.selection_anchor = None;
        self.focused = true;
    }

    /// Lose focus; clears the selection.
    pub fn blur(&mut self) {
        self.clamp();
        self.selection_anchor = None;
        self.focused = false;
    }

    /// Insert text at the caret, replacing the selection if there is one.
    /// Newlines are stripped.
    pub fn insert_text(&mut self, s: &str) {
        self.clamp();
        let s = filter_single_line(s);
        if s.is_empty() {
            return;
        }

        self.delete_selection_if_any();

        let caret = clamp_to_char_boundary(&self.value, self.caret);
        self.value.insert_str(caret, &s);
        self.caret = clamp_to_char_boundary(&self.value, caret + s.len());
        self.mark_text_dirty();
    }

    /// Delete the selection, or the character before the caret.
    pub fn backspace(&mut self) {
        self.clamp();
        if self.delete_selection_if_any() {
            return;
        }

        let caret = self.caret;
        if caret == 0 {
            return;
        }

        let prev = prev_cursor_boundary(&self.value, caret);
        self.value.drain(prev..caret);
        self.caret = clamp_to_char_boundary(&self.value, prev);
        self.mark_text_dirty();
    }

    /// Delete the selection, or the character after the caret.
    pub fn delete(&mut self) {
        self.clamp();
        if self.delete_selection_if_any() {
            return;
        }

        let caret = self.caret;
        if caret >= self.value.len() {
            return;
        }

        let next = next_cursor_boundary(&self.value, caret);
        self.value.drain(caret..next);
        self.caret = clamp_to_char_boundary(&self.value, caret);
        self.mark_text_dirty();
    }

    /// Remove and return the selected text.
    pub fn cut(&mut self) -> String {
        self.clamp();
        let taken = self.selected_text().to_string();
        self.delete_selection_if_any();
        taken
    }

    pub fn select_all(&mut self) {
        self.clamp();
        self.caret = self.value.len();
        self.selection_anchor = Some(0);
        self.normalize_selection_anchor();
    }

    /// Move the caret to a byte position, extending the selection if
    /// `selecting`.
    pub fn set_caret(&mut self, caret: usize, selecting: bool) {
        self.clamp();
        let caret = clamp_to_char_boundary(&self.value, caret);

        if selecting {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.caret);
            }
            self.caret = caret;
            self.normalize_selection_anchor();
        } else {
            self.caret = caret;
            self.selection_anchor = None;
        }
    }

    /// Select `start..end`, leaving the caret at `end`.
    pub fn set_selection_range(&mut self, start: usize, end: usize) {
        self.set_caret(start, false);
        self.set_caret(end, true);
    }

    pub fn move_caret_to_start(&mut self) {
        self.set_caret(0, false);
    }

    pub fn move_caret_to_end(&mut self) {
        self.set_caret(self.value.len(), false);
    }

    fn delete_selection_if_any(&mut self) -> bool {
        let Some(sel) = self.selection() else {
            self.selection_anchor = None;
            return false;
        };

        self.value.drain(sel.start..sel.end);
        self.caret = clamp_to_char_boundary(&self.value, sel.start);
        self.selection_anchor = None;
        self.mark_text_dirty();
        true
    }

    fn normalize_selection_anchor(&mut self) {
        let Some(anchor) = self.selection_anchor else {
            return;
        };
        let anchor = clamp_to_char_boundary(&self.value, anchor);
        // A collapsed selection is no selection.
        self.selection_anchor = (anchor != self.caret).then_some(anchor);
    }

    fn clamp(&mut self) {
        self.caret = clamp_to_char_boundary(&self.value, self.caret);
        if let Some(a) = self.selection_anchor {
            self.selection_anchor = Some(clamp_to_char_boundary(&self.value, a));
        }
    }

    fn mark_text_dirty(&mut self) {
        self.value_rev = self.value_rev.wrapping_add(1);
    }
}

impl HostElement for InputElement {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        if self.value == value {
            return;
        }
        self.value.clear();
        self.value.push_str(value);
        self.caret = self.value.len();
        self.selection_anchor = None;
        self.mark_text_dirty();
    }

    fn selection_end(&self) -> usize {
        self.selection().map(|sel| sel.end).unwrap_or(self.caret)
    }

    fn set_custom_validity(&mut self, message: &str) {
        self.custom_validity.clear();
        self.custom_validity.push_str(message);
    }

    fn report_validity(&mut self) -> bool {
        self.report_count += 1;
        if self.custom_validity.is_empty() {
            return true;
        }
        self.invalid_events.push(self.custom_validity.clone());
        false
    }

    fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = Some(mode);
    }

    fn set_title(&mut self, title: Option<&str>) {
        self.title = title.map(str::to_string);
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

fn selection_range(value: &str, anchor: Option<usize>, caret: usize) -> Option<SelectionRange> {
    let anchor = anchor?;

    let a = clamp_to_char_boundary(value, anchor);
    let c = clamp_to_char_boundary(value, caret);
    if a == c {
        return None;
    }

    Some(SelectionRange::new(a, c))
}
