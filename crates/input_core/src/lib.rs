//! # input_core
//!
//! The controlled numeric input and the element surface it drives.
//!
//! - [`HostElement`]: what the input needs from a native text input
//! - [`InputElement`]: an in-memory element with caret, selection and
//!   constraint-validation state
//! - [`FormattedInput`]: classifies change events into [`ChangeType`]s
//! - [`FormattedNumericInput`]: the keydown/change/blur state machine
//!
//! Nothing here renders or dispatches events; a host forwards `keydown`,
//! `change` and `blur` and hands over the element for each call.

mod element;
mod formatted_input;
mod keyboard;
mod numeric_input;
mod selection;
mod text;
mod validation;

pub use core_types::{ChangeType, InputMode};
pub use element::{HostElement, InputElement};
pub use formatted_input::{Edit, FormattedInput};
pub use keyboard::{BACKSPACE, DEL, DELETE, KeyOutcome, KeyboardEvent};
pub use numeric_input::{FormattedNumericInput, NumericCallback, NumericControl};
pub use selection::SelectionRange;
pub use text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary,
    truncate_to_caret,
};
pub use validation::apply_validate_result;
