//! The controlled numeric input.
//!
//! [`FormattedNumericInput`] owns two strings: the display value shown in the
//! host element and the canonical value last handed to (or received from) the
//! owner. The owner holds the source of truth; every accepted edit is
//! reported through `on_numeric_change` and the owner is expected to echo it
//! back with [`FormattedNumericInput::set_numeric_value`].
//!
//! Event flow:
//!
//! ```text
//! keydown ──► filter the key ──► Prevent | Allow (user_keyed = true)
//!                                              │
//! change  ──► classify edit ──► convert+filter ──► format ──► display
//!                                                              │
//!                                        convert+filter ◄──────┘
//!                                              │
//!                                   changed? ──► notify + validate
//!
//! blur    ──► convert+filter ──► format(blur) ──► on_blur ──► validate
//! ```

use crate::element::HostElement;
use crate::formatted_input::FormattedInput;
use crate::keyboard::{KeyOutcome, KeyboardEvent};
use crate::validation::apply_validate_result;
use bus::TaskSender;
use core_types::{FormatterContext, InputMode, ValidateContextType};
use numeric_format::{Converter, Filter, Formatter};
use std::fmt;
use std::rc::{Rc, Weak};
use validity::{Validator, update_default_custom_validity};

/// Callback receiving a canonical value.
pub type NumericCallback = Rc<dyn Fn(&str)>;

/// Configures and drives one controlled numeric input.
///
/// Without a converter, filter or formatter the corresponding stage is the
/// identity.
pub struct FormattedNumericInput {
    converter: Box<dyn Converter>,
    filter: Box<dyn Filter>,
    formatter: Box<dyn Formatter>,
    validator: Option<Box<dyn Validator>>,
    on_numeric_change: Option<NumericCallback>,
    on_blur: Option<NumericCallback>,
    input_mode: Option<InputMode>,
    title: Option<String>,
    tasks: Option<TaskSender>,
    correct_on_mount: bool,

    edits: FormattedInput,
    display: String,
    numeric: String,
    user_keyed: bool,
    /// Deferred tasks hold a weak handle and skip themselves once this drops.
    alive: Rc<()>,
}

impl Default for FormattedNumericInput {
    fn default() -> Self {
        Self::new()
    }
}

impl FormattedNumericInput {
    pub fn new() -> Self {
        Self {
            converter: Box::new(|input: &str| input.to_string()),
            filter: Box::new(|next: &str| next.to_string()),
            formatter: Box::new(|input: &str, _: &str, _: FormatterContext| input.to_string()),
            validator: None,
            on_numeric_change: None,
            on_blur: None,
            input_mode: None,
            title: None,
            tasks: None,
            correct_on_mount: true,
            edits: FormattedInput::new(),
            display: String::new(),
            numeric: String::new(),
            user_keyed: false,
            alive: Rc::new(()),
        }
    }

    pub fn with_converter(mut self, converter: impl Converter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }

    pub fn with_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    pub fn with_boxed_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn with_boxed_validator(mut self, validator: Option<Box<dyn Validator>>) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_on_numeric_change(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.on_numeric_change = Some(Rc::new(callback));
        self
    }

    pub fn with_on_blur(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.on_blur = Some(Rc::new(callback));
        self
    }

    /// Install callbacks that are already shared with the owner.
    pub fn with_callbacks(
        mut self,
        on_numeric_change: Option<NumericCallback>,
        on_blur: Option<NumericCallback>,
    ) -> Self {
        self.on_numeric_change = on_numeric_change;
        self.on_blur = on_blur;
        self
    }

    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = Some(mode);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Queue used for notifications that must not run during mount.
    pub fn with_tasks(mut self, tasks: TaskSender) -> Self {
        self.tasks = Some(tasks);
        self
    }

    /// Whether mount reports an unrepresentable initial value back to the
    /// owner. On by default.
    pub fn with_correct_on_mount(mut self, correct: bool) -> Self {
        self.correct_on_mount = correct;
        self
    }

    pub fn display_value(&self) -> &str {
        &self.display
    }

    pub fn numeric_value(&self) -> &str {
        &self.numeric
    }

    pub fn is_user_keyed(&self) -> bool {
        self.user_keyed
    }

    pub fn input_mode(&self) -> Option<InputMode> {
        self.input_mode
    }

    pub fn on_numeric_change(&self) -> Option<&NumericCallback> {
        self.on_numeric_change.as_ref()
    }

    /// Render the initial value into `element`.
    ///
    /// If the value does not survive a format round trip, the corrected
    /// canonical value is reported to the owner from the task queue, never
    /// synchronously. Mount validation marks the element without reporting.
    pub fn mount(&mut self, element: &mut dyn HostElement, numeric_value: &str) {
        let filtered = self.filter.filter(numeric_value, "");
        let formatted = self
            .formatter
            .format(&filtered, "", FormatterContext::default());
        let refiltered = self.canonical(&formatted, numeric_value);

        self.numeric = numeric_value.to_string();
        if self.correct_on_mount && refiltered != numeric_value {
            log::trace!(
                target: "numerics.input",
                "mount corrected {numeric_value:?} to {refiltered:?}"
            );
            // Keep the owner's value until the owner can hear about the fix.
            let owned = self.on_numeric_change.is_some();
            if !owned || self.schedule_numeric_change(refiltered.clone()) {
                self.numeric = refiltered;
            }
        }

        self.display = formatted;
        element.set_value(&self.display);
        if let Some(mode) = self.input_mode {
            element.set_input_mode(mode);
        }
        if self.title.is_some() {
            element.set_title(self.title.as_deref());
        }

        self.run_validator(element, numeric_value, ValidateContextType::Mount, false);
    }

    /// The owner pushed a canonical value. Echoes of the current value are
    /// ignored.
    pub fn set_numeric_value(&mut self, element: &mut dyn HostElement, value: &str) {
        let filtered = self.filter.filter(value, &self.numeric);
        if filtered == self.numeric {
            self.user_keyed = false;
            return;
        }

        let context = FormatterContext::user_keyed(self.user_keyed);
        self.display = self.formatter.format(&filtered, &self.display, context);
        self.user_keyed = false;
        self.numeric = filtered;
        element.set_value(&self.display);
    }

    /// Decide whether a key may reach the element.
    pub fn key_down(&mut self, event: &KeyboardEvent) -> KeyOutcome {
        self.edits.key_down(event);

        if event.has_modifier() || event.is_composing || !event.is_printable() {
            return KeyOutcome::Allow;
        }

        let converted = self.converter.convert(&event.key);
        if self.filter.filter(&converted, &self.numeric).is_empty() {
            log::trace!(target: "numerics.input", "rejected key {:?}", event.key);
            return KeyOutcome::Prevent;
        }

        self.user_keyed = true;
        KeyOutcome::Allow
    }

    /// The host already applied an edit to `element`; reformat it.
    pub fn change(&mut self, element: &mut dyn HostElement) {
        let edit = self
            .edits
            .change(element.value(), element.selection_end());

        let candidate = self.canonical(&edit.value, &self.numeric);
        let context = FormatterContext::change(self.user_keyed);
        let formatted = self.formatter.format(&candidate, &self.display, context);
        self.user_keyed = false;

        // Reformatting a deletion would put back what the user removed.
        self.display = if edit.change_type.is_deletion() {
            edit.value
        } else {
            formatted
        };
        element.set_value(&self.display);

        let next = self.canonical(&self.display, &self.numeric);
        if next == self.numeric {
            return;
        }

        self.numeric = next;
        self.notify(&self.numeric);
        let numeric = self.numeric.clone();
        self.run_validator(element, &numeric, ValidateContextType::Change, true);
    }

    /// Apply blur formatting and report validity.
    pub fn blur(&mut self, element: &mut dyn HostElement) {
        let filtered = self.canonical(element.value(), &self.numeric);
        self.display = self
            .formatter
            .format(&filtered, &self.display, FormatterContext::blur());
        element.set_value(&self.display);

        if let Some(on_blur) = &self.on_blur {
            on_blur(&self.numeric);
        }

        let numeric = self.numeric.clone();
        self.run_validator(element, &numeric, ValidateContextType::Blur, true);
    }

    /// Report `value` to the owner once the current update settles.
    ///
    /// Does not touch the canonical value; the owner's echo does. Returns
    /// `false` if nothing was queued.
    pub fn schedule_numeric_change(&self, value: String) -> bool {
        let Some(callback) = self.on_numeric_change.clone() else {
            return false;
        };
        let Some(tasks) = &self.tasks else {
            log::warn!(
                target: "numerics.input",
                "no task queue, dropping deferred change {value:?}"
            );
            return false;
        };

        let alive = Rc::downgrade(&self.alive);
        tasks.defer("numeric-change", move || {
            deliver_if_alive(&alive, &callback, &value)
        })
    }

    /// Report `value` to the owner now.
    pub fn notify(&self, value: &str) {
        log::trace!(target: "numerics.input", "numeric change {value:?}");
        if let Some(callback) = &self.on_numeric_change {
            callback(value);
        }
    }

    fn canonical(&self, display: &str, previous: &str) -> String {
        self.filter
            .filter(&self.converter.convert(display), previous)
    }

    fn run_validator(
        &self,
        element: &mut dyn HostElement,
        number: &str,
        kind: ValidateContextType,
        allow_report: bool,
    ) {
        let Some(validator) = &self.validator else {
            return;
        };
        if let Some(result) = validator.validate(number, kind) {
            let result = update_default_custom_validity(result, self.title.as_deref());
            apply_validate_result(element, &result, allow_report);
        }
    }
}

fn deliver_if_alive(alive: &Weak<()>, callback: &NumericCallback, value: &str) {
    if alive.upgrade().is_none() {
        log::debug!(
            target: "numerics.input",
            "input dropped before deferred change {value:?} ran"
        );
        return;
    }
    log::trace!(target: "numerics.input", "deferred numeric change {value:?}");
    callback(value);
}

impl fmt::Debug for FormattedNumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormattedNumericInput")
            .field("display", &self.display)
            .field("numeric", &self.numeric)
            .field("user_keyed", &self.user_keyed)
            .field("input_mode", &self.input_mode)
            .field("validates", &self.validator.is_some())
            .finish_non_exhaustive()
    }
}

/// The event surface shared by every numeric control.
///
/// Implementors expose their [`FormattedNumericInput`]; the provided methods
/// forward to it and may be overridden where a control adds behaviour.
pub trait NumericControl {
    fn input(&self) -> &FormattedNumericInput;

    fn input_mut(&mut self) -> &mut FormattedNumericInput;

    fn mount(&mut self, element: &mut dyn HostElement, numeric_value: &str) {
        self.input_mut().mount(element, numeric_value);
    }

    fn set_numeric_value(&mut self, element: &mut dyn HostElement, value: &str) {
        self.input_mut().set_numeric_value(element, value);
    }

    fn key_down(&mut self, event: &KeyboardEvent) -> KeyOutcome {
        self.input_mut().key_down(event)
    }

    fn change(&mut self, element: &mut dyn HostElement) {
        self.input_mut().change(element);
    }

    fn blur(&mut self, element: &mut dyn HostElement) {
        self.input_mut().blur(element);
    }

    fn display_value(&self) -> &str {
        self.input().display_value()
    }

    fn numeric_value(&self) -> &str {
        self.input().numeric_value()
    }
}

impl NumericControl for FormattedNumericInput {
    fn input(&self) -> &FormattedNumericInput {
        self
    }

    fn input_mut(&mut self) -> &mut FormattedNumericInput {
        self
    }
}

// Forward every method so overrides survive boxing.
impl<C: NumericControl + ?Sized> NumericControl for Box<C> {
    fn input(&self) -> &FormattedNumericInput {
        (**self).input()
    }

    fn input_mut(&mut self) -> &mut FormattedNumericInput {
        (**self).input_mut()
    }

    fn mount(&mut self, element: &mut dyn HostElement, numeric_value: &str) {
        (**self).mount(element, numeric_value);
    }

    fn set_numeric_value(&mut self, element: &mut dyn HostElement, value: &str) {
        (**self).set_numeric_value(element, value);
    }

    fn key_down(&mut self, event: &KeyboardEvent) -> KeyOutcome {
        (**self).key_down(event)
    }

    fn change(&mut self, element: &mut dyn HostElement) {
        (**self).change(element);
    }

    fn blur(&mut self, element: &mut dyn HostElement) {
        (**self).blur(element);
    }

    fn display_value(&self) -> &str {
        (**self).display_value()
    }

    fn numeric_value(&self) -> &str {
        (**self).numeric_value()
    }
}
