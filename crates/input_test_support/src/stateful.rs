//! An owner that keeps the canonical value and echoes it back.

use bus::{Bus, TaskSender};
use input_core::{HostElement, InputElement, KeyboardEvent, NumericControl, BACKSPACE, DELETE};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct OwnerState {
    numeric_value: String,
    changes: Vec<String>,
    blurs: Vec<String>,
}

/// The owning component's side of a control: callbacks and the task queue.
#[derive(Clone, Debug)]
pub struct Owner {
    state: Rc<RefCell<OwnerState>>,
    tasks: TaskSender,
}

impl Owner {
    /// Records the value and makes it the owner's state.
    pub fn on_numeric_change(&self) -> impl Fn(&str) + 'static {
        let state = Rc::clone(&self.state);
        move |value: &str| {
            let mut state = state.borrow_mut();
            state.numeric_value = value.to_string();
            state.changes.push(value.to_string());
        }
    }

    pub fn on_blur(&self) -> impl Fn(&str) + 'static {
        let state = Rc::clone(&self.state);
        move |value: &str| state.borrow_mut().blurs.push(value.to_string())
    }

    pub fn tasks(&self) -> TaskSender {
        self.tasks.clone()
    }
}

/// A mounted control wired to an [`Owner`] and an [`InputElement`].
///
/// After every event the queue is drained and the owner's state is pushed
/// back into the control, the way a parent re-renders with its new state.
///
/// ```
/// use input_core::FormattedNumericInput;
/// use input_test_support::Stateful;
///
/// let mut harness = Stateful::render("12", |owner| {
///     FormattedNumericInput::new()
///         .with_on_numeric_change(owner.on_numeric_change())
///         .with_tasks(owner.tasks())
/// });
/// harness.type_text("3");
///
/// assert_eq!(harness.value(), "123");
/// assert_eq!(harness.changes(), ["123"]);
/// ```
pub struct Stateful<C> {
    control: C,
    element: InputElement,
    owner: Owner,
    bus: Bus,
}

impl<C: NumericControl> Stateful<C> {
    /// Mount with `numeric_value` as the first value the control sees.
    pub fn render(numeric_value: &str, build: impl FnOnce(&Owner) -> C) -> Self {
        let mut harness = Self::new(numeric_value, build);
        harness
            .control
            .mount(&mut harness.element, numeric_value);
        harness.settle();
        harness
    }

    /// Mount empty, then push `numeric_value` as an owner update. Matches an
    /// owner whose state is filled in after its first render.
    pub fn render_deferred(numeric_value: &str, build: impl FnOnce(&Owner) -> C) -> Self {
        let mut harness = Self::new(numeric_value, build);
        harness.control.mount(&mut harness.element, "");
        harness.settle();
        harness
    }

    fn new(numeric_value: &str, build: impl FnOnce(&Owner) -> C) -> Self {
        let bus = Bus::new();
        let owner = Owner {
            state: Rc::new(RefCell::new(OwnerState {
                numeric_value: numeric_value.to_string(),
                ..OwnerState::default()
            })),
            tasks: bus.sender(),
        };
        let control = build(&owner);
        let mut element = InputElement::new();
        element.focus();
        Self {
            control,
            element,
            owner,
            bus,
        }
    }

    /// Run deferred tasks, then echo the owner's value.
    pub fn settle(&mut self) {
        self.bus.run_pending();
        let numeric_value = self.owner.state.borrow().numeric_value.clone();
        self.control
            .set_numeric_value(&mut self.element, &numeric_value);
    }

    /// Press one key: keydown, then the host edit and change unless the key
    /// was prevented. Returns `false` if it was prevented.
    pub fn press(&mut self, event: KeyboardEvent) -> bool {
        if self.control.key_down(&event).is_prevented() {
            return false;
        }
        match event.key.as_str() {
            BACKSPACE => self.element.backspace(),
            DELETE => self.element.delete(),
            key if event.is_printable() && !event.has_modifier() => {
                self.element.insert_text(key)
            }
            _ => return true,
        }
        self.control.change(&mut self.element);
        self.settle();
        true
    }

    /// Type each character as its own key press.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyboardEvent::new(ch.to_string()));
        }
    }

    pub fn backspace(&mut self) {
        self.press(KeyboardEvent::new(BACKSPACE));
    }

    pub fn delete(&mut self) {
        self.press(KeyboardEvent::new(DELETE));
    }

    /// Insert `text` at the caret in one edit, with no key events.
    pub fn paste(&mut self, text: &str) {
        self.element.insert_text(text);
        self.control.change(&mut self.element);
        self.settle();
    }

    /// Remove the selection in one edit and return it.
    pub fn cut(&mut self) -> String {
        self.control
            .key_down(&KeyboardEvent::new("x").with_ctrl());
        let taken = self.element.cut();
        self.control.change(&mut self.element);
        self.settle();
        taken
    }

    pub fn select_all(&mut self) {
        self.element.select_all();
    }

    pub fn set_caret(&mut self, caret: usize) {
        self.element.set_caret(caret, false);
    }

    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.element.set_selection_range(start, end);
    }

    pub fn focus(&mut self) {
        self.element.focus();
    }

    /// Move focus away, like pressing Tab.
    pub fn blur(&mut self) {
        self.element.blur();
        self.control.blur(&mut self.element);
        self.settle();
    }

    /// The owner changes its state programmatically.
    pub fn set_owner_value(&mut self, value: &str) {
        self.owner.state.borrow_mut().numeric_value = value.to_string();
        self.settle();
    }

    pub fn value(&self) -> &str {
        self.element.value()
    }

    pub fn element(&self) -> &InputElement {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut InputElement {
        &mut self.element
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    /// Every value passed to `on_numeric_change`, in order.
    pub fn changes(&self) -> Vec<String> {
        self.owner.state.borrow().changes.clone()
    }

    pub fn change_count(&self) -> usize {
        self.owner.state.borrow().changes.len()
    }

    pub fn last_change(&self) -> Option<String> {
        self.owner.state.borrow().changes.last().cloned()
    }

    /// Every value passed to `on_blur`.
    pub fn blurs(&self) -> Vec<String> {
        self.owner.state.borrow().blurs.clone()
    }

    /// The owner's current state.
    pub fn owner_value(&self) -> String {
        self.owner.state.borrow().numeric_value.clone()
    }
}
