use controls::{CurrencyInputOptions, CurrencyNumberInput, InputProps};
use input_core::InputMode;
use input_test_support::{Owner, Stateful};

fn currency(
    locale: &'static str,
    options: CurrencyInputOptions,
) -> impl FnOnce(&Owner) -> CurrencyNumberInput {
    move |owner| {
        let props = InputProps::new()
            .with_locales(locale)
            .with_on_numeric_change(owner.on_numeric_change())
            .with_tasks(owner.tasks());
        CurrencyNumberInput::new(props, options).unwrap()
    }
}

#[test]
fn owner_receives_unrounded_value_after_mount() {
    for (value, display) in [("2.225", "$2.23"), ("2.226", "$2.23"), ("2.224", "$2.22")] {
        let harness = Stateful::render(value, currency("en-US", CurrencyInputOptions::new()));
        assert_eq!(harness.value(), display);
        assert_eq!(harness.changes(), [value]);
    }
}

#[test]
fn mount_value_is_padded_for_the_owner() {
    let harness = Stateful::render("3", currency("en-US", CurrencyInputOptions::new()));
    assert!(harness.value().starts_with("$3"));
    assert_eq!(harness.changes(), ["3.00"]);
    assert_eq!(harness.owner_value(), "3.00");
}

#[test]
fn locale_symbol_and_separators() {
    let mut harness = Stateful::render("", currency("de-DE", CurrencyInputOptions::new()));
    harness.type_text("1234,5");
    harness.blur();
    assert_eq!(harness.value(), "€1.234,50");
    assert_eq!(harness.last_change().as_deref(), Some("1234.50"));
}

#[test]
fn without_fraction_nothing_is_padded() {
    let options = CurrencyInputOptions::new().with_show_fraction(false);
    let mut harness = Stateful::render("12", currency("en-US", options));
    assert_eq!(harness.value(), "$12");
    harness.blur();
    assert!(harness.changes().is_empty());
}

#[test]
fn keystroke_never_rounds_up() {
    let mut harness = Stateful::render("", currency("en-US", CurrencyInputOptions::new()));
    harness.type_text("0.999");
    assert_eq!(harness.value(), "$0.99");
    assert_eq!(harness.owner_value(), "0.99");
}

#[test]
fn input_mode_default_and_override() {
    let harness = Stateful::render("222.333", currency("en-US", CurrencyInputOptions::new()));
    assert_eq!(harness.element().input_mode(), Some(InputMode::Decimal));
    assert_eq!(harness.value(), "$222.33");

    let harness = Stateful::render("222.333", |owner| {
        let props = InputProps::new()
            .with_input_mode(InputMode::Text)
            .with_tasks(owner.tasks());
        CurrencyNumberInput::new(props, CurrencyInputOptions::new()).unwrap()
    });
    assert_eq!(harness.element().input_mode(), Some(InputMode::Text));
}
