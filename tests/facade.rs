use input_test_support::Stateful;
use numerics::{InputProps, NumberInputOptions, PercentNumberInput, format::Formatter};

#[test]
fn facade_drives_a_percent_input() {
    let mut harness = Stateful::render("", |owner| {
        let props = InputProps::new()
            .with_on_numeric_change(owner.on_numeric_change())
            .with_tasks(owner.tasks());
        PercentNumberInput::new(props, NumberInputOptions::default().with_max(100)).unwrap()
    });
    harness.type_text("12.5");
    harness.blur();

    assert_eq!(harness.value(), "12.5%");
    assert_eq!(harness.owner_value(), "12.5");
}

#[test]
fn facade_exposes_the_formatters() {
    let ssn = numerics::format::format_social_security_number();
    assert_eq!(ssn.format_value("123456789"), "123-45-6789");
}
