use controls::{
    CurrencyInputOptions, CurrencyNumberInput, EmployerIdentificationNumberInput, InputProps,
    TelephoneNumberInput, Validation,
};
use input_test_support::{Owner, Stateful};
use validity::{MinLength, MinValue, ValidateContextType, ValidateErrorKind, ValidateResult};

const LESS_THAN_MIN_LENGTH: &str =
    "The entered value is shorter than the required minimum number of characters.";
const LESS_THAN_MIN_VALUE: &str = "The entered value is less than the required minimum value.";

fn props(owner: &Owner) -> InputProps {
    InputProps::new()
        .with_on_numeric_change(owner.on_numeric_change())
        .with_tasks(owner.tasks())
}

fn telephone(validation: Validation<MinLength>) -> impl FnOnce(&Owner) -> TelephoneNumberInput {
    move |owner| TelephoneNumberInput::new(props(owner), validation)
}

#[test]
fn incomplete_telephone_is_silently_invalid_at_mount() {
    let harness = Stateful::render("222", telephone(Validation::enabled()));
    assert_eq!(harness.element().validation_message(), LESS_THAN_MIN_LENGTH);
    assert_eq!(harness.element().report_count(), 0);
}

#[test]
fn typing_never_reports_an_error() {
    let mut harness = Stateful::render("", telephone(Validation::enabled()));
    harness.type_text("222");
    assert!(harness.element().is_valid());
    assert!(harness.element().invalid_events().is_empty());
}

#[test]
fn blur_reports_incomplete_telephone() {
    let mut harness = Stateful::render("", telephone(Validation::enabled()));
    harness.type_text("222");
    harness.blur();

    assert_eq!(harness.value(), "(222");
    assert_eq!(harness.element().invalid_events(), [LESS_THAN_MIN_LENGTH]);

    harness.focus();
    harness.type_text("3334444");
    harness.blur();
    assert!(harness.element().is_valid());
    assert_eq!(harness.element().invalid_events().len(), 1);
}

#[test]
fn validation_is_off_by_default() {
    let mut harness = Stateful::render("222", telephone(Validation::default()));
    harness.blur();
    assert!(harness.element().is_valid());
    assert_eq!(harness.element().report_count(), 0);
}

#[test]
fn title_replaces_every_message() {
    let mut harness = Stateful::render("12", |owner| {
        EmployerIdentificationNumberInput::new(
            props(owner).with_title("Enter all nine digits"),
            Validation::enabled(),
        )
    });
    assert_eq!(harness.element().title(), Some("Enter all nine digits"));
    harness.blur();
    assert_eq!(harness.element().invalid_events(), ["Enter all nine digits"]);
}

#[test]
fn title_replaces_messages_of_a_supplied_validator() {
    let mut harness = Stateful::render("222", |owner| {
        let props = props(owner)
            .with_title("Enter a phone number")
            .with_validator(|_: &str, kind: ValidateContextType| {
                (kind == ValidateContextType::Blur).then(|| ValidateResult::invalid("bad", true))
            });
        TelephoneNumberInput::new(props, Validation::default())
    });
    assert!(harness.element().is_valid());

    harness.blur();
    assert_eq!(harness.element().validation_message(), "Enter a phone number");
    assert_eq!(harness.element().invalid_events(), ["Enter a phone number"]);
}

#[test]
fn hook_sees_tag_form_and_can_replace_directive() {
    let validation = Validation::<MinLength>::default().with_update_custom_validity(
        |number, context, result| {
            if context.kind != ValidateContextType::Blur {
                return None;
            }
            assert_eq!(context.properties.min_length, 10);
            let failed = result.and_then(|r| r.custom_validity);
            assert_eq!(failed, Some(ValidateErrorKind::LessThanMinLength));
            Some(ValidateResult::invalid(format!("{number} is too short"), true))
        },
    );

    let mut harness = Stateful::render("", telephone(validation));
    harness.type_text("22");
    harness.blur();
    assert_eq!(harness.element().invalid_events(), ["22 is too short"]);
}

#[test]
fn currency_minimum_is_checked_on_blur() {
    let mut harness = Stateful::render("", |owner| {
        let options = CurrencyInputOptions::new()
            .with_min(5)
            .with_validation(Validation::<MinValue>::enabled());
        CurrencyNumberInput::new(props(owner), options).unwrap()
    });

    harness.type_text("4.5");
    assert!(harness.element().is_valid());
    harness.blur();

    assert_eq!(harness.value(), "$4.50");
    assert_eq!(harness.element().invalid_events(), [LESS_THAN_MIN_VALUE]);
}

#[test]
fn disconnected_element_keeps_its_validity() {
    let mut harness = Stateful::render("", telephone(Validation::enabled()));
    harness.type_text("22");
    let reports = harness.element().report_count();
    harness.element_mut().disconnect();
    harness.blur();
    assert!(harness.element().is_valid());
    assert_eq!(harness.element().report_count(), reports);
}
