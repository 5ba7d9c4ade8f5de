use controls::{
    CurrencyInputOptions, CurrencyNumberInput, EmployerIdentificationNumberInput,
    FormattedNumberInput, InputProps, NumberInputOptions, PercentNumberInput,
    PostalCodeNumberInput, SocialSecurityNumberInput, TelephoneNumberInput, Validation,
};
use input_core::NumericControl;
use input_test_support::{
    Owner, SESSION_CASES_V1, SessionCase, Stateful, case_selected, diff_lines, load_cases,
};
use std::path::Path;

fn props(owner: &Owner, case: &SessionCase) -> InputProps {
    InputProps::new()
        .with_locales(case.locale.as_str())
        .with_on_numeric_change(owner.on_numeric_change())
        .with_on_blur(owner.on_blur())
        .with_tasks(owner.tasks())
}

fn number_options(case: &SessionCase) -> NumberInputOptions {
    NumberInputOptions {
        decimal_places: case.decimal_places,
        min: case.min.clone(),
        max: case.max.clone(),
        ..NumberInputOptions::default()
    }
}

fn build(owner: &Owner, case: &SessionCase) -> Box<dyn NumericControl> {
    let props = props(owner, case);
    match case.control.as_str() {
        "ein" => Box::new(EmployerIdentificationNumberInput::new(props, Validation::default())),
        "ssn" => Box::new(SocialSecurityNumberInput::new(props, Validation::default())),
        "postal" => Box::new(PostalCodeNumberInput::new(props, Validation::default())),
        "telephone" => Box::new(TelephoneNumberInput::new(props, Validation::default())),
        "percent" => Box::new(
            PercentNumberInput::new(props, number_options(case))
                .unwrap_or_else(|err| panic!("case '{}': {err}", case.name)),
        ),
        "number" => Box::new(
            FormattedNumberInput::new(props, number_options(case))
                .unwrap_or_else(|err| panic!("case '{}': {err}", case.name)),
        ),
        "currency" => Box::new(
            CurrencyNumberInput::new(props, CurrencyInputOptions::default())
                .unwrap_or_else(|err| panic!("case '{}': {err}", case.name)),
        ),
        other => panic!("unknown control '{other}' in case '{}'", case.name),
    }
}

fn run(case: &SessionCase) -> Option<String> {
    let mut harness = if case.deferred {
        Stateful::render_deferred(&case.initial, |owner| build(owner, case))
    } else {
        Stateful::render(&case.initial, |owner| build(owner, case))
    };
    for step in &case.steps {
        step.apply(&mut harness);
    }

    let mut failure = String::new();
    if harness.value() != case.display {
        failure.push_str(&format!(
            "display: expected {:?}, actual {:?}\n",
            case.display,
            harness.value()
        ));
    }
    let changes = harness.changes();
    if changes != case.changes {
        failure.push_str("changes:\n");
        failure.push_str(&diff_lines(&case.changes, &changes));
    }
    (!failure.is_empty()).then_some(failure)
}

#[test]
fn session_cases() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sessions.toml");
    let cases: Vec<SessionCase> = load_cases(&path, SESSION_CASES_V1);

    let mut ran = 0;
    let mut failures = Vec::new();
    for case in &cases {
        if !case_selected("NUMERICS_SESSION_CASE", &case.name) {
            continue;
        }
        ran += 1;
        if let Some(failure) = run(case) {
            failures.push(format!("case '{}':\n{failure}", case.name));
        }
    }

    assert!(ran > 0, "no session cases selected");
    assert!(
        failures.is_empty(),
        "{} of {ran} session cases failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}
