use crate::element::HostElement;
use validity::ValidateResult;

/// Apply a validator directive to the element's native validity.
///
/// `report` on the directive is honoured only when `allow_report` is set.
/// Directives for an element that has left its document are dropped.
pub fn apply_validate_result(
    element: &mut dyn HostElement,
    result: &ValidateResult,
    allow_report: bool,
) {
    if !element.is_connected() {
        log::debug!(
            target: "numerics.input",
            "dropping validity {:?} for a disconnected element",
            result.custom_validity
        );
        return;
    }

    log::trace!(
        target: "numerics.input",
        "custom validity {:?} (report: {})",
        result.custom_validity,
        allow_report && result.report
    );

    element.set_custom_validity(&result.custom_validity);
    if allow_report && result.report {
        element.report_validity();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::InputElement;

    #[test]
    fn report_requires_both_flags() {
        let mut element = InputElement::new();

        apply_validate_result(&mut element, &ValidateResult::invalid("low", true), false);
        assert_eq!(element.validation_message(), "low");
        assert_eq!(element.report_count(), 0);

        apply_validate_result(&mut element, &ValidateResult::invalid("low", false), true);
        assert_eq!(element.report_count(), 0);

        apply_validate_result(&mut element, &ValidateResult::invalid("low", true), true);
        assert_eq!(element.report_count(), 1);
        assert_eq!(element.invalid_events(), ["low".to_string()]);
    }

    #[test]
    fn empty_message_clears_invalidity() {
        let mut element = InputElement::new();
        element.set_custom_validity("low");
        apply_validate_result(&mut element, &ValidateResult::valid(true), true);
        assert!(element.is_valid());
        assert!(element.invalid_events().is_empty());
    }

    #[test]
    fn disconnected_element_is_left_alone() {
        let mut element = InputElement::new();
        element.disconnect();
        apply_validate_result(&mut element, &ValidateResult::invalid("low", true), true);
        assert!(element.is_valid());
        assert_eq!(element.report_count(), 0);
    }
}
