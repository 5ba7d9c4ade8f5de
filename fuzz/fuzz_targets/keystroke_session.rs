#![no_main]

use input_core::{
    FormattedNumericInput, HostElement, InputElement, KeyboardEvent, BACKSPACE,
    DELETE,
};
use libfuzzer_sys::fuzz_target;
use numeric_format::{filter_to_numeric, format_social_security_number};

// Each byte is one user action against a masked input.
fuzz_target!(|data: &[u8]| {
    let mut input = FormattedNumericInput::new()
        .with_filter(filter_to_numeric)
        .with_formatter(format_social_security_number());
    let mut element = InputElement::new();
    element.focus();
    input.mount(&mut element, "");

    for &byte in data {
        let event = match byte % 16 {
            0..=9 => KeyboardEvent::new(((b'0' + byte % 16) as char).to_string()),
            10 => KeyboardEvent::new(BACKSPACE),
            11 => KeyboardEvent::new(DELETE),
            12 => KeyboardEvent::new("a"),
            13 => {
                element.set_caret(usize::from(byte / 16), false);
                continue;
            }
            14 => {
                element.select_all();
                continue;
            }
            _ => {
                input.blur(&mut element);
                continue;
            }
        };
        if input.key_down(&event).is_prevented() {
            continue;
        }
        match event.key.as_str() {
            BACKSPACE => element.backspace(),
            DELETE => element.delete(),
            key => element.insert_text(key),
        }
        input.change(&mut element);

        let digits = element.value().chars().filter(char::is_ascii_digit).count();
        assert!(digits <= 9, "{:?}", element.value());
        assert!(input.numeric_value().chars().all(|ch| ch.is_ascii_digit()));
    }
});
