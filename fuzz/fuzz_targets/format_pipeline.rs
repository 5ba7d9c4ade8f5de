#![no_main]

use libfuzzer_sys::fuzz_target;
use numeric_format::{
    Converter, Formatter, FormatterContext, NumberFormatOptions, convert_number,
    filter_to_signed_float, format_float,
};

fn is_canonical(value: &str) -> bool {
    value
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
        && value.matches('.').count() <= 1
}

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    for locale in ["en-US", "de-DE"] {
        let canonical = filter_to_signed_float(&convert_number(locale).convert(input));
        assert!(is_canonical(&canonical), "{canonical:?} from {input:?}");

        let Ok(formatter) = format_float(
            NumberFormatOptions::new(locale)
                .with_min(-1000)
                .with_max(1000)
                .with_decimal_places(2),
        ) else {
            return;
        };
        for context in [
            FormatterContext::default(),
            FormatterContext::change(true),
            FormatterContext::blur(),
        ] {
            let _ = formatter.format(&canonical, "", context);
        }
    }
});
