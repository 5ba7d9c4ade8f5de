use criterion::{Criterion, black_box, criterion_group, criterion_main};
use numeric_format::{
    Converter, CurrencyOptions, Formatter, FormatterContext, NumberFormatOptions, convert_number,
    filter_to_signed_float, format_currency, format_float, format_telephone_number,
};

const KEYSTROKES: &str = "1234567.891";

fn bench_currency_keystrokes(c: &mut Criterion) {
    let formatter = format_currency("en-US", CurrencyOptions::default()).unwrap();
    c.bench_function("bench_currency_keystrokes", |b| {
        b.iter(|| {
            let mut previous = String::new();
            for end in 1..=KEYSTROKES.len() {
                let next = filter_to_signed_float(black_box(&KEYSTROKES[..end]));
                previous = formatter.format(&next, &previous, FormatterContext::change(true));
            }
            black_box(previous);
        });
    });
}

fn bench_float_de_de_pipeline(c: &mut Criterion) {
    let formatter = format_float(NumberFormatOptions::new("de-DE")).unwrap();
    let converter = convert_number("de-DE");
    c.bench_function("bench_float_de_de_pipeline", |b| {
        b.iter(|| {
            let canonical = filter_to_signed_float(&converter.convert(black_box("1.234.567,891")));
            black_box(formatter.format(&canonical, "", FormatterContext::blur()));
        });
    });
}

fn bench_telephone_template(c: &mut Criterion) {
    let formatter = format_telephone_number("en-US");
    c.bench_function("bench_telephone_template", |b| {
        b.iter(|| black_box(formatter.format_value(black_box("2223334444"))));
    });
}

criterion_group!(
    benches,
    bench_currency_keystrokes,
    bench_float_de_de_pipeline,
    bench_telephone_template
);
criterion_main!(benches);
