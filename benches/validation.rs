//! Benchmarks for form input checks.
//!
//! These benchmarks measure the email pattern and amount normalization that
//! run on every "Next" press of the personal-info step.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regex::Regex;

const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$";

fn bench_email_compile(c: &mut Criterion) {
    c.bench_function("regex_compile_email_pattern", |b| {
        b.iter(|| Regex::new(black_box(EMAIL_PATTERN)))
    });
}

fn bench_email_match(c: &mut Criterion) {
    let re = Regex::new(EMAIL_PATTERN).unwrap();
    let inputs = [
        "george.russell@example.com",
        "MadMaxVerstappen@redbull.com",
        "not-an-email",
        "a@b",
    ];

    c.bench_function("regex_match_email", |b| {
        b.iter(|| {
            inputs
                .iter()
                .filter(|input| re.is_match(black_box(input)))
                .count()
        })
    });
}

fn bench_amount_normalize(c: &mut Criterion) {
    let inputs = ["5,000", "5,000,000", "250000", "12,34x"];

    c.bench_function("amount_strip_and_parse", |b| {
        b.iter(|| {
            inputs
                .iter()
                .filter_map(|raw| black_box(raw).replace(',', "").trim().parse::<f64>().ok())
                .sum::<f64>()
        })
    });
}

criterion_group!(
    benches,
    bench_email_compile,
    bench_email_match,
    bench_amount_normalize
);
criterion_main!(benches);
