use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tunnus::*;

const PINS: [&str; 4] = ["170583+123C", "311280-888Y", "171001A413L", "311280-8880"];

fn bench_pin(c: &mut Criterion) {
    c.bench_function("validate_pin", |b| {
        b.iter(|| {
            for pin in PINS {
                black_box(validate_pin(black_box(pin)));
            }
        });
    });
}

fn bench_parse_pin(c: &mut Criterion) {
    c.bench_function("parse_pin", |b| {
        b.iter(|| black_box(parse_pin(black_box("171001a413l"))));
    });
}

fn bench_business_id(c: &mut Criterion) {
    c.bench_function("validate_business_id", |b| {
        b.iter(|| black_box(validate_business_id(black_box("0737546-2"))));
    });
}

fn bench_vat(c: &mut Criterion) {
    c.bench_function("validate_vat", |b| {
        b.iter(|| black_box(validate_vat(black_box("FI15728600"))));
    });
}

fn bench_finuid(c: &mut Criterion) {
    c.bench_function("validate_finuid", |b| {
        b.iter(|| black_box(validate_finuid(black_box("10011187H"))));
    });
}

fn bench_rejections(c: &mut Criterion) {
    let inputs = ["", "string", "010101-123N", "0592509-666", "FI07375463"];
    c.bench_function("reject_mixed_inputs", |b| {
        b.iter(|| {
            for s in inputs {
                black_box(validate_vat(black_box(s)));
                black_box(validate_pin(black_box(s)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_pin,
    bench_parse_pin,
    bench_business_id,
    bench_vat,
    bench_finuid,
    bench_rejections,
);
criterion_main!(benches);
