use criterion::{Criterion, black_box, criterion_group, criterion_main};
use funparse::{Parser, character, integer, literal, one_or_more, zero_or_more};

fn bench_zero_or_more(c: &mut Criterion) {
    let input = format!("{}b", "a".repeat(100_000));
    let parser = zero_or_more(character('a'));

    c.bench_function("zero_or_more_100k_chars", |b| {
        b.iter(|| parser.parse(black_box(&input)))
    });
}

fn bench_literal(c: &mut Criterion) {
    let expected = "keyword".repeat(1_000);
    let input = format!("{} tail", expected);
    let parser = literal(expected);

    c.bench_function("literal_7k_chars", |b| {
        b.iter(|| parser.parse(black_box(&input)))
    });
}

fn bench_integers(c: &mut Criterion) {
    let input = "18446744073709551615".repeat(1_000);
    let parser = one_or_more(integer());

    c.bench_function("integer_max_u64", |b| {
        b.iter(|| integer().parse(black_box("18446744073709551615")))
    });
    c.bench_function("one_or_more_integer_overflowing_run", |b| {
        b.iter(|| parser.parse(black_box(&input)))
    });
}

criterion_group!(benches, bench_zero_or_more, bench_literal, bench_integers);
criterion_main!(benches);
