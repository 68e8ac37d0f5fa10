use criterion::{black_box, criterion_group, criterion_main, Criterion};
use exprparse::parse_expression;

const BENCH_EXPRESSIONS: [(&str, &str, f64); 2] = [
    ("flat", "2 * 6 - 4 - 3 / 2 + 3 * 4 * 7 - 32 * 3 + 43 * 4", 166.5),
    ("nested", "(1.5 - 1 / (2 * (5 + 3))) ^ (2 / (0.5 * 4)) - -0.25", 1.6875),
];

fn assert_float_eq(f1: f64, f2: f64) {
    assert!((f1 - f2).abs() < 1e-12);
}

fn parse_and_eval(c: &mut Criterion) {
    for (name, expr_str, ref_val) in BENCH_EXPRESSIONS {
        c.bench_function(&format!("exprparse_{}", name), |b| {
            b.iter(|| {
                assert_float_eq(parse_expression(black_box(expr_str)).unwrap(), ref_val);
            })
        });
    }
}

criterion_group!(benches, parse_and_eval);
criterion_main!(benches);
