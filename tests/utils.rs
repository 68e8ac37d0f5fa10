pub fn assert_float_eq(f1: f64, f2: f64, tol: f64) {
    assert!(
        (f1 - f2).abs() < tol,
        "floats not almost equal\nf1: {}\nf2: {}\n",
        f1,
        f2
    );
}

#[cfg(test)]
pub fn assert_float_eq_f64(f1: f64, f2: f64) {
    assert_float_eq(f1, f2, 1e-12);
}
