#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // must never panic, every malformed input maps to an error kind
    let _ = exprparse::parse_expression(data);
});
