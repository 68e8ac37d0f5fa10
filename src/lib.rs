#![doc(html_root_url = "https://docs.rs/exprparse/0.1.0")]
//! Exprparse evaluates a single infix arithmetic expression to a floating point
//! number. Supported are numeric literals with optional exponent, the binary
//! operators `+`, `-`, `*`, `/`, the right-associative power operator `^` (also
//! spelled `**`), unary `+`/`-`, and grouping with `()` or `[]`.
//!
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use exprparse::parse_expression;
//!
//! assert!((parse_expression("(12.0+4.0)^-0.5")? - 0.25).abs() < 1e-12);
//! #
//! #     Ok(())
//! # }
//! ```
//!
//! Evaluation runs in three stages, a tokenizer that decides for every `+`/`-`
//! whether it is a sign or a binary operator, a shunting-yard pass that reorders
//! the tokens into reverse polish notation, and a stack machine that reduces the
//! reordered tokens to one value. Every failure is one of the kinds of
//! [`ExprError`](ExprError); [`get_status_string`](get_status_string) maps outcomes
//! to fixed sentences for interactive callers.

mod operators;
mod parser;
mod result;
mod rpn;
mod util;

use num::Float;
use std::str::FromStr;

pub use operators::{make_operators, OpAssoc, OpFun, OpKind, Operator, ALMOST_ZERO};
pub use parser::{tokenize, Paren, Token, TokenVec};
pub use result::{get_status_string, ExprError, ExprResult, Status};
pub use rpn::{eval_rpn, to_rpn};

/// Evaluates a single infix expression and returns the computed value.
///
/// # Errors
///
/// One of the kinds of [`ExprError`](ExprError); the first stage that detects a fault
/// wins and nothing is recovered, since every failure is a property of the input text.
///
pub fn parse_expression(expression: &str) -> ExprResult<f64> {
    eval::<f64>(expression)
}

/// Generic flavor of [`parse_expression`](parse_expression) for any float type that
/// can be parsed from a literal.
pub fn eval<T>(text: &str) -> ExprResult<T>
where
    T: Float + FromStr,
{
    let ops = make_operators::<T>();
    let tokens = tokenize(text, &ops)?;
    let rpn = to_rpn(tokens)?;
    eval_rpn(rpn)
}

/// Returns the crate version as a dotted triple, e.g., `0.1.0`.
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use crate::util::{assert_float_eq_f32, assert_float_eq_f64};
    use crate::{eval, get_status_string, get_version, parse_expression, ExprError, Status};

    #[test]
    fn test_eval() {
        assert_float_eq_f64(parse_expression("10.0+5.0").unwrap(), 15.0);
        assert_float_eq_f64(parse_expression("5-3*5").unwrap(), -10.0);
        assert_float_eq_f64(parse_expression("5-10/-5").unwrap(), 7.0);
        assert_float_eq_f64(parse_expression("3^2^3").unwrap(), 6561.0);
        assert_float_eq_f64(parse_expression("(12.0+4.0)^-0.5").unwrap(), 0.25);
        assert_float_eq_f64(parse_expression("[2+1]*2").unwrap(), 6.0);
    }

    #[test]
    fn test_eval_generic() {
        assert_float_eq_f32(eval::<f32>("1.3+0.7*2").unwrap(), 2.7);
        assert_float_eq_f64(eval::<f64>("1.3+0.7*2-1/10").unwrap(), 2.6);
        assert!(eval::<f32>("1.3+|2").is_err());
    }

    #[test]
    fn test_determinism() {
        let first = parse_expression("2.5*(3-1)^2");
        for _ in 0..10 {
            assert_eq!(parse_expression("2.5*(3-1)^2"), first);
        }
    }

    #[test]
    fn test_failure_kinds() {
        assert_eq!(parse_expression(""), Err(ExprError::EmptyExpression));
        assert_eq!(parse_expression("abc"), Err(ExprError::UnknownToken));
        assert_eq!(parse_expression("2/0"), Err(ExprError::DivideByZero));
        assert_eq!(parse_expression("(1-2"), Err(ExprError::UnmatchedBrackets));
        assert_eq!(parse_expression("*1.0"), Err(ExprError::TooFewArguments));
        assert_eq!(parse_expression("1.0 2.0"), Err(ExprError::TooManyArguments));
    }

    #[test]
    fn test_version() {
        assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(get_version(), get_version());
        assert_eq!(get_status_string(Status::Success), "Success");
        assert_eq!(
            get_status_string(Status::Success),
            get_status_string(Status::Success)
        );
    }
}
