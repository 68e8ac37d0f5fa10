use crate::operators::{OpKind, Operator};
use crate::{ExprError, ExprResult};
use lazy_static::lazy_static;
use regex::Regex;
use smallvec::SmallVec;
use std::str::FromStr;

/// Number of tokens we expect to be able to keep on the stack before the
/// sequences spill to the heap.
pub const N_TOKENS_ON_STACK: usize = 32;

/// Token sequence as produced by [`tokenize`](tokenize) and reordered by
/// [`to_rpn`](crate::to_rpn).
pub type TokenVec<T> = SmallVec<[Token<T>; N_TOKENS_ON_STACK]>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}

/// A token of the scanned expression. Tokens are value types owned by the sequence
/// that holds them, nothing is mutated after creation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Token<T: Copy> {
    Num(T),
    Op(Operator<T>),
    Paren(Paren),
}

fn find_op<T: Copy>(text_rest: &str, ops: &[Operator<T>]) -> Option<Operator<T>> {
    ops.iter().find(|op| text_rest.starts_with(op.repr)).copied()
}

/// A `+` or `-` denotes a sign rather than a binary operator if there is no token yet
/// or if the preceding token is neither a number nor a closing bracket.
fn resolve_sign<T: Copy>(
    op: Operator<T>,
    last: Option<&Token<T>>,
    ops: &[Operator<T>],
) -> ExprResult<Operator<T>> {
    let unary_position = !matches!(
        last,
        Some(Token::Num(_)) | Some(Token::Paren(Paren::Close))
    );
    let kind = match (op.kind, unary_position) {
        (OpKind::Sub, true) => OpKind::UnaryMinus,
        (OpKind::Add, true) => OpKind::UnaryPlus,
        _ => return Ok(op),
    };
    ops.iter()
        .find(|o| o.kind == kind)
        .copied()
        .ok_or(ExprError::Error)
}

/// Scans a text into a sequence of tokens.
///
/// # Arguments
///
/// * `text` - text to be scanned
/// * `ops` - operator set in match order, see [`make_operators`](crate::make_operators)
///
/// # Errors
///
/// * [`EmptyExpression`](ExprError::EmptyExpression) if `text` is empty,
/// * [`UnknownToken`](ExprError::UnknownToken) as soon as the rest of the text starts
///   with something that is neither a number, nor an operator, nor a bracket.
///
pub fn tokenize<T>(text: &str, ops: &[Operator<T>]) -> ExprResult<TokenVec<T>>
where
    T: Copy + FromStr,
{
    if text.is_empty() {
        return Err(ExprError::EmptyExpression);
    }

    lazy_static! {
        static ref RE_NUMBER: Regex =
            Regex::new(r"^([0-9]+\.?|\.[0-9]+)[0-9]*([eE][+-]?[0-9]+)?").unwrap();
    }

    let mut tokens = TokenVec::<T>::new();
    let mut cur_offset = 0usize;
    while cur_offset < text.len() {
        if text.as_bytes()[cur_offset].is_ascii_whitespace() {
            cur_offset += 1;
            continue;
        }
        let text_rest = &text[cur_offset..];
        let next_token = if let Some(m) = RE_NUMBER.find(text_rest) {
            cur_offset += m.end();
            let n = m.as_str().parse::<T>().map_err(|_| ExprError::UnknownToken)?;
            Token::Num(n)
        } else if text_rest.starts_with('(') || text_rest.starts_with('[') {
            cur_offset += 1;
            Token::Paren(Paren::Open)
        } else if text_rest.starts_with(')') || text_rest.starts_with(']') {
            cur_offset += 1;
            Token::Paren(Paren::Close)
        } else if let Some(op) = find_op(text_rest, ops) {
            cur_offset += op.repr.len();
            Token::Op(resolve_sign(op, tokens.last(), ops)?)
        } else {
            return Err(ExprError::UnknownToken);
        };
        tokens.push(next_token);
    }
    Ok(tokens)
}

#[cfg(test)]
use crate::operators::make_operators;

#[cfg(test)]
fn kinds_of(text: &str) -> ExprResult<Vec<OpKind>> {
    let ops = make_operators::<f64>();
    Ok(tokenize(text, &ops)?
        .iter()
        .filter_map(|t| match t {
            Token::Op(op) => Some(op.kind),
            _ => None,
        })
        .collect())
}

#[test]
fn test_tokenize() {
    let ops = make_operators::<f64>();
    let tokens = tokenize(" 2 *(3.5+ 4)\t", &ops).unwrap();
    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens[0], Token::Num(2.0));
    assert!(matches!(tokens[1], Token::Op(op) if op.kind == OpKind::Mul));
    assert_eq!(tokens[2], Token::Paren(Paren::Open));
    assert_eq!(tokens[3], Token::Num(3.5));
    assert!(matches!(tokens[4], Token::Op(op) if op.kind == OpKind::Add));
    assert_eq!(tokens[5], Token::Num(4.0));
    assert_eq!(tokens[6], Token::Paren(Paren::Close));

    // both bracket flavors collapse to the same variants
    let round = tokenize("(1+2)", &ops).unwrap();
    let square = tokenize("[1+2]", &ops).unwrap();
    assert_eq!(round, square);

    assert_eq!(tokenize("", &ops), Err(ExprError::EmptyExpression));
    assert_eq!(tokenize("abc", &ops), Err(ExprError::UnknownToken));
    assert_eq!(tokenize("$", &ops), Err(ExprError::UnknownToken));
    assert_eq!(tokenize("1 + ä", &ops), Err(ExprError::UnknownToken));

    // whitespace alone is not an empty expression, it scans to no tokens
    assert_eq!(tokenize(" \t\r\n", &ops).unwrap().len(), 0);
}

#[test]
fn test_tokenize_numbers() {
    let ops = make_operators::<f64>();
    let num = |text: &str| match tokenize(text, &ops).unwrap()[0] {
        Token::Num(n) => n,
        _ => unreachable!(),
    };
    assert_eq!(num("10.0"), 10.0);
    assert_eq!(num("1."), 1.0);
    assert_eq!(num(".5"), 0.5);
    assert_eq!(num("0.5E1"), 5.0);
    assert_eq!(num("1.0e2"), 100.0);
    assert_eq!(num("2.5e-3"), 0.0025);
    assert_eq!(num("7e+1"), 70.0);

    // a bare dot matches nothing
    assert_eq!(tokenize(".", &ops), Err(ExprError::UnknownToken));
    // the exponent marker without digits ends the literal, the marker itself
    // then fails as an unknown token
    assert_eq!(tokenize("1e+", &ops), Err(ExprError::UnknownToken));
    assert_eq!(tokenize("2e*3", &ops), Err(ExprError::UnknownToken));
}

#[test]
fn test_tokenize_sign_resolution() {
    assert_eq!(kinds_of("-10.0").unwrap(), vec![OpKind::UnaryMinus]);
    assert_eq!(kinds_of("+10.0").unwrap(), vec![OpKind::UnaryPlus]);
    assert_eq!(kinds_of("2-1").unwrap(), vec![OpKind::Sub]);
    assert_eq!(kinds_of("2+1").unwrap(), vec![OpKind::Add]);
    assert_eq!(
        kinds_of("-10.0/-2.0").unwrap(),
        vec![OpKind::UnaryMinus, OpKind::Div, OpKind::UnaryMinus]
    );
    assert_eq!(
        kinds_of("5--3").unwrap(),
        vec![OpKind::Sub, OpKind::UnaryMinus]
    );
    assert_eq!(
        kinds_of("(1)-2").unwrap(),
        vec![OpKind::Sub]
    );
    assert_eq!(
        kinds_of("(-1)").unwrap(),
        vec![OpKind::UnaryMinus]
    );
    assert_eq!(
        kinds_of("2^-3").unwrap(),
        vec![OpKind::Pow, OpKind::UnaryMinus]
    );
}

#[test]
fn test_tokenize_power_reprs() {
    // ** must not scan as two unary tokens of *
    assert_eq!(kinds_of("4**3.5").unwrap(), vec![OpKind::Pow]);
    assert_eq!(kinds_of("4^3.5").unwrap(), vec![OpKind::Pow]);
}
