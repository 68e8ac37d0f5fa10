use crate::operators::{OpAssoc, OpFun};
use crate::parser::{Paren, Token, TokenVec, N_TOKENS_ON_STACK};
use crate::{ExprError, ExprResult};
use smallvec::SmallVec;

/// Reorders an infix token sequence into reverse polish notation with the
/// shunting-yard algorithm. This stage only shuffles tokens around, no arithmetic
/// happens here.
///
/// # Errors
///
/// * [`UnmatchedBrackets`](ExprError::UnmatchedBrackets) if a closing bracket never
///   finds its open one or an open bracket is left on the stack at the end.
///
pub fn to_rpn<T: Copy>(tokens: TokenVec<T>) -> ExprResult<TokenVec<T>> {
    let mut output = TokenVec::<T>::new();
    let mut op_stack = TokenVec::<T>::new();
    for tok in tokens {
        match tok {
            Token::Num(_) => output.push(tok),
            Token::Paren(Paren::Open) => op_stack.push(tok),
            Token::Op(op) => {
                // stack tops binding tighter go to the output first; on equal
                // precedence only left-associative tops are popped, which makes
                // power and the unary operators nest to the right
                while let Some(&Token::Op(top)) = op_stack.last() {
                    if top.prio > op.prio || (top.prio == op.prio && top.assoc == OpAssoc::Left) {
                        output.push(Token::Op(top));
                        op_stack.pop();
                    } else {
                        break;
                    }
                }
                op_stack.push(tok);
            }
            Token::Paren(Paren::Close) => loop {
                match op_stack.pop() {
                    Some(Token::Paren(Paren::Open)) => break,
                    Some(stacked) => output.push(stacked),
                    None => return Err(ExprError::UnmatchedBrackets),
                }
            },
        }
    }
    while let Some(stacked) = op_stack.pop() {
        if let Token::Paren(_) = stacked {
            return Err(ExprError::UnmatchedBrackets);
        }
        output.push(stacked);
    }
    Ok(output)
}

/// Reduces a token sequence in reverse polish notation to a single value. Binary
/// operators take the deeper of the two popped values as their left argument.
///
/// # Errors
///
/// * [`TooFewArguments`](ExprError::TooFewArguments) if an operator finds fewer values
///   than its arity requires or no value is left at the end,
/// * [`TooManyArguments`](ExprError::TooManyArguments) if more than one value is left
///   at the end, e.g., after two juxtaposed numbers,
/// * [`UnknownToken`](ExprError::UnknownToken) if a bracket shows up, which cannot
///   happen for sequences coming out of [`to_rpn`](to_rpn),
/// * everything an operator itself can fail with, e.g.,
///   [`DivideByZero`](ExprError::DivideByZero).
///
pub fn eval_rpn<T: Copy>(rpn: TokenVec<T>) -> ExprResult<T> {
    let mut value_stack = SmallVec::<[T; N_TOKENS_ON_STACK]>::new();
    for tok in rpn {
        match tok {
            Token::Num(n) => value_stack.push(n),
            Token::Op(op) => {
                let value = match op.fun {
                    OpFun::Unary(f) => {
                        let a = value_stack.pop().ok_or(ExprError::TooFewArguments)?;
                        f(a)?
                    }
                    OpFun::Binary(f) => {
                        let b = value_stack.pop().ok_or(ExprError::TooFewArguments)?;
                        let a = value_stack.pop().ok_or(ExprError::TooFewArguments)?;
                        f(a, b)?
                    }
                };
                value_stack.push(value);
            }
            Token::Paren(_) => return Err(ExprError::UnknownToken),
        }
    }
    match value_stack[..] {
        [value] => Ok(value),
        [] => Err(ExprError::TooFewArguments),
        _ => Err(ExprError::TooManyArguments),
    }
}
