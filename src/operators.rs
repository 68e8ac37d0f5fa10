use crate::{ExprError, ExprResult};
use num::Float;

/// Tolerance below which a divisor is treated as zero.
pub const ALMOST_ZERO: f64 = 1e-10;

/// Identity of an operator in the fixed operator set. Two tokens carry the same
/// operator exactly if their kinds are equal, e.g., `**` and `^` are both `Pow`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    UnaryMinus,
    UnaryPlus,
}

/// Decides how operators of equal precedence group, e.g., `-` is left-associative
/// such that `1-2-3 == (1-2)-3` and `^` is right-associative such that
/// `2^2^3 == 2^(2^3)`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum OpAssoc {
    Left,
    Right,
}

/// Concrete arithmetic of an operator. The variant carries the arity.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum OpFun<T: Copy> {
    Unary(fn(T) -> ExprResult<T>),
    Binary(fn(T, T) -> ExprResult<T>),
}

/// An operator of the fixed operator set.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Operator<T: Copy> {
    /// Representation of the operator in the string to be parsed, e.g., `**` or `-`.
    pub repr: &'static str,
    /// Symbolic identity of the operator.
    pub kind: OpKind,
    /// Operators with higher precedence bind tighter. Unary operators outrank all
    /// binary operators except that they share the precedence of the power operator.
    pub prio: i32,
    /// Associativity, relevant for stacking operators of equal precedence.
    pub assoc: OpAssoc,
    /// Function pointer implementing the arithmetic.
    pub fun: OpFun<T>,
}

impl<T: Copy> Operator<T> {
    /// Number of operands the operator consumes.
    pub fn arity(&self) -> usize {
        match self.fun {
            OpFun::Unary(_) => 1,
            OpFun::Binary(_) => 2,
        }
    }
}

/// Creates the fixed operator set. The order of the entries is the order in which the
/// tokenizer tries to match, so `**` has to come before `*` and the binary variants of
/// `+` and `-` have to come before the unary ones.
pub fn make_operators<T: Float>() -> Vec<Operator<T>> {
    vec![
        Operator {
            repr: "**",
            kind: OpKind::Pow,
            prio: 3,
            assoc: OpAssoc::Right,
            fun: OpFun::Binary(|a: T, b: T| Ok(a.powf(b))),
        },
        Operator {
            repr: "^",
            kind: OpKind::Pow,
            prio: 3,
            assoc: OpAssoc::Right,
            fun: OpFun::Binary(|a: T, b: T| Ok(a.powf(b))),
        },
        Operator {
            repr: "*",
            kind: OpKind::Mul,
            prio: 2,
            assoc: OpAssoc::Left,
            fun: OpFun::Binary(|a: T, b: T| Ok(a * b)),
        },
        Operator {
            repr: "/",
            kind: OpKind::Div,
            prio: 2,
            assoc: OpAssoc::Left,
            fun: OpFun::Binary(|a: T, b: T| {
                if b.abs() < T::from(ALMOST_ZERO).ok_or(ExprError::Error)? {
                    Err(ExprError::DivideByZero)
                } else {
                    Ok(a / b)
                }
            }),
        },
        Operator {
            repr: "+",
            kind: OpKind::Add,
            prio: 1,
            assoc: OpAssoc::Left,
            fun: OpFun::Binary(|a: T, b: T| Ok(a + b)),
        },
        Operator {
            repr: "-",
            kind: OpKind::Sub,
            prio: 1,
            assoc: OpAssoc::Left,
            fun: OpFun::Binary(|a: T, b: T| Ok(a - b)),
        },
        Operator {
            repr: "-",
            kind: OpKind::UnaryMinus,
            prio: 3,
            assoc: OpAssoc::Right,
            fun: OpFun::Unary(|a: T| Ok(-a)),
        },
        Operator {
            repr: "+",
            kind: OpKind::UnaryPlus,
            prio: 3,
            assoc: OpAssoc::Right,
            fun: OpFun::Unary(|a: T| Ok(a)),
        },
    ]
}
