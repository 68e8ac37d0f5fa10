use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// This will be thrown at you if an expression could not be evaluated. Ok, obviously it
/// is not an exception, so thrown needs to be understood figuratively. The set of kinds
/// is closed, nothing else can escape the crate.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum ExprError {
    /// Internal defect without a more specific kind, e.g., a hole in the operator table.
    Error,
    /// Division with a divisor closer to zero than the tolerance.
    DivideByZero,
    /// The input string was empty before scanning even started.
    EmptyExpression,
    /// The rest of the input matches none of the token patterns.
    UnknownToken,
    /// A closing bracket without an open one or the other way around.
    UnmatchedBrackets,
    /// An operator found fewer values on the stack than its arity requires.
    TooFewArguments,
    /// More than one value was left after all operators were applied.
    TooManyArguments,
}

impl Display for ExprError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", get_status_string(Status::from(*self)))
    }
}
impl Error for ExprError {}

/// Exprparse' result type with [`ExprError`](ExprError) as error type.
pub type ExprResult<U> = Result<U, ExprError>;

/// Outcome kind of an evaluation, i.e., [`ExprError`](ExprError) extended by `Success`.
/// This is what collaborators such as the REPL report to the user.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum Status {
    Success,
    Error,
    DivideByZero,
    EmptyExpression,
    UnknownToken,
    UnmatchedBrackets,
    TooFewArguments,
    TooManyArguments,
}

impl From<ExprError> for Status {
    fn from(e: ExprError) -> Self {
        match e {
            ExprError::Error => Status::Error,
            ExprError::DivideByZero => Status::DivideByZero,
            ExprError::EmptyExpression => Status::EmptyExpression,
            ExprError::UnknownToken => Status::UnknownToken,
            ExprError::UnmatchedBrackets => Status::UnmatchedBrackets,
            ExprError::TooFewArguments => Status::TooFewArguments,
            ExprError::TooManyArguments => Status::TooManyArguments,
        }
    }
}

impl<U> From<&ExprResult<U>> for Status {
    fn from(res: &ExprResult<U>) -> Self {
        match res {
            Ok(_) => Status::Success,
            Err(e) => Status::from(*e),
        }
    }
}

/// Returns the fixed human-readable name of a status.
pub fn get_status_string(status: Status) -> &'static str {
    match status {
        Status::Success => "Success",
        Status::Error => "Error",
        Status::DivideByZero => "Divide by zero",
        Status::EmptyExpression => "Empty input expression",
        Status::UnknownToken => "Unrecognized token",
        Status::UnmatchedBrackets => "Brackets not matched",
        Status::TooFewArguments => "Not enough arguments found for operator",
        Status::TooManyArguments => "Too many arguments found for operator",
    }
}

#[cfg(test)]
mod tests {
    use super::{get_status_string, ExprError, ExprResult, Status};

    #[test]
    fn test_status_from_result() {
        let ok: ExprResult<f64> = Ok(1.0);
        assert_eq!(Status::from(&ok), Status::Success);
        let err: ExprResult<f64> = Err(ExprError::DivideByZero);
        assert_eq!(Status::from(&err), Status::DivideByZero);
    }

    #[test]
    fn test_display_matches_status_string() {
        let e = ExprError::UnmatchedBrackets;
        assert_eq!(
            format!("{}", e),
            get_status_string(Status::UnmatchedBrackets)
        );
    }

    #[test]
    fn test_status_strings_are_distinct() {
        let all = [
            Status::Success,
            Status::Error,
            Status::DivideByZero,
            Status::EmptyExpression,
            Status::UnknownToken,
            Status::UnmatchedBrackets,
            Status::TooFewArguments,
            Status::TooManyArguments,
        ];
        for (i, s1) in all.iter().enumerate() {
            for s2 in all.iter().skip(i + 1) {
                assert_ne!(get_status_string(*s1), get_status_string(*s2));
            }
        }
    }
}
