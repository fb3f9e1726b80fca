use std::fmt;

/// Why an expression failed to produce a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A literal failed to parse, or arithmetic left the `i64` range.
    BadNumber,
    /// Division or remainder by zero.
    DivByZero,
    /// The operator symbol names no known operation.
    BadOperator,
    /// The expression has the wrong shape: empty, no operator in first
    /// position, a bare symbol in value position, or nested too deeply.
    Malformed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadNumber => "BadNumber",
            Self::DivByZero => "DivByZero",
            Self::BadOperator => "BadOperator",
            Self::Malformed => "Malformed",
        };
        f.write_str(name)
    }
}
