use std::fmt;

use crate::interpreter::value::{core::Value, error_kind::ErrorKind};

/// An arithmetic operator recognized in operator position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
    /// `%`, with the sign of the dividend.
    Rem,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        };
        f.write_str(glyph)
    }
}

impl Operator {
    /// Looks up the operator named by a symbol.
    ///
    /// # Example
    /// ```
    /// use rlisp::interpreter::evaluator::arithmetic::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("%"), Some(Operator::Rem));
    /// assert_eq!(Operator::from_symbol("foo"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Rem),
            _ => None,
        }
    }

    /// Combines two integers.
    ///
    /// All arithmetic is checked: a zero divisor yields a division-by-zero
    /// error, and any result outside the `i64` range (including
    /// `i64::MIN / -1`) yields an invalid-number error.
    ///
    /// # Example
    /// ```
    /// use rlisp::interpreter::{
    ///     evaluator::arithmetic::Operator,
    ///     value::{core::Value, error_kind::ErrorKind},
    /// };
    ///
    /// assert_eq!(Operator::Sub.apply(10, 4), Value::Number(6));
    /// assert_eq!(Operator::Div.apply(-7, 2), Value::Number(-3));
    /// assert_eq!(Operator::Rem.apply(7, 0).error_kind(), Some(ErrorKind::DivByZero));
    /// assert_eq!(Operator::Add.apply(i64::MAX, 1).error_kind(), Some(ErrorKind::BadNumber));
    /// ```
    #[must_use]
    pub fn apply(self, lhs: i64, rhs: i64) -> Value {
        if matches!(self, Self::Div | Self::Rem) && rhs == 0 {
            return Value::error(ErrorKind::DivByZero);
        }

        let result = match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => lhs.checked_sub(rhs),
            Self::Mul => lhs.checked_mul(rhs),
            Self::Div => lhs.checked_div(rhs),
            Self::Rem => lhs.checked_rem(rhs),
        };

        result.map_or_else(|| {
                               Value::error_with(ErrorKind::BadNumber,
                                                 format!("integer overflow in ({self} {lhs} {rhs})"))
                           },
                           Value::Number)
    }
}
