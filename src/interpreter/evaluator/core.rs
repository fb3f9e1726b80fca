use tracing::{debug, trace};

use crate::{
    config::Config,
    interpreter::{
        evaluator::arithmetic::Operator,
        value::{core::Value, error_kind::ErrorKind},
    },
};

/// Reduces value trees to a number or an error.
///
/// The evaluator never mutates its input; every call returns a fresh,
/// independently owned value. It carries the nesting limit from the
/// [`Config`] and counts how many nodes it has visited, which makes
/// short-circuiting observable.
///
/// ## Usage
///
/// One `Evaluator` may be reused across inputs; only the visit counter
/// accumulates.
#[derive(Debug, Clone)]
pub struct Evaluator {
    /// Deepest expression nesting that will be evaluated.
    max_depth: usize,
    /// Number of nodes visited so far.
    evaluated: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Evaluates a value with the default configuration.
///
/// # Example
/// ```
/// use rlisp::interpreter::{evaluator::core::evaluate, value::core::Value};
///
/// let expr = Value::Expression(vec![Value::symbol("+"),
///                                   Value::Number(1),
///                                   Value::Expression(vec![Value::symbol("*"),
///                                                          Value::Number(2),
///                                                          Value::Number(3)])]);
/// assert_eq!(evaluate(&expr), Value::Number(7));
/// ```
#[must_use]
pub fn evaluate(value: &Value) -> Value {
    Evaluator::default().eval(value)
}

impl Evaluator {
    /// Creates an evaluator using the nesting limit from `config`.
    #[must_use]
    pub const fn new(config: &Config) -> Self {
        Self { max_depth: config.max_depth,
               evaluated: 0, }
    }

    /// How many nodes have been visited since this evaluator was created.
    #[must_use]
    pub const fn evaluated(&self) -> usize {
        self.evaluated
    }

    /// Evaluates a value.
    ///
    /// - Numbers and errors are returned unchanged.
    /// - A bare symbol is malformed.
    /// - An expression is reduced by [`Self::eval_sexpr`].
    ///
    /// The result is always a `Value::Number` or a `Value::Error`.
    pub fn eval(&mut self, value: &Value) -> Value {
        self.eval_at(value, 1)
    }

    /// Evaluates a built program root.
    ///
    /// A root holding exactly one item evaluates that item. Any other root is
    /// itself evaluated as an expression whose children are the top-level
    /// items. Either way the top-level items sit at nesting level one, the
    /// same level the parser gives them, so input the parser accepts is
    /// never cut off here.
    ///
    /// # Example
    /// ```
    /// use rlisp::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let bare = Value::Expression(vec![Value::symbol("+"), Value::Number(1), Value::Number(2)]);
    /// assert_eq!(Evaluator::default().eval_program(&bare), Value::Number(3));
    ///
    /// let wrapped = Value::Expression(vec![bare]);
    /// assert_eq!(Evaluator::default().eval_program(&wrapped), Value::Number(3));
    /// ```
    pub fn eval_program(&mut self, root: &Value) -> Value {
        match root.children() {
            [only] => self.eval_at(only, 1),
            _ => self.eval_at(root, 0),
        }
    }

    /// Evaluates `value`, which sits at nesting level `level` if it is an
    /// expression.
    fn eval_at(&mut self, value: &Value, level: usize) -> Value {
        self.evaluated += 1;

        match value {
            Value::Number(n) => Value::Number(*n),
            Value::Error { .. } => value.clone(),
            Value::Symbol(symbol) => {
                Value::error_with(ErrorKind::Malformed,
                                  format!("symbol '{symbol}' is not a value"))
            },
            Value::Expression(children) => {
                if level > self.max_depth {
                    debug!(max_depth = self.max_depth, "nesting limit exceeded");
                    return Value::error_with(ErrorKind::Malformed,
                                             format!("maximum nesting depth of {} exceeded",
                                                     self.max_depth));
                }
                self.eval_sexpr(children, level)
            },
        }
    }

    /// Reduces `(op a1 a2 ... an)` by folding the operands left to right.
    ///
    /// The first operand becomes the accumulator. Each further operand is
    /// evaluated and combined with it using `op`. The first error met, either
    /// in an operand or produced by a combination, ends the fold and becomes
    /// the result; later operands are never evaluated.
    ///
    /// With a single operand nothing is combined, so the operator is never
    /// applied: `(- 5)` is `5`, not `-5`.
    ///
    /// # Parameters
    /// - `children`: The expression's children, operator first.
    /// - `level`: Nesting level of the expression.
    ///
    /// # Returns
    /// A number, or one of:
    /// - `Malformed` if there are no children, the first child is not a
    ///   symbol, or the operator has no operands.
    /// - `BadOperator` if a combination is needed and the symbol names no
    ///   operator.
    /// - `DivByZero` or `BadNumber` from the arithmetic itself.
    /// - Any error found among the operands, unchanged.
    fn eval_sexpr(&mut self, children: &[Value], level: usize) -> Value {
        let Some((head, operands)) = children.split_first() else {
            return Value::error_with(ErrorKind::Malformed, "empty expression");
        };
        let Value::Symbol(symbol) = head else {
            return Value::error_with(ErrorKind::Malformed,
                                     "expression does not start with an operator");
        };
        let Some((first, rest)) = operands.split_first() else {
            return Value::error_with(ErrorKind::Malformed,
                                     format!("operator '{symbol}' has no operands"));
        };

        let operator = Operator::from_symbol(symbol);
        let mut acc = self.eval_at(first, level + 1);

        for operand in rest {
            if acc.is_error() {
                break;
            }
            let rhs = self.eval_at(operand, level + 1);
            if rhs.is_error() {
                acc = rhs;
                break;
            }

            acc = match (acc.as_number(), rhs.as_number(), operator) {
                (Some(l), Some(r), Some(op)) => {
                    trace!(%op, lhs = l, rhs = r, "combining");
                    op.apply(l, r)
                },
                (Some(_), Some(_), None) => {
                    Value::error_with(ErrorKind::BadOperator,
                                      format!("'{symbol}' is not an operator"))
                },
                _ => Value::error_with(ErrorKind::Malformed, "operand did not reduce to a number"),
            };
        }

        if let Some(kind) = acc.error_kind() {
            debug!(%kind, %symbol, "expression reduced to an error");
        }
        acc
    }
}
