use crate::interpreter::value::error_kind::ErrorKind;

/// Represents a value in the interpreter.
///
/// A value is a tree: numbers, symbols and errors are leaves, and an
/// expression owns its children outright. Appending a child moves it into
/// its parent, and dropping a value drops every node beneath it exactly once,
/// so no node is ever reachable from two owners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Number(i64),
    /// An operator glyph such as `+`, or any other atom text.
    Symbol(String),
    /// A failed computation, with an optional human-readable detail.
    Error {
        /// What went wrong.
        kind:   ErrorKind,
        /// Extra context for diagnostics; never shown by the printer.
        detail: Option<String>,
    },
    /// An ordered list of owned child values. Order is significant: the first
    /// child is the operator and the rest are operands, left to right.
    Expression(Vec<Self>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(v)
    }
}

impl From<ErrorKind> for Value {
    fn from(kind: ErrorKind) -> Self {
        Self::error(kind)
    }
}

impl From<Vec<Self>> for Value {
    fn from(children: Vec<Self>) -> Self {
        Self::Expression(children)
    }
}

impl Value {
    /// Creates an error value without detail.
    #[must_use]
    pub const fn error(kind: ErrorKind) -> Self {
        Self::Error { kind,
                      detail: None }
    }

    /// Creates an error value with a diagnostic detail.
    pub fn error_with(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self::Error { kind,
                      detail: Some(detail.into()) }
    }

    /// Creates a symbol value.
    pub fn symbol(text: impl Into<String>) -> Self {
        Self::Symbol(text.into())
    }

    /// Creates an empty expression, ready to receive children.
    #[must_use]
    pub const fn expression() -> Self {
        Self::Expression(Vec::new())
    }

    /// Appends `child`, taking ownership of it.
    ///
    /// Only expressions own children, so pushing onto a leaf leaves the leaf
    /// untouched and returns `false`; `child` is dropped.
    ///
    /// # Example
    /// ```
    /// use rlisp::interpreter::value::core::Value;
    ///
    /// let mut expr = Value::expression();
    /// assert!(expr.push(Value::symbol("+")));
    /// assert!(expr.push(Value::Number(1)));
    /// assert_eq!(expr, Value::Expression(vec![Value::symbol("+"), Value::Number(1)]));
    ///
    /// let mut leaf = Value::Number(3);
    /// assert!(!leaf.push(Value::Number(4)));
    /// ```
    pub fn push(&mut self, child: Self) -> bool {
        match self {
            Self::Expression(children) => {
                children.push(child);
                true
            },
            _ => false,
        }
    }

    /// Returns `true` if the value is an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Returns the error kind, if the value is an error.
    #[must_use]
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Error { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns the integer, if the value is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the children of an expression, or an empty slice for leaves.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Expression(children) => children,
            _ => &[],
        }
    }

    /// Counts every node in the tree, including this one.
    ///
    /// # Example
    /// ```
    /// use rlisp::interpreter::value::core::Value;
    ///
    /// let tree = Value::Expression(vec![Value::symbol("+"),
    ///                                   Value::Number(1),
    ///                                   Value::Expression(vec![Value::symbol("-")])]);
    /// assert_eq!(tree.node_count(), 5);
    /// ```
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Self::node_count).sum::<usize>()
    }

    /// Nesting depth: zero for leaves, one more than the deepest child for
    /// expressions.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Expression(children) => {
                1 + children.iter().map(Self::depth).max().unwrap_or(0)
            },
            _ => 0,
        }
    }
}
