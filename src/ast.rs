use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children exclusively and carries the byte offset of
/// the token it was built from, so that errors can point back into the
/// source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal in any of the supported bases.
    Number {
        /// The literal value.
        value:  f64,
        /// Byte offset in the source.
        offset: usize,
    },
    /// A binary operation such as `a + b` or `a << b`.
    BinaryOp {
        /// The operator.
        op:     BinaryOperator,
        /// Left operand.
        left:   Box<Self>,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator.
        offset: usize,
    },
    /// A call to a named builtin (e.g. `gcd(12, 18)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
        /// Byte offset of the function name.
        offset:    usize,
    },
}

impl Expr {
    /// Returns the byte offset where this expression starts in the source.
    ///
    /// # Returns
    /// The offset stored in the node.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Number { offset, .. }
            | Self::BinaryOp { offset, .. }
            | Self::FunctionCall { offset, .. } => *offset,
        }
    }
}

/// Renders the expression in fully parenthesized infix form.
///
/// Parsing the rendered text yields a tree that evaluates to the same value.
///
/// # Example
/// ```
/// use multicalc::parse;
///
/// let expr = parse("3 + 4 * gcd(12, 18)").unwrap();
/// assert_eq!(expr.to_string(), "(3 + (4 * gcd(12, 18)))");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::BinaryOp { op, left, right, .. } => write!(f, "({left} {op} {right})"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Represents a binary operator.
///
/// All operators are left-associative. Their binding strength follows
/// [`BinaryOperator::precedence`], which differs from C: shifts bind loosest
/// and `|` binds tightest.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating-point remainder (`%`)
    Rem,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Arithmetic right shift (`>>`)
    ShiftRight,
    /// `~` used in binary position. Parses, but has no evaluation rule.
    Tilde,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator; higher binds tighter.
    ///
    /// | Operators      | Precedence |
    /// |----------------|------------|
    /// | `~`            | 0          |
    /// | `<<` `>>`      | 1          |
    /// | `+` `-`        | 2          |
    /// | `*` `/` `%`    | 3          |
    /// | `&`            | 4          |
    /// | `^`            | 5          |
    /// | `\|`           | 6          |
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Tilde => 0,
            Self::ShiftLeft | Self::ShiftRight => 1,
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div | Self::Rem => 3,
            Self::BitAnd => 4,
            Self::BitXor => 5,
            Self::BitOr => 6,
        }
    }

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Tilde => "~",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
