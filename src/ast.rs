/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The tree is closed over three shapes: numeric literals, prefix operations
/// and infix operations. Every node owns its children exclusively and carries
/// the character position in the source where the node begins, which is used
/// for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3`, `2.5` or `.5`.
    Number {
        /// The literal value.
        value:    f64,
        /// Character position in the source.
        position: usize,
    },
    /// A prefix operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Character position of the operator in the source.
        position: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Character position of the operator in the source.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use ferrocalc::ast::Expr;
    ///
    /// let expr = Expr::Number { value:    1.0,
    ///                           position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// Renders the tree as a fully parenthesised prefix form.
///
/// ```
/// use ferrocalc::{parse, tokenize};
///
/// let ast = parse(&tokenize("-2 ^ 2 + 1").unwrap()).unwrap();
/// assert_eq!(ast.to_string(), "(+ (^ (neg 2) 2) 1)");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({op} {left} {right})"),
        }
    }
}

/// Grouping direction for a chain of operators that share a precedence level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Represents a binary operator.
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
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator.
    ///
    /// | Operators   | Level |
    /// |-------------|-------|
    /// | `+` `-`     | 1     |
    /// | `*` `/` `%` | 2     |
    /// | `^`         | 3     |
    ///
    /// # Example
    /// ```
    /// use ferrocalc::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert!(BinaryOperator::Pow.precedence() > BinaryOperator::Mod.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Pow => 3,
        }
    }

    /// Returns how chains of this operator are grouped. Only `^` is
    /// right-associative.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Identity (e.g. `+x`). The parser folds unary plus away, but trees built
    /// by hand may still contain it.
    Plus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "neg"),
            Self::Plus => write!(f, "pos"),
        }
    }
}
