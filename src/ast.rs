/// A binary arithmetic operator.
///
/// `Operator` is the closed set of operations the calculator supports. The
/// parser produces one of these from the middle token of the expression; any
/// other symbol in operator position is rejected before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition, written `+`.
    Add,
    /// Subtraction, written `-`.
    Sub,
    /// Multiplication, written `*`.
    Mul,
    /// Truncating integer division, written `/`.
    Div,
}

impl Operator {
    /// Returns the source symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The numeral system an operand was written in.
///
/// Both operands of an expression must share one notation; the parser rejects
/// mixed expressions. The formatter uses the shared notation to decide how
/// the result is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// A Roman numeral built from the symbols `I V X L C D M`.
    Roman,
    /// A decimal integer built from ASCII digits.
    Decimal,
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Roman => write!(f, "Roman"),
            Self::Decimal => write!(f, "decimal"),
        }
    }
}

/// A parsed operand: its integer value and the notation it was written in.
///
/// Roman numerals are converted to their integer value at parse time, so the
/// evaluator only ever sees `i64` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// The integer value of the operand.
    pub value:    i64,
    /// The notation the operand was written in.
    pub notation: Notation,
}

/// A complete two-operand infix expression.
///
/// This is the whole syntax tree of the calculator: one operator applied to
/// two operands of the same notation. It is built by the parser and consumed
/// once by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    /// Left operand.
    pub left:     Operand,
    /// The operator between the operands.
    pub operator: Operator,
    /// Right operand.
    pub right:    Operand,
}

impl Expression {
    /// Returns the notation shared by both operands.
    ///
    /// The parser guarantees both operands agree, so the left operand's
    /// notation is the expression's notation.
    #[must_use]
    pub const fn notation(&self) -> Notation {
        self.left.notation
    }
}
