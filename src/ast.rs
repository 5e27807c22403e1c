use std::rc::Rc;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constant values that can appear directly in
/// source code: numbers, quoted strings, `True`/`False` and function
/// literals.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A quoted string literal, without its quotes.
    Str(String),
    /// A boolean literal value: `True` or `False`.
    Bool(bool),
    /// A function literal: `Function(x, y) { ... }`.
    Function(Rc<FunctionDef>),
}

/// A parsed program: the ordered top-level statements of one source text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// A brace-delimited sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the braces.
    pub statements: Vec<Statement>,
    /// Line of the opening brace.
    pub line:       usize,
}

/// A user-defined function: parameter names and a body.
///
/// Functions have no name of their own; they are values and get bound to
/// names by ordinary assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The body executed when the function is called.
    pub body:   Block,
    /// Line of the `Function` keyword.
    pub line:   usize,
    /// The imported file the function was written in; `None` for source
    /// handed to the interpreter directly.
    pub file:   Option<String>,
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean, function).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`+x`, `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// An arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A comparison. At most one per expression.
    Comparison {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    ComparisonOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Call expression (e.g. `f(1, 2)` or `f()()`).
    Call {
        /// The expression producing the function.
        callee:    Box<Self>,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Table indexing expression (e.g., `t["k"]`).
    Index {
        /// The table to index into.
        base: Box<Self>,
        /// The key to look up.
        key:  Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Table literal expression (e.g., `[1: "a", "b": True]`).
    TableLiteral {
        /// Key/value expression pairs in source order.
        entries: Vec<(Self, Self)>,
        /// Line number in the source code.
        line:    usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use quill::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Comparison { line, .. }
            | Self::Call { line, .. }
            | Self::Index { line, .. }
            | Self::TableLiteral { line, .. } => *line,
        }
    }
}

/// Represents a statement.
///
/// Every statement, top-level or inside a block, is terminated by `;`.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `target = value`: binds in the current scope, or writes a table slot.
    Assign {
        /// An identifier or an index expression.
        target: Expr,
        /// The value which is being assigned.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// `target =& value`: rebinds a name in an enclosing scope, or writes a
    /// table slot.
    RefAssign {
        /// An identifier or an index expression.
        target: Expr,
        /// The value which is being assigned.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// A bare `{ ... }` block.
    Block(Block),
    /// `Get "file"`, with the file's program parsed in place.
    Import {
        /// The file name as written.
        file:    String,
        /// The parsed contents of the file.
        program: Program,
        /// Line number in the source code.
        line:    usize,
    },
    /// `If (condition) { ... } Else { ... }`.
    If {
        /// The condition; must evaluate to a boolean.
        condition:  Expr,
        /// Block executed when the condition holds.
        then_block: Block,
        /// Optional block executed otherwise.
        else_block: Option<Block>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `Loop (condition) { ... }`.
    Loop {
        /// Checked before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// `Return value`.
    Return {
        /// The returned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents an arithmetic binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (e.g. `+x`); checks that `x` is a number.
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}
