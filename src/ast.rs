use std::collections::BTreeSet;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all expression forms: numeric literals, variable references,
/// arithmetic, calls of built-in or user functions, derivative calls,
/// factorials, and matrix literals. Each variant carries its source location.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// The operator.
        op: BinaryOperator,
        /// Left operand.
        left: Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Function call expression (e.g. `sin(x)` or `f(3)`).
    Call {
        /// Name of the function being called.
        name: String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Derivative call expression (e.g. `f'(2)`).
    Derivative {
        /// Name of the function being differentiated.
        name: String,
        /// The evaluation point, one argument per parameter.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Postfix factorial (e.g. `5!`).
    Factorial {
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Matrix literal expression (e.g. `[[1, 2], [3, 4]]`).
    MatrixLiteral {
        /// The rows of the matrix; all rows have the same length.
        rows: Vec<Vec<Self>>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use mrog::ast::Expr;
    ///
    /// let expr = Expr::Variable {
    ///     name: "x".to_string(),
    ///     line: 5,
    /// };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Call { line, .. }
            | Self::Derivative { line, .. }
            | Self::Factorial { line, .. }
            | Self::MatrixLiteral { line, .. } => *line,
        }
    }
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
    /// Exponentiation (`^`)
    Pow,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

/// Represents a user-defined function definition.
///
/// A function binds an ordered list of distinct parameter names, drawn from
/// `{x, y, z}`, to an expression body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name: String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body: Expr,
    /// Line number in the source code.
    pub line: usize,
}

/// Usage metadata recorded by the parser for a single statement.
///
/// The semantic analyzer consumes this record instead of re-walking the AST:
/// it lists every variable referenced and every user function called inside
/// the statement. Ordered sets keep the resulting diagnostics deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatementMeta {
    /// Names of variables referenced in the statement.
    pub variables_used: BTreeSet<String>,
    /// Names of user functions called in the statement.
    pub functions_called: BTreeSet<String>,
}

/// Represents a top-level statement.
///
/// Statements are the units parsed from input lines: one statement per
/// physical line, either a function definition or a print directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A user-defined function declaration.
    Function {
        /// The function being defined.
        def: FunctionDef,
        /// Usage metadata recorded while parsing the body.
        meta: StatementMeta,
    },
    /// A `print(...)` directive.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Usage metadata recorded while parsing the argument.
        meta: StatementMeta,
        /// Line number in the source code.
        line: usize,
    },
}
