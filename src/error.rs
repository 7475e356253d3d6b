/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unknown symbols, syntax mistakes, invalid
/// parameter or variable names, and malformed matrix literals — everything
/// detected before semantic analysis.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// domain violations of the math functions, calls of functions that vanished
/// from the table, and argument-count mismatches.
pub mod runtime_error;
/// Semantic errors.
///
/// Defines the errors raised by the analysis pass that runs between parsing
/// and evaluation: undefined or duplicated functions and out-of-scope
/// variables.
pub mod semantic_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;

/// Any error produced by the interpreter pipeline.
///
/// Wraps the per-stage error enums so the public entry point can return a
/// single error type. The first error aborts the run; errors are never
/// aggregated.
#[derive(Debug)]
pub enum Error {
    /// An error raised while lexing or parsing.
    Parse(ParseError),
    /// An error raised by the semantic analysis pass.
    Semantic(SemanticError),
    /// An error raised during evaluation.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Semantic(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<SemanticError> for Error {
    fn from(value: SemanticError) -> Self {
        Self::Semantic(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}
