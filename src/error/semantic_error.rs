#[derive(Debug)]
/// Represents all errors raised by the semantic analysis pass.
pub enum SemanticError {
    /// A statement referred to a function that has not been defined yet.
    UndefinedFunction {
        /// The missing function name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function body referred to a variable outside its parameter list.
    InvalidExpressionVariable {
        /// The function being checked.
        function: String,
        /// The out-of-scope variable.
        variable: String,
        /// The declared parameters, comma-separated.
        expected: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function parameter was not a legal, distinct variable name.
    InvalidArgument {
        /// The function being checked.
        function: String,
        /// The offending parameter name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function name was defined more than once.
    DuplicateDefinition {
        /// The redefined function name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedFunction { name, line } => {
                write!(f, "Error on line {line}: Undefined function '{name}'.")
            }

            Self::InvalidExpressionVariable {
                function,
                variable,
                expected,
                line,
            } => {
                write!(
                    f,
                    "Error on line {line}: Invalid variable '{variable}' in body of '{function}'. Expected one of: {expected}."
                )
            }

            Self::InvalidArgument {
                function,
                name,
                line,
            } => {
                write!(
                    f,
                    "Error on line {line}: Invalid argument '{name}' in definition of '{function}'. Parameters must be distinct names from x, y, z."
                )
            }

            Self::DuplicateDefinition { name, line } => {
                write!(
                    f,
                    "Error on line {line}: Function '{name}' is already defined."
                )
            }
        }
    }
}

impl std::error::Error for SemanticError {}
