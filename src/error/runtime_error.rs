#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A math function was applied outside its domain.
    ArithmeticDomain {
        /// Description of the violated domain constraint.
        details: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call referred to a function missing from the function table.
    UndefinedFunction {
        /// The missing function name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A user function was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The called function name.
        name: String,
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments the call supplied.
        found: usize,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArithmeticDomain { details, line } => {
                write!(f, "Error on line {line}: {details}")
            }

            Self::UndefinedFunction { name, line } => {
                write!(f, "Error on line {line}: Undefined function '{name}'.")
            }

            Self::ArgumentCountMismatch {
                name,
                expected,
                found,
                line,
            } => {
                write!(
                    f,
                    "Error on line {line}: Function '{name}' takes {expected} argument(s) but {found} were given."
                )
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
