#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer encountered a character outside the language's alphabet.
    UnknownSymbol {
        /// The offending text.
        symbol: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A required token was missing or a different token appeared instead.
    InvalidSyntax {
        /// Description of the expected token.
        expected: String,
        /// Description of the token found.
        found: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A name outside the variable alphabet `{x, y, z}` appeared where a
    /// variable was required.
    InvalidVariable {
        /// The offending name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A reserved function name was used where an identifier was required.
    InvalidIdentifier {
        /// The reserved name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function parameter was not a legal, distinct variable name.
    InvalidArgument {
        /// The function being defined.
        function: String,
        /// The offending parameter name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable inside a function body is not one of its parameters.
    InvalidExpressionVariable {
        /// The function being defined.
        function: String,
        /// The out-of-scope variable.
        variable: String,
        /// The declared parameters, comma-separated.
        expected: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `print` directive received no argument or more than one.
    InvalidPrintArgument {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The rows of a matrix literal have differing lengths.
    RaggedMatrix {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSymbol { symbol, line } => {
                write!(f, "Error on line {line}: Unknown symbol '{symbol}'.")
            }

            Self::InvalidSyntax {
                expected,
                found,
                line,
            } => {
                write!(
                    f,
                    "Error on line {line}: Invalid syntax. Expected {expected} but found {found}."
                )
            }

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            }

            Self::InvalidVariable { name, line } => {
                write!(
                    f,
                    "Error on line {line}: Invalid variable '{name}'. Variables must be one of x, y, z."
                )
            }

            Self::InvalidIdentifier { name, line } => {
                write!(
                    f,
                    "Error on line {line}: Invalid identifier. '{name}' is a reserved function name."
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

            Self::InvalidPrintArgument { line } => {
                write!(
                    f,
                    "Error on line {line}: print takes exactly one argument."
                )
            }

            Self::RaggedMatrix { line } => {
                write!(
                    f,
                    "Error on line {line}: Matrix rows must all have the same length."
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
