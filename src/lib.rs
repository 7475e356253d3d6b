//! # mrog
//!
//! mrog is an interpreter for a small mathematical scripting language.
//! A script defines named functions over the variables `x`, `y` and `z` and
//! prints evaluated results, including numeric derivatives, matrices, and
//! symbolic expansions of calls that cannot be reduced to numbers.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::Evaluator,
        lexer::{LexerExtras, Token},
        parser::statement::parse_program,
        semantic::SemanticAnalyzer,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser, checked by the semantic analyzer, and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source locations to AST nodes for error reporting.
/// - Carries per-statement usage metadata for the semantic pass.
pub mod ast;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// analyzing, or evaluating code. It standardizes error reporting and carries
/// detailed information about failures, including source lines.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, analyzer, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports standard error handling traits via a top-level `Error` type.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together lexing, parsing, semantic analysis, evaluation,
/// value representations, and error handling to provide a complete runtime
/// for scripts.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, analyzer, evaluator.
/// - Provides entry points for interpreting user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Interprets a complete script and returns its printed output lines.
///
/// The source is lexed, parsed, checked, and evaluated in that order; the
/// stages never call backwards, and the first error from any stage aborts
/// the run.
///
/// # Errors
/// Returns the first [`Error`] raised by any pipeline stage.
///
/// # Examples
/// ```
/// use mrog::interpret;
///
/// let lines = interpret("f(x) = x ^ 2 + 1\nprint(f(3))").unwrap();
/// assert_eq!(lines, vec!["f(3) = 10".to_string()]);
///
/// // 'g' is never defined.
/// assert!(interpret("print(g(1))").is_err());
/// ```
pub fn interpret(source: &str) -> Result<Vec<String>, Error> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            return Err(ParseError::UnknownSymbol {
                symbol: lexer.slice().to_string(),
                line: lexer.extras.line,
            }
            .into());
        }
    }

    let program = parse_program(&tokens)?;
    let functions = SemanticAnalyzer::new().analyze(&program)?;
    let lines = Evaluator::new(functions).run(&program)?;
    Ok(lines)
}
