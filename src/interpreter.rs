/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST of each statement, applies arithmetic and the
/// built-in math functions, expands user function calls, computes numeric
/// derivatives, and renders the output of `print` directives.
///
/// # Responsibilities
/// - Evaluates expressions to `Scalar`, `Matrix` or `Symbolic` values.
/// - Binds call arguments to parameters in a fresh environment per call.
/// - Reports runtime errors such as domain violations of `sqrt` or `ln`.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, a
/// reserved function name, an identifier, an operator, or a delimiter. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line information.
/// - Classifies alphabetic runs as reserved names before identifiers.
/// - Skips whitespace and `#` comments; rejects unknown symbols.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST of statements: function definitions and print directives. It uses a
/// single token of lookahead and never backtracks.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and parameter names, reporting errors with location.
/// - Records per-statement usage metadata for the semantic pass.
pub mod parser;
/// The semantic module checks the parsed program for consistency.
///
/// Runs after a complete parse and before evaluation: it verifies that every
/// variable used in a function body is a declared parameter, that every
/// called function is defined earlier in the program, and that no function is
/// defined twice. On success it hands the function table to the evaluator.
pub mod semantic;
/// Reserved names of the language.
///
/// Fixed tables of the built-in trigonometric and math function names and the
/// variable alphabet, with membership helpers used across the pipeline.
pub mod symbols;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum used during execution: scalar floats, numeric
/// matrices, and symbolic text for expressions that cannot be reduced to a
/// number.
pub mod value;
