/// Core expression parsing.
///
/// Contains the precedence-climbing expression grammar (additive, term,
/// exponent, primary), matrix literals, and the parsing context that tracks
/// declared parameters and records usage metadata.
pub mod core;

/// Statement parsing.
///
/// Implements the top-level grammar: function definitions and print
/// directives, one statement per physical line.
pub mod statement;

/// Utility functions for the parser.
///
/// Token-expectation and comma-separated-list helpers shared by the
/// expression and statement parsers.
pub mod utils;
