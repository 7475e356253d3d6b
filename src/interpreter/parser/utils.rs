use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ExprContext, ParseResult, parse_expression},
    },
};

/// Consumes the next token and checks that it matches `wanted`.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `wanted`: The token that must come next.
/// - `expected`: Human-readable description used in the error message.
/// - `line`: Line to report when the input ends instead.
///
/// # Returns
/// The line number of the consumed token.
///
/// # Errors
/// `ParseError::InvalidSyntax` when a different token appears,
/// `ParseError::UnexpectedEndOfInput` when the stream is exhausted.
pub fn expect<'a, I>(
    tokens: &mut Peekable<I>,
    wanted: &Token,
    expected: &str,
    line: usize,
) -> ParseResult<usize>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    match tokens.next() {
        Some((token, l)) if token == wanted => Ok(*l),
        Some((token, l)) => Err(ParseError::InvalidSyntax {
            expected: expected.to_string(),
            found: describe(token),
            line: *l,
        }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a comma-separated list of expressions, stopping before `closing`.
///
/// Returns an empty list when `closing` is the very next token; the caller is
/// responsible for consuming `closing` itself.
pub fn parse_comma_separated<'a, I>(
    tokens: &mut Peekable<I>,
    ctx: &mut ExprContext<'_>,
    closing: &Token,
) -> ParseResult<Vec<Expr>>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let mut items = Vec::new();
    if let Some((token, _)) = tokens.peek()
        && *token == *closing
    {
        return Ok(items);
    }

    items.push(parse_expression(tokens, ctx)?);
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        items.push(parse_expression(tokens, ctx)?);
    }
    Ok(items)
}

/// Renders a token for use in diagnostics.
#[must_use]
pub fn describe(token: &Token) -> String {
    match token {
        Token::Number(value) => format!("number '{value}'"),
        Token::TrigFunction(name) | Token::MathFunction(name) => {
            format!("reserved function name '{name}'")
        }
        Token::Print => "'print'".to_string(),
        Token::Identifier(name) => format!("identifier '{name}'"),
        Token::Plus => "'+'".to_string(),
        Token::Minus => "'-'".to_string(),
        Token::Star => "'*'".to_string(),
        Token::Slash => "'/'".to_string(),
        Token::Caret => "'^'".to_string(),
        Token::Equals => "'='".to_string(),
        Token::LParen => "'('".to_string(),
        Token::RParen => "')'".to_string(),
        Token::Bang => "'!'".to_string(),
        Token::Prime => "\"'\"".to_string(),
        Token::Comma => "','".to_string(),
        Token::LBracket => "'['".to_string(),
        Token::RBracket => "']'".to_string(),
        Token::Comment | Token::Ignored => "a comment".to_string(),
        Token::NewLine => "end of line".to_string(),
    }
}
