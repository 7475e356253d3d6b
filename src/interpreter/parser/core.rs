use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, StatementMeta},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::utils::{describe, expect, parse_comma_separated},
        symbols,
    },
};

/// Result type used throughout the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// The enclosing function definition, when parsing a definition body.
#[derive(Clone, Copy)]
struct Definition<'a> {
    function: &'a str,
    params: &'a [String],
}

/// State carried through expression parsing.
///
/// Tracks whether the expression is a definition body (and which parameters
/// are in scope), how deep inside call arguments the parser currently is, and
/// the usage metadata recorded for the statement.
pub struct ExprContext<'a> {
    definition: Option<Definition<'a>>,
    call_depth: usize,
    line: usize,
    pub(crate) meta: StatementMeta,
}

impl<'a> ExprContext<'a> {
    /// Context for the argument of a `print` directive.
    #[must_use]
    pub fn for_print(line: usize) -> Self {
        Self {
            definition: None,
            call_depth: 0,
            line,
            meta: StatementMeta::default(),
        }
    }

    /// Context for the body of a function definition.
    #[must_use]
    pub fn for_definition(function: &'a str, params: &'a [String], line: usize) -> Self {
        Self {
            definition: Some(Definition { function, params }),
            call_depth: 0,
            line,
            meta: StatementMeta::default(),
        }
    }

    /// Records a variable reference and applies the eager scope check.
    ///
    /// Inside call arguments of a definition body, a name outside the
    /// variable alphabet or outside the declared parameters is rejected
    /// immediately. Everywhere else the reference is only recorded; the
    /// semantic pass decides later.
    fn record_variable(&mut self, name: &str, line: usize) -> ParseResult<()> {
        if self.call_depth > 0
            && let Some(def) = self.definition
        {
            if !symbols::is_variable(name) {
                return Err(ParseError::InvalidVariable {
                    name: name.to_string(),
                    line,
                });
            }
            if !def.params.iter().any(|p| p == name) {
                return Err(ParseError::InvalidExpressionVariable {
                    function: def.function.to_string(),
                    variable: name.to_string(),
                    expected: def.params.join(", "),
                    line,
                });
            }
        }
        self.meta.variables_used.insert(name.to_string());
        Ok(())
    }

    fn record_call(&mut self, name: &str) {
        self.meta.functions_called.insert(name.to_string());
    }
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `ctx`: Parsing context of the enclosing statement.
///
/// # Returns
/// An `Expr` tree representing the parsed expression.
pub fn parse_expression<'a, I>(
    tokens: &mut Peekable<I>,
    ctx: &mut ExprContext<'_>,
) -> ParseResult<Expr>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let mut left = parse_term(tokens, ctx)?;
    loop {
        if let Some((token, line)) = tokens.peek()
            && let Some(op) = token_to_binary_operator(token)
            && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_term(tokens, ctx)?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                line,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, ctx: &mut ExprContext<'_>) -> ParseResult<Expr>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let mut left = parse_factor(tokens, ctx)?;
    loop {
        if let Some((token, line)) = tokens.peek()
            && let Some(op) = token_to_binary_operator(token)
            && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = *line;
            tokens.next();
            let right = parse_factor(tokens, ctx)?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                line,
            };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
///
/// The rule is: `factor := "-" factor | primary ("^" factor)?`
///
/// Numeric literals are unsigned, so a leading minus desugars to subtraction
/// from zero. It binds looser than `^`: `-2 ^ 2` is `-(2 ^ 2)`.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, ctx: &mut ExprContext<'_>) -> ParseResult<Expr>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let operand = parse_factor(tokens, ctx)?;
        return Ok(Expr::BinaryOp {
            op: BinaryOperator::Sub,
            left: Box::new(Expr::Number { value: 0.0, line }),
            right: Box::new(operand),
            line,
        });
    }

    let left = parse_primary(tokens, ctx)?;
    if let Some((Token::Caret, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let right = parse_factor(tokens, ctx)?;
        return Ok(Expr::BinaryOp {
            op: BinaryOperator::Pow,
            left: Box::new(left),
            right: Box::new(right),
            line,
        });
    }
    Ok(left)
}

/// Parses a primary expression: a number, a built-in or user call, a bare
/// variable, a parenthesized expression, or a matrix literal, optionally
/// followed by a single postfix `!`.
pub fn parse_primary<'a, I>(
    tokens: &mut Peekable<I>,
    ctx: &mut ExprContext<'_>,
) -> ParseResult<Expr>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let Some((token, line)) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line: ctx.line });
    };
    let line = *line;

    let expr = match token {
        Token::Number(value) => {
            let value = *value;
            tokens.next();
            Expr::Number { value, line }
        }
        Token::TrigFunction(name) | Token::MathFunction(name) => {
            let name = name.clone();
            tokens.next();
            parse_math_call(tokens, ctx, name, line)?
        }
        Token::Identifier(name) => {
            let name = name.clone();
            tokens.next();
            parse_identifier_expr(tokens, ctx, name, line)?
        }
        Token::LParen => {
            tokens.next();
            let inner = parse_expression(tokens, ctx)?;
            expect(tokens, &Token::RParen, "closing parenthesis ')'", line)?;
            inner
        }
        Token::LBracket => parse_matrix_literal(tokens, ctx)?,
        other => {
            return Err(ParseError::InvalidSyntax {
                expected: "an expression".to_string(),
                found: describe(other),
                line,
            });
        }
    };

    if let Some((Token::Bang, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        return Ok(Expr::Factorial {
            expr: Box::new(expr),
            line,
        });
    }
    Ok(expr)
}

/// Parses the argument list of a built-in math call; the name token has
/// already been consumed. `log` takes two arguments with the base first,
/// every other built-in takes exactly one.
fn parse_math_call<'a, I>(
    tokens: &mut Peekable<I>,
    ctx: &mut ExprContext<'_>,
    name: String,
    line: usize,
) -> ParseResult<Expr>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    expect(tokens, &Token::LParen, "'(' after function name", line)?;
    ctx.call_depth += 1;
    let mut arguments = vec![parse_expression(tokens, ctx)?];
    if name == "log" {
        expect(tokens, &Token::Comma, "',' between log base and argument", line)?;
        arguments.push(parse_expression(tokens, ctx)?);
    }
    ctx.call_depth -= 1;
    expect(tokens, &Token::RParen, "closing parenthesis ')'", line)?;
    Ok(Expr::Call {
        name,
        arguments,
        line,
    })
}

/// Parses what follows an identifier: a call, a derivative call, or a bare
/// variable reference. The identifier token has already been consumed.
fn parse_identifier_expr<'a, I>(
    tokens: &mut Peekable<I>,
    ctx: &mut ExprContext<'_>,
    name: String,
    line: usize,
) -> ParseResult<Expr>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let derivative = if let Some((Token::Prime, _)) = tokens.peek() {
        tokens.next();
        true
    } else {
        false
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            ctx.call_depth += 1;
            let arguments = parse_comma_separated(tokens, ctx, &Token::RParen)?;
            ctx.call_depth -= 1;
            expect(tokens, &Token::RParen, "closing parenthesis ')'", line)?;
            ctx.record_call(&name);
            if derivative {
                Ok(Expr::Derivative {
                    name,
                    arguments,
                    line,
                })
            } else {
                Ok(Expr::Call {
                    name,
                    arguments,
                    line,
                })
            }
        }
        // A derivative needs an evaluation point.
        Some((token, l)) if derivative => Err(ParseError::InvalidSyntax {
            expected: "'(' after derivative marker".to_string(),
            found: describe(token),
            line: *l,
        }),
        None if derivative => Err(ParseError::UnexpectedEndOfInput { line }),
        _ => {
            ctx.record_variable(&name, line)?;
            Ok(Expr::Variable { name, line })
        }
    }
}

/// Parses a matrix literal: `[` row (`,` row)* `]` with each row a
/// bracketed, comma-separated list of expressions. Rows must be rectangular.
fn parse_matrix_literal<'a, I>(
    tokens: &mut Peekable<I>,
    ctx: &mut ExprContext<'_>,
) -> ParseResult<Expr>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let line = expect(tokens, &Token::LBracket, "'['", ctx.line)?;
    let mut rows = Vec::new();
    loop {
        expect(tokens, &Token::LBracket, "'[' to open a matrix row", line)?;
        let row = parse_comma_separated(tokens, ctx, &Token::RBracket)?;
        expect(tokens, &Token::RBracket, "']' to close a matrix row", line)?;
        rows.push(row);
        if let Some((Token::Comma, _)) = tokens.peek() {
            tokens.next();
            continue;
        }
        break;
    }
    expect(tokens, &Token::RBracket, "']' to close the matrix", line)?;

    if rows.iter().any(|row| row.len() != rows[0].len()) {
        return Err(ParseError::RaggedMatrix { line });
    }
    Ok(Expr::MatrixLiteral { rows, line })
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use mrog::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::core::token_to_binary_operator},
/// };
///
/// assert_eq!(
///     token_to_binary_operator(&Token::Plus),
///     Some(BinaryOperator::Add)
/// );
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
