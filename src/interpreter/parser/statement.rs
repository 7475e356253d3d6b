use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ExprContext, ParseResult, parse_expression},
            utils::{describe, expect},
        },
        symbols,
    },
};

/// Parses a whole program into its list of statements.
///
/// Statements are separated by line breaks; blank lines are skipped. Any
/// token left on a line after its statement is a syntax error.
///
/// # Parameters
/// - `tokens`: The full token stream with line information.
///
/// # Returns
/// The parsed statements in source order.
///
/// # Errors
/// The first `ParseError` encountered; parsing never continues past it.
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut tokens = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        while let Some((Token::NewLine, _)) = tokens.peek() {
            tokens.next();
        }
        if tokens.peek().is_none() {
            break;
        }

        statements.push(parse_statement(&mut tokens)?);

        match tokens.peek() {
            None | Some((Token::NewLine, _)) => {}
            Some((token, line)) => {
                return Err(ParseError::InvalidSyntax {
                    expected: "end of statement".to_string(),
                    found: describe(token),
                    line: *line,
                });
            }
        }
    }

    Ok(statements)
}

/// Parses a single statement: a function definition or a print directive.
fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    match tokens.peek() {
        Some((Token::Print, _)) => parse_print_directive(tokens),
        Some((Token::Identifier(_), _)) => parse_function_definition(tokens),
        Some((Token::TrigFunction(name) | Token::MathFunction(name), line)) => {
            Err(ParseError::InvalidIdentifier {
                name: name.clone(),
                line: *line,
            })
        }
        Some((token, line)) => Err(ParseError::InvalidSyntax {
            expected: "a function definition or a print directive".to_string(),
            found: describe(token),
            line: *line,
        }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a function definition: `name(params) = body`.
///
/// Parameter names are validated as they are read: each must belong to the
/// variable alphabet and may appear only once.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        Some((token, line)) => {
            return Err(ParseError::InvalidSyntax {
                expected: "a function name".to_string(),
                found: describe(token),
                line: *line,
            });
        }
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    expect(tokens, &Token::LParen, "'(' after function name", line)?;
    let params = parse_parameter_list(tokens, &name, line)?;
    expect(tokens, &Token::Equals, "'=' after parameter list", line)?;

    let mut ctx = ExprContext::for_definition(&name, &params, line);
    let body = parse_expression(tokens, &mut ctx)?;
    let meta = ctx.meta;

    Ok(Statement::Function {
        def: FunctionDef {
            name,
            params,
            body,
            line,
        },
        meta,
    })
}

/// Parses the parameter list of a definition, including the closing `)`.
fn parse_parameter_list<'a, I>(
    tokens: &mut Peekable<I>,
    function: &str,
    line: usize,
) -> ParseResult<Vec<String>>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let mut params: Vec<String> = Vec::new();
    loop {
        match tokens.next() {
            Some((Token::Identifier(param), l)) => {
                if !symbols::is_variable(param) || params.iter().any(|p| p == param) {
                    return Err(ParseError::InvalidArgument {
                        function: function.to_string(),
                        name: param.clone(),
                        line: *l,
                    });
                }
                params.push(param.clone());
            }
            Some((token, l)) => {
                return Err(ParseError::InvalidSyntax {
                    expected: "a parameter name".to_string(),
                    found: describe(token),
                    line: *l,
                });
            }
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }

        match tokens.next() {
            Some((Token::Comma, _)) => {}
            Some((Token::RParen, _)) => break,
            Some((token, l)) => {
                return Err(ParseError::InvalidSyntax {
                    expected: "',' or ')' in parameter list".to_string(),
                    found: describe(token),
                    line: *l,
                });
            }
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }
    Ok(params)
}

/// Parses a print directive: `print(expression)`.
///
/// Exactly one argument is allowed; `print()` and `print(a, b)` are both
/// rejected.
fn parse_print_directive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
where
    I: Iterator<Item = &'a (Token, usize)> + Clone,
{
    let line = match tokens.next() {
        Some((Token::Print, line)) => *line,
        Some((token, line)) => {
            return Err(ParseError::InvalidSyntax {
                expected: "'print'".to_string(),
                found: describe(token),
                line: *line,
            });
        }
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    expect(tokens, &Token::LParen, "'(' after print", line)?;
    if let Some((Token::RParen, l)) = tokens.peek() {
        return Err(ParseError::InvalidPrintArgument { line: *l });
    }

    let mut ctx = ExprContext::for_print(line);
    let expr = parse_expression(tokens, &mut ctx)?;

    if let Some((Token::Comma, l)) = tokens.peek() {
        return Err(ParseError::InvalidPrintArgument { line: *l });
    }
    expect(tokens, &Token::RParen, "closing parenthesis ')'", line)?;

    Ok(Statement::Print {
        expr,
        meta: ctx.meta,
        line,
    })
}
