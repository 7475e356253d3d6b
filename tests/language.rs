use std::fs;

use logos::Logos;
use mrog::{
    interpret,
    interpreter::{
        lexer::{LexerExtras, Token},
        parser::core::{ExprContext, parse_expression},
    },
};
use walkdir::WalkDir;

fn run(src: &str) -> Vec<String> {
    interpret(src).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn assert_output(src: &str, expected: &[&str]) {
    assert_eq!(run(src), expected);
}

fn assert_failure(src: &str) {
    if interpret(src).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}

fn assert_failure_containing(src: &str, needle: &str) {
    match interpret(src) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => {
            let message = e.to_string();
            assert!(
                message.contains(needle),
                "Expected '{needle}' in diagnostic, got: {message}"
            );
        }
    }
}

/// Extracts every float appearing in an output line, in order.
fn floats_in(line: &str) -> Vec<f64> {
    line.split(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}

#[test]
fn function_definition_and_call() {
    assert_output("f(x) = x ^ 2 + 1\nprint(f(3))", &["f(3) = 10"]);
    assert_output("double(x) = x * 2\nprint(double(21))", &["double(21) = 42"]);
}

#[test]
fn function_composition() {
    assert_output(
        "f(x) = x * 2\ng(x) = f(x) + 1\nprint(g(4))",
        &["g(4) = 9"],
    );
}

#[test]
fn exponentiation_is_right_associative() {
    assert_output("print(2 ^ 3 ^ 2)", &["512"]);
    assert_output("print((2 ^ 3) ^ 2)", &["64"]);
}

#[test]
fn scalar_arithmetic_follows_ieee() {
    assert_output("print(1 / 0)", &["inf"]);
    assert_output("print(3 - 5)", &["-2"]);
    assert_output("print(sin(0))", &["0"]);
    assert_output("print(sqrt(16))", &["4"]);
}

#[test]
fn unary_minus_desugars_to_subtraction() {
    assert_output("print(-5)", &["-5"]);
    assert_output("print(-2 ^ 2)", &["-4"]);
    assert_output("f(x) = -x + 1\nprint(f(3))", &["f(3) = -2"]);
}

#[test]
fn log_takes_base_first() {
    let lines = run("print(log(2, 8))");
    let result = *floats_in(&lines[0]).last().unwrap();
    assert!((result - 3.0).abs() < 1e-9, "log(2, 8) was {result}");
}

#[test]
fn math_function_domains_are_enforced() {
    assert_failure_containing("print(sqrt(-1))", "sqrt");
    assert_failure_containing("print(ln(0))", "ln");
    assert_failure_containing("print(log(2, -4))", "log");
    assert_failure_containing("f(x) = sqrt(x)\nprint(f(-1))", "sqrt");
}

#[test]
fn factorials() {
    assert_output("print(5!)", &["120"]);
    assert_output("print(0!)", &["1"]);
    assert_output("print(3! + 1)", &["7"]);
    assert_failure("print((-3)!)");
    assert_failure("print(3.5!)");
}

#[test]
fn derivative_of_a_cubic() {
    let lines = run("f(x) = x ^ 3\nprint(f'(2))");
    assert!(lines[0].starts_with("f'(2) = "));
    let result = *floats_in(&lines[0]).last().unwrap();
    assert!((result - 12.0).abs() < 1e-4, "f'(2) was {result}");
}

#[test]
fn gradient_of_a_two_parameter_function() {
    let lines = run("g(x, y) = x * y\nprint(g'(2, 3))");
    assert!(lines[0].starts_with("g'(2, 3) = [["));
    let floats = floats_in(&lines[0]);
    let partials = &floats[floats.len() - 2..];
    assert!((partials[0] - 3.0).abs() < 1e-4);
    assert!((partials[1] - 2.0).abs() < 1e-4);
}

#[test]
fn derivative_falls_back_to_one_sided_at_domain_boundary() {
    // sqrt is undefined left of zero, so the central probe cannot be used.
    let lines = run("r(x) = sqrt(x)\nprint(r'(0))");
    let result = *floats_in(&lines[0]).last().unwrap();
    assert!((result - 1000.0).abs() < 0.1, "r'(0) was {result}");
}

#[test]
fn derivative_of_a_matrix_valued_function() {
    let lines = run("m(x) = [[x, x * x]]\nprint(m'(3))");
    let floats = floats_in(&lines[0]);
    let cells = &floats[floats.len() - 2..];
    assert!((cells[0] - 1.0).abs() < 1e-3);
    assert!((cells[1] - 6.0).abs() < 1e-3);
}

#[test]
fn matrix_literals_and_elementwise_arithmetic() {
    assert_output("print([[1, 2], [3, 4]])", &["[[1, 2], [3, 4]]"]);
    assert_output(
        "print([[1, 2], [3, 4]] + [[1, 1], [1, 1]])",
        &["[[2, 3], [4, 5]]"],
    );
    assert_output(
        "print([[5, 5]] - [[2, 3]])",
        &["[[3, 2]]"],
    );
    assert_failure("print([[1, 2], [3]])");
}

#[test]
fn symbolic_expansion_of_unbound_arguments() {
    assert_output("f(x) = x ^ 2 + 1\nprint(f(y))", &["f(y) = ((y ^ 2) + 1)"]);
    assert_output("f(x) = x\nprint(f)", &["f"]);
}

#[test]
fn symbolic_output_reparses_to_an_equivalent_expression() {
    let lines = run("f(x) = x ^ 2 + 1\nprint(f(y))");
    let rendered = lines[0].split(" = ").nth(1).unwrap();

    let reparsed = parse_source_expression(rendered);
    let original = parse_source_expression("y ^ 2 + 1");
    assert_eq!(reparsed, original);
}

fn parse_source_expression(src: &str) -> mrog::ast::Expr {
    let mut lexer = Token::lexer_with_extras(src, LexerExtras { line: 1 });
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        tokens.push((token.expect("unexpected symbol"), lexer.extras.line));
    }
    let mut iter = tokens.iter().peekable();
    let mut ctx = ExprContext::for_print(1);
    parse_expression(&mut iter, &mut ctx).expect("expression did not parse")
}

#[test]
fn calls_are_pure() {
    let lines = run("p(x) = sin(x) + x ^ 2\nprint(p(1))\nprint(p(1))");
    assert_eq!(lines[0], lines[1]);
}

#[test]
fn scope_violations_are_rejected() {
    // Body variable outside the declared parameters.
    assert_failure_containing("f(x) = x + y\nprint(f(1))", "y");
    // Inside call arguments the check is immediate, even without a print.
    assert_failure_containing("f(x) = sin(y)", "y");
    assert_failure_containing("f(x) = sin(w)", "w");
}

#[test]
fn definitions_are_validated() {
    assert_failure_containing("f(a) = a", "a");
    assert_failure("f(x, x) = x");
    assert_failure_containing("sin(x) = x", "reserved");
    assert_failure_containing("f(x) = x\nf(x) = x + 1", "already defined");
}

#[test]
fn functions_must_be_defined_before_use() {
    assert_failure_containing("g(x) = h(x)\nh(x) = x", "h");
    assert_failure_containing("print(q(1))", "q");
    assert_failure_containing("print(q)", "q");
}

#[test]
fn call_arity_is_checked() {
    assert_failure_containing("f(x) = x\nprint(f(1, 2))", "argument");
    assert_failure_containing("f(x, y) = x + y\nprint(f(1))", "argument");
}

#[test]
fn print_takes_exactly_one_argument() {
    assert_failure("print()");
    assert_failure("print(1, 2)");
}

#[test]
fn malformed_input_is_rejected() {
    assert_failure_containing("print(1 $ 2)", "Unknown symbol");
    assert_failure("print(1) print(2)");
    assert_failure("print(5!!)");
    assert_failure("f'");
    assert_failure("print(1 +");
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    assert_output(
        "# define f\n\nf(x) = x * 3 # inline comment\n\nprint(f(2))",
        &["f(2) = 6"],
    );
}

#[test]
fn sample_scripts_run() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts")
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "mg"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        match interpret(&script) {
            Ok(lines) => assert!(!lines.is_empty(), "{path:?} printed nothing"),
            Err(e) => panic!("Script {path:?} failed:\n{script}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
