/// Trigonometric, hyperbolic and inverse function names recognized by the
/// lexer and applied by the evaluator.
///
/// The list is fixed; an alphabetic run matching one of these names can never
/// be used as a user function or variable name.
pub const TRIG_FUNCTIONS: &[&str] = &[
    "sin", "cos", "tan", "csc", "sec", "cot", // basic trigonometric functions
    "sinh", "cosh", "tanh", "csch", "sech", "coth", // hyperbolic functions
    "asin", "acos", "atan", "acsc", "asec", "acot", // inverse trigonometric functions
    "asinh", "acosh", "atanh", "acsch", "asech", "acoth", // inverse hyperbolic functions
];

/// Standard math function names: `sqrt`, `ln`, `abs`, `exp` and the
/// two-argument `log` (explicit base first).
pub const MATH_FUNCTIONS: &[&str] = &["sqrt", "ln", "abs", "exp", "log"];

/// The parameter alphabet: the only legal function-parameter names.
pub const VARIABLES: &[&str] = &["x", "y", "z"];

/// Returns `true` when `name` is a built-in trig or math function.
///
/// # Example
/// ```
/// use mrog::interpreter::symbols::is_builtin_function;
///
/// assert!(is_builtin_function("sinh"));
/// assert!(is_builtin_function("log"));
/// assert!(!is_builtin_function("myFunction"));
/// ```
#[must_use]
pub fn is_builtin_function(name: &str) -> bool {
    TRIG_FUNCTIONS.contains(&name) || MATH_FUNCTIONS.contains(&name)
}

/// Returns `true` when `name` belongs to the parameter alphabet `{x, y, z}`.
#[must_use]
pub fn is_variable(name: &str) -> bool {
    VARIABLES.contains(&name)
}
