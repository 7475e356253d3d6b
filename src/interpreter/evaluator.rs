/// Core evaluation logic for statements and expressions.
///
/// Contains the `Evaluator` itself: expression dispatch, call handling, and
/// the rendering of print output.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic rules for scalars, the element-wise rules for
/// matrices, and the symbolic fallback.
pub mod binary;

/// Built-in function application.
///
/// Maps the reserved trigonometric and math function names to their `f64`
/// routines and enforces their domains.
pub mod builtin;

/// Numeric differentiation.
///
/// Finite-difference derivatives of user functions, with a one-sided
/// fallback at domain boundaries.
pub mod derivative;

/// Factorial evaluation.
pub mod factorial;
