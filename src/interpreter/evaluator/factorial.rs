use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// How far a scalar may sit from the nearest integer and still count as
/// integral.
const INTEGRAL_TOLERANCE: f64 = 1e-9;

/// `171!` overflows `f64`.
const MAX_EXACT: f64 = 170.0;

/// Evaluates a postfix factorial.
///
/// Scalars must be non-negative and integral within a small tolerance;
/// matrices and symbolic values render symbolically.
///
/// # Errors
/// `RuntimeError::ArithmeticDomain` for a negative or non-integral operand.
pub fn apply(value: &Value, line: usize) -> EvalResult<Value> {
    let Value::Scalar(operand) = value else {
        return Ok(Value::Symbolic(format!("{value}!")));
    };

    let rounded = operand.round();
    if *operand < 0.0 || (operand - rounded).abs() > INTEGRAL_TOLERANCE {
        return Err(RuntimeError::ArithmeticDomain {
            details: format!("Factorial requires a non-negative integer ({operand})."),
            line,
        });
    }
    if rounded > MAX_EXACT {
        return Ok(Value::Scalar(f64::INFINITY));
    }

    let mut product = 1.0;
    let mut k = 2.0;
    while k <= rounded {
        product *= k;
        k += 1.0;
    }
    Ok(Value::Scalar(product))
}
