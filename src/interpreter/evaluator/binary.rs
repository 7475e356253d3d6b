use crate::{ast::BinaryOperator, interpreter::value::Value};

/// Applies a binary operator to two evaluated values.
///
/// Scalars follow IEEE 754 float semantics, so dividing by zero yields an
/// infinity rather than an error. Matrices of identical shape support
/// element-wise addition and subtraction. Every other combination renders
/// symbolically, parenthesized so the output re-parses to an equivalent
/// expression.
#[must_use]
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Scalar(l), Value::Scalar(r)) => Value::Scalar(apply_scalar(op, *l, *r)),
        (Value::Matrix(l), Value::Matrix(r))
            if same_shape(l, r)
                && matches!(op, BinaryOperator::Add | BinaryOperator::Sub) =>
        {
            let rows = l
                .iter()
                .zip(r)
                .map(|(lr, rr)| {
                    lr.iter()
                        .zip(rr)
                        .map(|(a, b)| apply_scalar(op, *a, *b))
                        .collect()
                })
                .collect();
            Value::Matrix(rows)
        }
        _ => Value::Symbolic(format!("({left} {op} {right})")),
    }
}

/// Applies a binary operator to two floats.
#[must_use]
pub fn apply_scalar(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Pow => left.powf(right),
    }
}

/// Returns `true` when the two matrices have identical dimensions.
#[must_use]
pub fn same_shape(a: &[Vec<f64>], b: &[Vec<f64>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(ra, rb)| ra.len() == rb.len())
}
