use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary,
            core::{EvalResult, Evaluator, render_arguments},
        },
        value::Value,
    },
};

/// Step size of the finite-difference quotient.
pub const STEP: f64 = 1e-6;

/// The kind of difference quotient that produced a partial derivative.
///
/// The evaluator prefers the central quotient; when one of its probe points
/// leaves a function's domain it falls back to a one-sided quotient anchored
/// at the unperturbed point, and the outcome records which happened.
#[derive(Debug)]
pub enum DifferenceOutcome {
    /// Central difference `(f(p + h) - f(p - h)) / 2h`.
    Central(Value),
    /// One-sided difference with step `h`, used at a domain boundary.
    ForwardFallback(Value),
}

impl DifferenceOutcome {
    /// Unwraps the computed partial derivative.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Central(value) | Self::ForwardFallback(value) => value,
        }
    }
}

/// Differentiates a user function numerically at the given point.
///
/// With one parameter the result is the scalar derivative; with several it
/// is the ordered gradient, returned as a single-row matrix when every
/// partial is scalar. Non-numeric arguments render the derivative
/// symbolically instead.
pub fn differentiate(
    evaluator: &Evaluator,
    name: &str,
    args: &[Value],
    line: usize,
) -> EvalResult<Value> {
    let Some(def) = evaluator.functions.get(name) else {
        return Err(RuntimeError::UndefinedFunction {
            name: name.to_string(),
            line,
        });
    };
    if args.len() != def.params.len() {
        return Err(RuntimeError::ArgumentCountMismatch {
            name: name.to_string(),
            expected: def.params.len(),
            found: args.len(),
            line,
        });
    }

    let Some(point) = args
        .iter()
        .map(Value::as_scalar)
        .collect::<Option<Vec<f64>>>()
    else {
        return Ok(Value::Symbolic(format!(
            "{name}'({})",
            render_arguments(args)
        )));
    };

    let mut partials = Vec::with_capacity(point.len());
    for index in 0..point.len() {
        partials.push(partial(evaluator, def, &point, index, line)?.into_value());
    }

    if partials.len() == 1 {
        return Ok(partials.remove(0));
    }
    if partials.iter().all(Value::is_scalar) {
        let row = partials.iter().filter_map(Value::as_scalar).collect();
        return Ok(Value::Matrix(vec![row]));
    }
    Ok(Value::Symbolic(format!(
        "{name}'({})",
        render_arguments(args)
    )))
}

/// Computes one partial derivative with respect to the parameter at `index`.
fn partial(
    evaluator: &Evaluator,
    def: &FunctionDef,
    point: &[f64],
    index: usize,
    line: usize,
) -> EvalResult<DifferenceOutcome> {
    let plus = probe(evaluator, def, point, index, STEP);
    let minus = probe(evaluator, def, point, index, -STEP);

    match (plus, minus) {
        (Ok(plus), Ok(minus)) => {
            difference(&plus, &minus, 2.0 * STEP, line).map(DifferenceOutcome::Central)
        }
        (Ok(plus), Err(RuntimeError::ArithmeticDomain { .. })) => {
            let base = probe(evaluator, def, point, index, 0.0)?;
            difference(&plus, &base, STEP, line).map(DifferenceOutcome::ForwardFallback)
        }
        (Err(RuntimeError::ArithmeticDomain { .. }), Ok(minus)) => {
            let base = probe(evaluator, def, point, index, 0.0)?;
            difference(&base, &minus, STEP, line).map(DifferenceOutcome::ForwardFallback)
        }
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

/// Evaluates the function body with one coordinate shifted by `offset`.
fn probe(
    evaluator: &Evaluator,
    def: &FunctionDef,
    point: &[f64],
    index: usize,
    offset: f64,
) -> EvalResult<Value> {
    let env = def
        .params
        .iter()
        .zip(point)
        .enumerate()
        .map(|(i, (param, coordinate))| {
            let shifted = if i == index {
                coordinate + offset
            } else {
                *coordinate
            };
            (param.clone(), Value::Scalar(shifted))
        })
        .collect();
    evaluator.eval(&def.body, &env)
}

/// Forms the difference quotient `(high - low) / denominator`.
///
/// Matrix-valued bodies differentiate element-wise; a symbolic body value
/// cannot be differentiated numerically.
fn difference(high: &Value, low: &Value, denominator: f64, line: usize) -> EvalResult<Value> {
    match (high, low) {
        (Value::Scalar(h), Value::Scalar(l)) => Ok(Value::Scalar((h - l) / denominator)),
        (Value::Matrix(h), Value::Matrix(l)) if binary::same_shape(h, l) => {
            let rows = h
                .iter()
                .zip(l)
                .map(|(hr, lr)| {
                    hr.iter()
                        .zip(lr)
                        .map(|(a, b)| (a - b) / denominator)
                        .collect()
                })
                .collect();
            Ok(Value::Matrix(rows))
        }
        _ => Err(RuntimeError::ArithmeticDomain {
            details: "Cannot differentiate a non-numeric result.".to_string(),
            line,
        }),
    }
}
