use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, render_arguments},
        value::Value,
    },
};

/// Applies a built-in function to its evaluated arguments.
///
/// Scalar arguments run the mapped `f64` routine. Any non-scalar argument
/// makes the whole call render symbolically instead.
///
/// # Errors
/// `RuntimeError::ArithmeticDomain` for `sqrt` of a negative number and for
/// a non-positive `ln`/`log` argument or `log` base.
pub fn apply_builtin(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    if !args.iter().all(Value::is_scalar) {
        return Ok(Value::Symbolic(format!(
            "{name}({})",
            render_arguments(args)
        )));
    }
    let scalars: Vec<f64> = args.iter().filter_map(Value::as_scalar).collect();

    match name {
        "sqrt" => {
            let x = scalars[0];
            if x < 0.0 {
                return Err(RuntimeError::ArithmeticDomain {
                    details: format!("Cannot take sqrt of a negative number ({x})."),
                    line,
                });
            }
            Ok(Value::Scalar(x.sqrt()))
        }
        "ln" => {
            let x = scalars[0];
            if x <= 0.0 {
                return Err(RuntimeError::ArithmeticDomain {
                    details: format!("Cannot take ln of a non-positive number ({x})."),
                    line,
                });
            }
            Ok(Value::Scalar(x.ln()))
        }
        // The base comes first: log(2, 8) is the base-2 logarithm of 8.
        "log" => {
            let (base, x) = (scalars[0], scalars[1]);
            if base <= 0.0 {
                return Err(RuntimeError::ArithmeticDomain {
                    details: format!("Cannot take log with a non-positive base ({base})."),
                    line,
                });
            }
            if x <= 0.0 {
                return Err(RuntimeError::ArithmeticDomain {
                    details: format!("Cannot take log of a non-positive number ({x})."),
                    line,
                });
            }
            Ok(Value::Scalar(x.log(base)))
        }
        "abs" => Ok(Value::Scalar(scalars[0].abs())),
        "exp" => Ok(Value::Scalar(scalars[0].exp())),
        other => match trig_routine(other) {
            Some(routine) => Ok(Value::Scalar(routine(scalars[0]))),
            None => Err(RuntimeError::UndefinedFunction {
                name: name.to_string(),
                line,
            }),
        },
    }
}

/// Maps a trigonometric or hyperbolic name to its `f64` routine.
///
/// Reciprocal variants are computed from the primary ones, and the inverse
/// reciprocals from the inverse primaries applied to `1 / x`.
fn trig_routine(name: &str) -> Option<fn(f64) -> f64> {
    Some(match name {
        "sin" => |x: f64| x.sin(),
        "cos" => |x: f64| x.cos(),
        "tan" => |x: f64| x.tan(),
        "csc" => |x: f64| x.sin().recip(),
        "sec" => |x: f64| x.cos().recip(),
        "cot" => |x: f64| x.tan().recip(),
        "sinh" => |x: f64| x.sinh(),
        "cosh" => |x: f64| x.cosh(),
        "tanh" => |x: f64| x.tanh(),
        "csch" => |x: f64| x.sinh().recip(),
        "sech" => |x: f64| x.cosh().recip(),
        "coth" => |x: f64| x.tanh().recip(),
        "asin" => |x: f64| x.asin(),
        "acos" => |x: f64| x.acos(),
        "atan" => |x: f64| x.atan(),
        "acsc" => |x: f64| x.recip().asin(),
        "asec" => |x: f64| x.recip().acos(),
        "acot" => |x: f64| x.recip().atan(),
        "asinh" => |x: f64| x.asinh(),
        "acosh" => |x: f64| x.acosh(),
        "atanh" => |x: f64| x.atanh(),
        "acsch" => |x: f64| x.recip().asinh(),
        "asech" => |x: f64| x.recip().acosh(),
        "acoth" => |x: f64| x.recip().atanh(),
        _ => return None,
    })
}
