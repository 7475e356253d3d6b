use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, builtin, derivative, factorial},
        semantic::FunctionTable,
        symbols,
        value::Value,
    },
};

/// Result type used throughout the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The variable bindings of a single function call.
pub type Environment = HashMap<String, Value>;

/// Walks the AST of a checked program and produces its printed output.
///
/// The evaluator owns the function table built by the semantic pass. Every
/// function call evaluates its body in a fresh environment holding only the
/// parameter bindings; there is no global mutable state, so evaluating the
/// same expression twice always yields the same value.
pub struct Evaluator {
    pub(crate) functions: FunctionTable,
}

impl Evaluator {
    /// Creates an evaluator over the given function table.
    #[must_use]
    pub fn new(functions: FunctionTable) -> Self {
        Self { functions }
    }

    /// Executes the program's print directives in order.
    ///
    /// # Returns
    /// One output line per `print` directive.
    ///
    /// # Errors
    /// The first `RuntimeError` raised; later directives are not executed.
    pub fn run(&self, program: &[Statement]) -> EvalResult<Vec<String>> {
        let mut lines = Vec::new();
        for statement in program {
            if let Statement::Print { expr, .. } = statement {
                lines.push(self.execute_print(expr)?);
            }
        }
        Ok(lines)
    }

    /// Evaluates a print argument and renders its output line.
    ///
    /// A call of a user function prints as `name(args) = result`, a
    /// derivative as `name'(args) = result`; both show the evaluated
    /// argument values. Any other expression prints its bare value.
    fn execute_print(&self, expr: &Expr) -> EvalResult<String> {
        let env = Environment::new();
        match expr {
            Expr::Call {
                name,
                arguments,
                line,
            } if self.functions.contains_key(name) => {
                let args = self.eval_arguments(arguments, &env)?;
                let result = self.call_function(name, &args, *line)?;
                Ok(format!("{name}({}) = {result}", render_arguments(&args)))
            }
            Expr::Derivative {
                name,
                arguments,
                line,
            } => {
                let args = self.eval_arguments(arguments, &env)?;
                let result = derivative::differentiate(self, name, &args, *line)?;
                Ok(format!("{name}'({}) = {result}", render_arguments(&args)))
            }
            _ => Ok(self.eval(expr, &env)?.to_string()),
        }
    }

    /// Evaluates an expression in the given environment.
    pub(crate) fn eval(&self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Scalar(*value)),
            Expr::Variable { name, .. } => Ok(env
                .get(name)
                .cloned()
                .unwrap_or_else(|| Value::Symbolic(name.clone()))),
            Expr::BinaryOp {
                op, left, right, ..
            } => {
                let left = self.eval(left, env)?;
                let right = self.eval(right, env)?;
                Ok(binary::eval_binary(*op, &left, &right))
            }
            Expr::Call {
                name,
                arguments,
                line,
            } => {
                let args = self.eval_arguments(arguments, env)?;
                if symbols::is_builtin_function(name) {
                    builtin::apply_builtin(name, &args, *line)
                } else {
                    self.call_function(name, &args, *line)
                }
            }
            Expr::Derivative {
                name,
                arguments,
                line,
            } => {
                let args = self.eval_arguments(arguments, env)?;
                derivative::differentiate(self, name, &args, *line)
            }
            Expr::Factorial { expr, line } => {
                let value = self.eval(expr, env)?;
                factorial::apply(&value, *line)
            }
            Expr::MatrixLiteral { rows, .. } => self.eval_matrix(rows, env),
        }
    }

    fn eval_arguments(&self, arguments: &[Expr], env: &Environment) -> EvalResult<Vec<Value>> {
        arguments.iter().map(|arg| self.eval(arg, env)).collect()
    }

    /// Calls a user-defined function: binds the evaluated arguments to its
    /// parameters in a fresh environment and evaluates the body.
    pub(crate) fn call_function(
        &self,
        name: &str,
        args: &[Value],
        line: usize,
    ) -> EvalResult<Value> {
        let Some(def) = self.functions.get(name) else {
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

        let env: Environment = def
            .params
            .iter()
            .cloned()
            .zip(args.iter().cloned())
            .collect();
        self.eval(&def.body, &env)
    }

    /// Evaluates a matrix literal. When every cell is a scalar the result is
    /// a `Matrix`; otherwise the whole literal renders symbolically.
    fn eval_matrix(&self, rows: &[Vec<Expr>], env: &Environment) -> EvalResult<Value> {
        let mut cells: Vec<Vec<Value>> = Vec::with_capacity(rows.len());
        for row in rows {
            cells.push(
                row.iter()
                    .map(|cell| self.eval(cell, env))
                    .collect::<EvalResult<_>>()?,
            );
        }

        if cells.iter().flatten().all(Value::is_scalar) {
            let numeric = cells
                .iter()
                .map(|row| row.iter().filter_map(Value::as_scalar).collect())
                .collect();
            return Ok(Value::Matrix(numeric));
        }

        let rendered: Vec<String> = cells
            .iter()
            .map(|row| format!("[{}]", render_arguments(row)))
            .collect();
        Ok(Value::Symbolic(format!("[{}]", rendered.join(", "))))
    }
}

/// Renders evaluated values as a comma-separated argument list.
pub(crate) fn render_arguments(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
