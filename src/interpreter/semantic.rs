use std::collections::HashMap;

use crate::{
    ast::{Expr, FunctionDef, Statement, StatementMeta},
    error::SemanticError,
    interpreter::symbols,
};

/// The table of user-defined functions, keyed by name.
pub type FunctionTable = HashMap<String, FunctionDef>;

/// Result type used by the semantic pass.
pub type SemanticResult<T> = Result<T, SemanticError>;

/// Checks a parsed program for scope and definition consistency.
///
/// The analyzer walks the statements in source order and builds the function
/// table as it goes, so a function may only call functions defined on earlier
/// lines. It owns the table and hands it to the evaluator on success.
#[derive(Default)]
pub struct SemanticAnalyzer {
    functions: FunctionTable,
}

impl SemanticAnalyzer {
    /// Creates an analyzer with an empty function table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzes the program and returns the completed function table.
    ///
    /// # Errors
    /// The first `SemanticError` found, in statement order.
    pub fn analyze(mut self, program: &[Statement]) -> SemanticResult<FunctionTable> {
        for statement in program {
            match statement {
                Statement::Function { def, meta } => self.check_definition(def, meta)?,
                Statement::Print { expr, meta, line } => self.check_print(expr, meta, *line)?,
            }
        }
        Ok(self.functions)
    }

    /// Checks a function definition and inserts it into the table.
    fn check_definition(&mut self, def: &FunctionDef, meta: &StatementMeta) -> SemanticResult<()> {
        for param in &def.params {
            if !symbols::is_variable(param) {
                return Err(SemanticError::InvalidArgument {
                    function: def.name.clone(),
                    name: param.clone(),
                    line: def.line,
                });
            }
        }

        for variable in &meta.variables_used {
            if !def.params.iter().any(|p| p == variable) {
                return Err(SemanticError::InvalidExpressionVariable {
                    function: def.name.clone(),
                    variable: variable.clone(),
                    expected: def.params.join(", "),
                    line: def.line,
                });
            }
        }

        for called in &meta.functions_called {
            if !self.functions.contains_key(called) {
                return Err(SemanticError::UndefinedFunction {
                    name: called.clone(),
                    line: def.line,
                });
            }
        }

        if self.functions.contains_key(&def.name) {
            return Err(SemanticError::DuplicateDefinition {
                name: def.name.clone(),
                line: def.line,
            });
        }
        self.functions.insert(def.name.clone(), def.clone());
        Ok(())
    }

    /// Checks a print directive against the functions defined so far.
    fn check_print(&self, expr: &Expr, meta: &StatementMeta, line: usize) -> SemanticResult<()> {
        for called in &meta.functions_called {
            if !self.functions.contains_key(called) {
                return Err(SemanticError::UndefinedFunction {
                    name: called.clone(),
                    line,
                });
            }
        }

        // A bare name as the argument must refer to a defined function.
        if let Expr::Variable { name, line } = expr
            && !self.functions.contains_key(name)
        {
            return Err(SemanticError::UndefinedFunction {
                name: name.clone(),
                line: *line,
            });
        }
        Ok(())
    }
}
