use crate::parser::{ParseError, RpnExpr, ShuntingParser};
use crate::rpneval::{eval_rpn, EvalErr, Variables};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Clone, PartialEq, Debug)]
pub enum CalcError {
    #[error("generating postfix form failed, {0}")]
    Compile(#[from] ParseError),
    #[error("evaluating postfix form failed, {0}")]
    Eval(#[from] EvalErr),
}

/// Evaluates rule expressions such as `pv>100 && uv<50` against a table of
/// variables. Every call recompiles the expression from scratch.
///
/// ```
/// use rulecalc::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.set_variable("pv", "150");
/// calc.set_variable("uv", "40");
/// assert_eq!(calc.calculate("pv>100&&uv<50"), Ok(1.0));
/// ```
#[derive(Clone, Default, Debug)]
pub struct Calculator {
    variables: Variables,
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator::default()
    }

    pub fn with_variables(variables: Variables) -> Calculator {
        Calculator { variables }
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.set(name, value);
    }

    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn compile(&self, expression: &str) -> Result<RpnExpr, CalcError> {
        let rpn = ShuntingParser::parse_str(expression)?;
        debug!(expression, postfix = %rpn.postfix(), "compiled expression");
        Ok(rpn)
    }

    pub fn calculate(&self, expression: &str) -> Result<f64, CalcError> {
        let rpn = self.compile(expression)?;
        let resolved = self.variables.resolve(&rpn);
        eval_rpn(&resolved).map_err(|e| {
            debug!(expression, error = %e, "evaluation failed");
            CalcError::Eval(e)
        })
    }
}
