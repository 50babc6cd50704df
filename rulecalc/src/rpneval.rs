use crate::operator::{parse_number, Operator};
use crate::parser::{RpnExpr, RpnToken};
use crate::stack::Stack;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Clone, PartialEq, Debug)]
pub enum EvalErr {
    #[error("not enough operands{}", for_operator(.operator))]
    InsufficientOperands { operator: Option<Operator> },
    #[error("not enough operators, {remaining} values left over")]
    InsufficientOperators { remaining: usize },
    #[error("operand expected a float number but got '{0}'")]
    MalformedOperand(String),
}

fn for_operator(operator: &Option<Operator>) -> String {
    match operator {
        Some(op) => format!(" for '{}'", op),
        None => String::new(),
    }
}

/// Variable table: names map to the textual value substituted into the
/// postfix form before evaluation. Values aren't validated when set, a bad
/// one surfaces as `MalformedOperand` when used.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Variables(HashMap<String, String>);

impl Variables {
    pub fn new() -> Variables {
        Variables::default()
    }

    pub fn set(&mut self, var: impl Into<String>, val: impl Into<String>) {
        self.0.insert(var.into(), val.into());
    }

    pub fn get(&self, var: &str) -> Option<&str> {
        self.0.get(var).map(String::as_str)
    }

    pub fn remove(&mut self, var: &str) -> Option<String> {
        self.0.remove(var)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Variables sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut vars: Vec<_> = self.0.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        vars.sort_unstable();
        vars.into_iter()
    }

    /// Replaces every operand naming a known variable with its value.
    /// Unknown names pass through untouched.
    pub fn resolve(&self, rpn: &RpnExpr) -> RpnExpr {
        let resolved = rpn
            .iter()
            .map(|token| match token {
                RpnToken::Operand(name) => match self.0.get(name) {
                    Some(value) => {
                        tracing::trace!(%name, %value, "substituting variable");
                        RpnToken::Operand(value.clone())
                    }
                    None => token.clone(),
                },
                RpnToken::Operator(_) => token.clone(),
            })
            .collect();
        RpnExpr(resolved)
    }

    pub fn eval(&self, rpn: &RpnExpr) -> Result<f64, EvalErr> {
        eval_rpn(&self.resolve(rpn))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut vars = Variables::new();
        vars.extend(iter);
        vars
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Variables {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (var, val) in iter {
            self.set(var, val);
        }
    }
}

/// Evaluates a postfix expression whose operands are all numeric.
/// A variable name still in place is reported as `MalformedOperand`.
pub fn eval_rpn(rpn: &RpnExpr) -> Result<f64, EvalErr> {
    let mut operands = Stack::new();

    for token in rpn.iter() {
        match *token {
            RpnToken::Operand(ref num) => match parse_number(num) {
                Some(value) => operands.push(value),
                None => return Err(EvalErr::MalformedOperand(num.clone())),
            },
            RpnToken::Operator(op) => {
                let (r, l) = match (operands.pop(), operands.pop()) {
                    (Some(r), Some(l)) => (r, l),
                    _ => return Err(EvalErr::InsufficientOperands { operator: Some(op) }),
                };
                operands.push(op.apply(l, r));
            }
        }
    }
    match operands.len() {
        0 => Err(EvalErr::InsufficientOperands { operator: None }),
        1 => operands.pop().ok_or(EvalErr::InsufficientOperands { operator: None }),
        n => Err(EvalErr::InsufficientOperators { remaining: n }),
    }
}
