extern crate lexers;

pub use calculator::{CalcError, Calculator};
pub use operator::{compare, is_operand, parse_number, priority, Operator};
pub use parser::{ParseError, RpnExpr, RpnToken, ShuntingParser};
pub use stack::Stack;

pub mod parser;

pub use self::rpneval::{eval_rpn, EvalErr, Variables};

mod calculator;
mod operator;
mod rpnprint;
mod rpneval;
mod stack;
