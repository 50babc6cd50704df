use crate::operator::{is_operand, Operator};
use crate::stack::Stack;
use lexers::{ExprToken, ExprTokenizer};
use std::cmp::Ordering;
use std::ops::Deref;
use thiserror::Error;

#[derive(Error, Clone, PartialEq, Debug)]
pub enum ParseError {
    #[error("operator '{0}' not supported")]
    UnsupportedOperator(String),
    #[error("unmatched '{0}'")]
    UnmatchedParenthesis(char),
}

#[derive(Clone, PartialEq, Debug)]
pub enum RpnToken {
    Operand(String),
    Operator(Operator),
}

#[derive(Clone, PartialEq, Debug)]
pub struct RpnExpr(pub Vec<RpnToken>);

impl Deref for RpnExpr {
    type Target = [RpnToken];
    fn deref(&self) -> &[RpnToken] {
        &self.0
    }
}

// what can sit on the parser's stack
#[derive(Clone, Copy, PartialEq, Debug)]
enum Pending {
    OParen,
    Op(Operator),
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RpnExpr, ParseError> {
        Self::parse(&mut ExprTokenizer::from_str(expr))
    }

    pub fn parse(lex: &mut impl Iterator<Item = ExprToken>) -> Result<RpnExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Stack::new();

        for token in lex {
            match token {
                ExprToken::Word(ref w) if is_operand(w) => out.push(RpnToken::Operand(w.clone())),
                ExprToken::OParen => stack.push(Pending::OParen),
                ExprToken::CParen => loop {
                    match stack.pop() {
                        Some(Pending::OParen) => break,
                        Some(Pending::Op(op)) => out.push(RpnToken::Operator(op)),
                        None => return Err(ParseError::UnmatchedParenthesis(')')),
                    }
                },
                // symbols and words that aren't operands (eg: 1.2.3)
                other => {
                    let op: Operator = other.as_str().parse()?;
                    // pop everything binding at least as tight so equal
                    // ranks fold left to right
                    while let Some(&Pending::Op(top)) = stack.peek() {
                        if op.compare(top) == Ordering::Greater {
                            break;
                        }
                        out.push(RpnToken::Operator(top));
                        stack.pop();
                    }
                    stack.push(Pending::Op(op));
                }
            }
        }
        for pending in stack.drain_top() {
            match pending {
                Pending::OParen => return Err(ParseError::UnmatchedParenthesis('(')),
                Pending::Op(op) => out.push(RpnToken::Operator(op)),
            }
        }
        Ok(RpnExpr(out))
    }
}
