use crate::operator::Operator;
use crate::parser::{RpnExpr, RpnToken};
use std::fmt;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a str),
    Node(Operator, Box<AST<'a>>, Box<AST<'a>>),
}

impl RpnExpr {
    // None when the postfix doesn't reduce to a single tree
    fn build_ast(&self) -> Option<AST> {
        let mut ops = Vec::new();
        for token in self.0.iter() {
            match *token {
                RpnToken::Operand(ref x) => ops.push(AST::Leaf(x)),
                RpnToken::Operator(op) => {
                    let rhs = ops.pop()?;
                    let lhs = ops.pop()?;
                    ops.push(AST::Node(op, Box::new(lhs), Box::new(rhs)));
                }
            }
        }
        match (ops.pop(), ops.is_empty()) {
            (Some(root), true) => Some(root),
            _ => None,
        }
    }

    /// Space separated postfix form, eg: `pv 100 > uv 50 < &&`
    pub fn postfix(&self) -> String {
        self.0
            .iter()
            .map(|token| match token {
                RpnToken::Operand(x) => x.clone(),
                RpnToken::Operator(op) => op.to_string(),
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

// Leaves never need parens
const LEAF_PRIORITY: u8 = u8::MAX;

fn printer(root: &AST) -> (String, u8) {
    match root {
        AST::Leaf(x) => (x.to_string(), LEAF_PRIORITY),
        AST::Node(op, lhs, rhs) => {
            let (lhs, rhs) = (printer(lhs), printer(rhs));
            let prec = op.priority();
            // everything is left associative: 'a-(b-c)' keeps its parens,
            // '(a-b)-c' doesn't need them
            let lh = if prec > lhs.1 {
                format!("({})", lhs.0)
            } else {
                lhs.0
            };
            let rh = if prec >= rhs.1 {
                format!("({})", rhs.0)
            } else {
                rhs.0
            };
            (format!("{} {} {}", lh, op, rh), prec)
        }
    }
}

impl fmt::Display for RpnExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.build_ast() {
            Some(ast) => write!(f, "{}", printer(&ast).0),
            None => write!(f, "{}", self.postfix()),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
