use crate::parser::ParseError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add, Sub, Mul, Div,
    Gt, Lt, Ge, Le, Eq,
    And, Or,
}

impl Operator {
    // 1 binds loosest. Comparisons share a rank so `a<b==c` folds left.
    pub fn priority(self) -> u8 {
        match self {
            Operator::Or => 1,
            Operator::And => 2,
            Operator::Gt | Operator::Lt | Operator::Ge | Operator::Le | Operator::Eq => 3,
            Operator::Add | Operator::Sub => 4,
            Operator::Mul | Operator::Div => 5,
        }
    }

    /// Orders two operators by binding strength. This is the only place
    /// the shunting parser looks at to decide when to pop.
    pub fn compare(self, other: Operator) -> Ordering {
        self.priority().cmp(&other.priority())
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Eq => "==",
            Operator::And => "&&",
            Operator::Or => "||",
        }
    }

    /// Applies the operator to `lhs op rhs`. Comparisons and logic yield
    /// 1.0 / 0.0, any nonzero operand counts as true. Division by zero is
    /// left to IEEE semantics.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        let truth = |b: bool| if b { 1.0 } else { 0.0 };
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
            Operator::Gt => truth(lhs > rhs),
            Operator::Lt => truth(lhs < rhs),
            Operator::Ge => truth(lhs >= rhs),
            Operator::Le => truth(lhs <= rhs),
            Operator::Eq => truth(lhs == rhs),
            Operator::And => truth(lhs != 0.0 && rhs != 0.0),
            Operator::Or => truth(lhs != 0.0 || rhs != 0.0),
        }
    }
}

impl FromStr for Operator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            ">" => Ok(Operator::Gt),
            "<" => Ok(Operator::Lt),
            ">=" => Ok(Operator::Ge),
            "<=" => Ok(Operator::Le),
            "=" | "==" => Ok(Operator::Eq),
            "&&" => Ok(Operator::And),
            "||" => Ok(Operator::Or),
            _ => Err(ParseError::UnsupportedOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn priority(op: &str) -> Result<u8, ParseError> {
    Ok(op.parse::<Operator>()?.priority())
}

pub fn compare(op1: &str, op2: &str) -> Result<Ordering, ParseError> {
    let (op1, op2) = (op1.parse::<Operator>()?, op2.parse::<Operator>()?);
    Ok(op1.compare(op2))
}

/// Reads a numeric operand. Literals too large for an f64 are rejected
/// rather than rounded to infinity, only `inf`/`infinity`/`nan` spelled
/// out give non-finite values.
pub fn parse_number(token: &str) -> Option<f64> {
    let value = token.parse::<f64>().ok()?;
    if value.is_finite() {
        return Some(value);
    }
    let unsigned = token.trim_start_matches(&['+', '-'][..]).to_ascii_lowercase();
    match unsigned.as_str() {
        "inf" | "infinity" | "nan" => Some(value),
        _ => None,
    }
}

/// A token is an operand if it reads as a float or looks like a variable
/// name (ASCII letters and digits only).
pub fn is_operand(token: &str) -> bool {
    if parse_number(token).is_some() {
        return true;
    }
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphanumeric())
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_table() {
        let ranks = [
            ("||", 1), ("&&", 2),
            ("=", 3), ("==", 3), (">=", 3), ("<=", 3), (">", 3), ("<", 3),
            ("+", 4), ("-", 4), ("*", 5), ("/", 5),
        ];
        for (op, rank) in ranks.iter() {
            assert_eq!(priority(op), Ok(*rank), "priority of {}", op);
        }
    }

    #[test]
    fn unknown_operators_fail() {
        for op in ["+-+", "%", "!", "=>", "&", "", "("] {
            assert_eq!(priority(op), Err(ParseError::UnsupportedOperator(op.to_string())));
        }
        assert_eq!(compare("+", "^"), Err(ParseError::UnsupportedOperator("^".to_string())));
        assert_eq!(compare("**", "+"), Err(ParseError::UnsupportedOperator("**".to_string())));
    }

    #[test]
    fn compare_operators() {
        assert_eq!(compare("*", "+"), Ok(Ordering::Greater));
        assert_eq!(compare("-", "+"), Ok(Ordering::Equal));
        assert_eq!(compare("=", "<="), Ok(Ordering::Equal));
        assert_eq!(compare("||", "&&"), Ok(Ordering::Less));
        assert_eq!(compare("&&", ">"), Ok(Ordering::Less));
    }

    #[test]
    fn eq_synonyms() {
        assert_eq!("=".parse::<Operator>(), Ok(Operator::Eq));
        assert_eq!("==".parse::<Operator>(), Ok(Operator::Eq));
        assert_eq!(Operator::Eq.to_string(), "==");
    }

    #[test]
    fn apply_operators() {
        assert_eq!(Operator::Sub.apply(5.0, 3.0), 2.0);
        assert_eq!(Operator::Div.apply(1.0, 4.0), 0.25);
        assert_eq!(Operator::Lt.apply(1.0, 2.0), 1.0);
        assert_eq!(Operator::Ge.apply(1.0, 2.0), 0.0);
        assert_eq!(Operator::Le.apply(2.0, 2.0), 1.0);
        assert_eq!(Operator::And.apply(-3.0, 0.5), 1.0);
        assert_eq!(Operator::And.apply(1.0, 0.0), 0.0);
        assert_eq!(Operator::Or.apply(0.0, 0.0), 0.0);
        assert_eq!(Operator::Or.apply(0.0, 7.0), 1.0);
        assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
        assert!(Operator::Div.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn number_literals() {
        assert_eq!(parse_number("0.75"), Some(0.75));
        assert_eq!(parse_number("-2.5e1"), Some(-25.0));
        assert_eq!(parse_number("1e400"), None);
        assert_eq!(parse_number("-1e400"), None);
        assert_eq!(parse_number("pv"), None);
        assert_eq!(parse_number("0x1p3"), None);
        assert_eq!(parse_number("inf"), Some(f64::INFINITY));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert!(parse_number("NaN").unwrap().is_nan());
        assert_eq!(parse_number("1e-400"), Some(0.0));
    }

    #[test]
    fn operand_classification() {
        for token in ["100", "0.75", "1e5", "pv", "uv2", "2x", "inf", "NaN"] {
            assert!(is_operand(token), "{} should be an operand", token);
        }
        for token in ["", ">", "1.2.3", ".", "a.b", "x_y", "(", "+-+"] {
            assert!(!is_operand(token), "{} should not be an operand", token);
        }
    }
}
