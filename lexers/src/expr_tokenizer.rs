#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;
use std::iter::Filter;

#[derive(Clone, PartialEq, Debug)]
pub enum ExprToken {
    Word(String),   // run of [A-Za-z0-9.]: a number, a variable or garbage
    Symbol(String), // run of anything else, meant to be an operator
    OParen,
    CParen,
}

impl ExprToken {
    pub fn as_str(&self) -> &str {
        match self {
            ExprToken::Word(w) => w,
            ExprToken::Symbol(s) => s,
            ExprToken::OParen => "(",
            ExprToken::CParen => ")",
        }
    }
}

impl fmt::Display for ExprToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn is_word_char(c: &char) -> bool {
    c.is_ascii_alphanumeric() || *c == '.'
}

fn is_symbol_char(c: &char) -> bool {
    !is_word_char(c) && *c != '(' && *c != ')'
}

fn not_blank(c: &char) -> bool {
    *c != ' ' && *c != '\t'
}

type NonBlank<I> = Filter<I, fn(&char) -> bool>;

/// Splits an expression into words, operator symbols and brackets.
///
/// Blanks (space and tab) are dropped before scanning so `1 0` reads as
/// `10`. Symbol runs are never split: `+-+` comes out as one token and it's
/// up to the parser to reject it.
pub struct ExprTokenizer<I: Iterator<Item=char>> {
    src: Scanner<NonBlank<I>>,
}

impl<I: Iterator<Item=char>> ExprTokenizer<I> {
    pub fn new(source: I) -> Self {
        let src = source.filter(not_blank as fn(&char) -> bool);
        ExprTokenizer{src: Scanner::new(src)}
    }

    fn get_token(&mut self) -> Option<ExprToken> {
        let token = match self.src.next()? {
            '(' => ExprToken::OParen,
            ')' => ExprToken::CParen,
            c if is_word_char(&c) => {
                self.src.skip_all_if(is_word_char);
                ExprToken::Word(self.src.extract_string())
            }
            _ => {
                self.src.skip_all_if(is_symbol_char);
                ExprToken::Symbol(self.src.extract_string())
            }
        };
        self.src.ignore();
        Some(token)
    }
}

impl<'a> ExprTokenizer<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Self::new(source.chars())
    }
}

impl<I: Iterator<Item=char>> Iterator for ExprTokenizer<I> {
    type Item = ExprToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

pub fn tokenize(expr: &str) -> Vec<ExprToken> {
    ExprTokenizer::from_str(expr).collect()
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{tokenize, ExprToken, ExprTokenizer};

    fn w(s: &str) -> ExprToken { ExprToken::Word(s.to_string()) }
    fn s(s: &str) -> ExprToken { ExprToken::Symbol(s.to_string()) }

    #[test]
    fn rule_expression() {
        let mut lx = ExprTokenizer::from_str("pv>100&&uv<50");
        let expect = [w("pv"), s(">"), w("100"), s("&&"), w("uv"), s("<"), w("50")];
        for exp_token in expect.iter() {
            let token = lx.next().unwrap();
            assert_eq!(*exp_token, token);
        }
        assert_eq!(lx.next(), None);
    }

    #[test]
    fn brackets_split_symbols() {
        let expect = vec![
            w("5"), s(">"), w("4"), s("||"), ExprToken::OParen,
            w("2"), s("<"), w("1"), ExprToken::CParen, s("&&"),
            ExprToken::OParen, ExprToken::OParen, w("1"), s("+"), w("2"),
            s("=="), w("3"), ExprToken::CParen, ExprToken::CParen,
        ];
        assert_eq!(tokenize("5>4||(2<1)&&((1+2==3))"), expect);
        assert_eq!(tokenize("1+)"), vec![w("1"), s("+"), ExprToken::CParen]);
    }

    #[test]
    fn blanks_are_dropped() {
        assert_eq!(tokenize("(5>4  ||    \t(2<1))&&  (1  +2==3)"),
                   tokenize("(5>4||(2<1))&&(1+2==3)"));
        assert_eq!(tokenize(" 1 0 . 5 "), vec![w("10.5")]);
        assert_eq!(tokenize("  \t "), vec![]);
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn symbol_runs_stay_whole() {
        assert_eq!(tokenize("1+-+2"), vec![w("1"), s("+-+"), w("2")]);
        assert_eq!(tokenize("a >= b"), vec![w("a"), s(">="), w("b")]);
        assert_eq!(tokenize("a_b"), vec![w("a"), s("_"), w("b")]);
        assert_eq!(tokenize("1\n2"), vec![w("1"), s("\n"), w("2")]);
    }

    #[test]
    fn words_keep_dots() {
        assert_eq!(tokenize("1/2+0.75"), vec![w("1"), s("/"), w("2"), s("+"), w("0.75")]);
        assert_eq!(tokenize("1.2.3*x9"), vec![w("1.2.3"), s("*"), w("x9")]);
    }

    #[test]
    fn token_text() {
        let text: Vec<String> = tokenize("(a<=1)").iter().map(|t| t.to_string()).collect();
        assert_eq!(text, vec!["(", "a", "<=", "1", ")"]);
        assert_eq!(ExprToken::CParen.as_str(), ")");
    }
}
