//! Recursive-descent parser.
//!
//! ```text
//! expr      := term (('+' | '-') term)*
//! term      := unary (('*' | '/' | '%') unary)*
//! unary     := '-' unary | primary
//! primary   := NUMBER | '(' expr ')'
//! ```

use crate::{
    config::Config,
    error::{Error, ParseError},
    lexer::{Lexer, Spanned, Token},
    syntax::{BinOp, Expr},
};
use std::mem;

struct Parser<'source> {
    lexer: Lexer<'source>,
    lookahead: Spanned,
    end: usize,
    max_depth: usize,
    nesting: usize,
}

pub fn parse(input: &str) -> Result<Box<Expr>, Error> {
    parse_with_config(input, &Config::new())
}

pub fn parse_with_config(input: &str, config: &Config) -> Result<Box<Expr>, Error> {
    let span = tracing::trace_span!("parse");
    let _entered = span.enter();

    let mut parser = Parser::new(input, config)?;
    if let (_, Token::End, _) = parser.lookahead {
        return Err(ParseError::EmptyExpression.into());
    }

    let parsed = parser.expr()?;
    match parser.lookahead {
        (_, Token::End, _) => {
            tracing::trace!("accepted");
            Ok(parsed)
        }
        (position, Token::RParen, _) => Err(ParseError::UnmatchedParenthesis { position }.into()),
        (position, ..) => Err(ParseError::TrailingInput { position }.into()),
    }
}

impl<'source> Parser<'source> {
    fn new(input: &'source str, config: &Config) -> Result<Self, Error> {
        let end = input.len();
        let mut parser = Self {
            lexer: Lexer::new(input),
            lookahead: (end, Token::End, end),
            end,
            max_depth: config.max_depth,
            nesting: 0,
        };
        parser.bump()?;
        Ok(parser)
    }

    /// Replace the lookahead with the next token and return the old one.
    fn bump(&mut self) -> Result<Spanned, Error> {
        let next = match self.lexer.next().transpose()? {
            Some(tok) => tok,
            None => (self.end, Token::End, self.end),
        };
        tracing::trace!("offer token {}", next.1);
        Ok(mem::replace(&mut self.lookahead, next))
    }

    fn expr(&mut self) -> Result<Box<Expr>, Error> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.lookahead.1 {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Sub,
                _ => break Ok(lhs),
            };
            self.bump()?;
            let rhs = self.term()?;
            tracing::trace!("reduce: expr -> expr `{}' expr", op);
            lhs = Box::new(Expr::BinaryOp { op, lhs, rhs });
        }
    }

    fn term(&mut self) -> Result<Box<Expr>, Error> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.lookahead.1 {
                Token::Star => BinOp::Mul,
                Token::Slash => BinOp::Div,
                Token::Percent => BinOp::Rem,
                _ => break Ok(lhs),
            };
            self.bump()?;
            let rhs = self.unary()?;
            tracing::trace!("reduce: expr -> expr `{}' expr", op);
            lhs = Box::new(Expr::BinaryOp { op, lhs, rhs });
        }
    }

    fn unary(&mut self) -> Result<Box<Expr>, Error> {
        if self.lookahead.1 != Token::Minus {
            return self.primary();
        }
        let (position, ..) = self.bump()?;
        let operand = self.nested(position, Self::unary)?;
        tracing::trace!("reduce: unary -> `-' unary");
        Ok(Box::new(Expr::UnaryMinus(operand)))
    }

    fn primary(&mut self) -> Result<Box<Expr>, Error> {
        match self.lookahead {
            (_, Token::Number(n), _) => {
                self.bump()?;
                tracing::trace!("reduce: primary -> NUMBER");
                Ok(Box::new(Expr::Literal(n)))
            }
            (open, Token::LParen, _) => {
                self.bump()?;
                let inner = self.nested(open, Self::expr)?;
                match self.lookahead {
                    (_, Token::RParen, _) => {
                        self.bump()?;
                        tracing::trace!("reduce: primary -> `(' expr `)'");
                        Ok(inner)
                    }
                    (_, Token::End, _) => {
                        Err(ParseError::UnmatchedParenthesis { position: open }.into())
                    }
                    (position, ..) => Err(ParseError::UnexpectedToken { position }.into()),
                }
            }
            (position, tok, _) => {
                tracing::debug!("expected a number or `(', found {} at {}", tok, position);
                Err(ParseError::UnexpectedToken { position }.into())
            }
        }
    }

    /// Run a nested rule, bounding the recursion.
    ///
    /// Only parentheses and unary minus recurse; operator chains are folded
    /// in a loop and do not count against the limit.
    fn nested(
        &mut self,
        position: usize,
        rule: fn(&mut Self) -> Result<Box<Expr>, Error>,
    ) -> Result<Box<Expr>, Error> {
        if self.nesting >= self.max_depth {
            return Err(ParseError::NestingTooDeep { position }.into());
        }
        self.nesting += 1;
        let res = rule(self);
        self.nesting -= 1;
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexError;

    fn sexpr(input: &str) -> String {
        parse(input).unwrap().to_string()
    }

    #[test]
    fn precedence() {
        assert_eq!(sexpr("2+3*4"), "(+ 2 (* 3 4))");
        assert_eq!(sexpr("(2+3)*4"), "(* (+ 2 3) 4)");
        assert_eq!(sexpr("1-2-3"), "(- (- 1 2) 3)");
        assert_eq!(sexpr("8/4%3*2"), "(* (% (/ 8 4) 3) 2)");
    }

    #[test]
    fn unary_minus() {
        assert_eq!(sexpr("-2*3"), "(* (neg 2) 3)");
        assert_eq!(sexpr("2*-3"), "(* 2 (neg 3))");
        assert_eq!(sexpr("--1"), "(neg (neg 1))");
        assert_eq!(sexpr("2--1"), "(- 2 (neg 1))");
        assert_eq!(sexpr("-(1+2)"), "(neg (+ 1 2))");
    }

    #[test]
    fn redundant_parens() {
        assert_eq!(sexpr("((1.5))"), "1.5");
    }

    #[test]
    fn empty() {
        assert_eq!(parse(""), Err(ParseError::EmptyExpression.into()));
        assert_eq!(parse(" \t\n "), Err(ParseError::EmptyExpression.into()));
    }

    #[test]
    fn unexpected_token() {
        assert_eq!(
            parse("2+"),
            Err(ParseError::UnexpectedToken { position: 2 }.into())
        );
        assert_eq!(
            parse("()"),
            Err(ParseError::UnexpectedToken { position: 1 }.into())
        );
        assert_eq!(
            parse("*2"),
            Err(ParseError::UnexpectedToken { position: 0 }.into())
        );
        assert_eq!(
            parse(")"),
            Err(ParseError::UnexpectedToken { position: 0 }.into())
        );
        assert_eq!(
            parse("(2 3)"),
            Err(ParseError::UnexpectedToken { position: 3 }.into())
        );
    }

    #[test]
    fn unmatched_parenthesis() {
        assert_eq!(
            parse("(2+3"),
            Err(ParseError::UnmatchedParenthesis { position: 0 }.into())
        );
        assert_eq!(
            parse("1*((2)"),
            Err(ParseError::UnmatchedParenthesis { position: 2 }.into())
        );
        assert_eq!(
            parse("2+3)"),
            Err(ParseError::UnmatchedParenthesis { position: 3 }.into())
        );
    }

    #[test]
    fn trailing_input() {
        assert_eq!(
            parse("2 3"),
            Err(ParseError::TrailingInput { position: 2 }.into())
        );
        assert_eq!(
            parse("(1)(2)"),
            Err(ParseError::TrailingInput { position: 3 }.into())
        );
        assert_eq!(
            parse("1.2.3"),
            Err(ParseError::TrailingInput { position: 3 }.into())
        );
    }

    #[test]
    fn lexer_errors_are_forwarded() {
        assert_eq!(
            parse("(1 + x)"),
            Err(LexError::InvalidCharacter {
                position: 5,
                character: 'x'
            }
            .into())
        );
    }

    #[test]
    fn nesting_limit() {
        let mut config = Config::new();
        config.max_depth(3);

        assert!(parse_with_config("((1))", &config).is_ok());
        assert!(parse_with_config("---1", &config).is_ok());
        assert_eq!(
            parse_with_config("((((1))))", &config),
            Err(ParseError::NestingTooDeep { position: 3 }.into())
        );
        assert_eq!(
            parse_with_config("----1", &config),
            Err(ParseError::NestingTooDeep { position: 3 }.into())
        );
        assert_eq!(
            parse_with_config("-(-(1))", &config),
            Err(ParseError::NestingTooDeep { position: 3 }.into())
        );
    }

    #[test]
    fn chains_are_not_limited() {
        let mut config = Config::new();
        config.max_depth(1);

        assert_eq!(
            parse_with_config("1+2*3-4/5%6", &config).unwrap().to_string(),
            "(- (+ 1 (* 2 3)) (% (/ 4 5) 6))"
        );
        assert!(parse_with_config(&vec!["1"; 1000].join("*"), &config).is_ok());
    }

    #[test]
    fn deeply_nested_input_does_not_overflow() {
        let input = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        assert!(matches!(
            parse(&input),
            Err(Error::Parse(ParseError::NestingTooDeep { .. }))
        ));

        let input = "-".repeat(100_000) + "1";
        assert!(matches!(
            parse(&input),
            Err(Error::Parse(ParseError::NestingTooDeep { .. }))
        ));

        let input = vec!["1"; 100_000].join("+");
        assert!(parse(&input).is_ok());
    }
}
