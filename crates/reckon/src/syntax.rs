//! Syntax definition.

use std::{fmt, mem};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinOp {
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the syntax tree. Children are owned by their parent.
///
/// Operator chains such as `1+1+...+1` nest to the left without bound, so
/// the tree is displayed and dropped without recursion.
#[derive(Debug, PartialEq)]
pub enum Expr {
    Literal(f64),
    BinaryOp {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    UnaryMinus(Box<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Item<'a> {
            Expr(&'a Expr),
            Text(&'static str),
        }

        let mut stack = vec![Item::Expr(self)];
        while let Some(item) = stack.pop() {
            match item {
                Item::Text(text) => f.write_str(text)?,
                Item::Expr(Self::Literal(n)) => write!(f, "{}", n)?,
                Item::Expr(Self::BinaryOp { op, lhs, rhs }) => {
                    write!(f, "({} ", op)?;
                    stack.extend([
                        Item::Text(")"),
                        Item::Expr(rhs),
                        Item::Text(" "),
                        Item::Expr(lhs),
                    ]);
                }
                Item::Expr(Self::UnaryMinus(operand)) => {
                    f.write_str("(neg ")?;
                    stack.extend([Item::Text(")"), Item::Expr(operand)]);
                }
            }
        }
        Ok(())
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut children = vec![];
        take_children(self, &mut children);
        while let Some(mut child) = children.pop() {
            take_children(&mut child, &mut children);
        }
    }
}

/// Detach the children of `expr`, leaving leaves in their place.
fn take_children(expr: &mut Expr, out: &mut Vec<Box<Expr>>) {
    let leaf = || Box::new(Expr::Literal(0.0));
    match expr {
        Expr::Literal(..) => {}
        Expr::BinaryOp { lhs, rhs, .. } => {
            out.push(mem::replace(lhs, leaf()));
            out.push(mem::replace(rhs, leaf()));
        }
        Expr::UnaryMinus(operand) => out.push(mem::replace(operand, leaf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_sexpr() {
        let expr = Expr::BinaryOp {
            op: BinOp::Add,
            lhs: Box::new(Expr::Literal(2.0)),
            rhs: Box::new(Expr::BinaryOp {
                op: BinOp::Rem,
                lhs: Box::new(Expr::UnaryMinus(Box::new(Expr::Literal(3.5)))),
                rhs: Box::new(Expr::Literal(4.0)),
            }),
        };
        assert_eq!(expr.to_string(), "(+ 2 (% (neg 3.5) 4))");
    }

    #[test]
    fn long_chain() {
        let mut expr = Box::new(Expr::Literal(1.0));
        for _ in 0..200_000 {
            expr = Box::new(Expr::BinaryOp {
                op: BinOp::Sub,
                lhs: expr,
                rhs: Box::new(Expr::UnaryMinus(Box::new(Expr::Literal(1.0)))),
            });
        }
        let shown = expr.to_string();
        let prefix = "(- ".repeat(200_000) + "1 (neg 1)) (neg 1))";
        assert!(shown.starts_with(&prefix));
        assert_eq!(shown.len(), prefix.len() + (200_000 - 2) * " (neg 1))".len());
        drop(expr);
    }
}
