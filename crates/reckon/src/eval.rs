//! Evaluation of syntax trees.

use crate::{
    error::EvalError,
    syntax::{BinOp, Expr},
};

/// Compute the value of `expr`.
///
/// Only the final value is required to be finite; an infinite intermediate
/// result that later collapses to a finite one (e.g. `1 / (big * big)`) is
/// accepted.
pub fn eval(expr: &Expr) -> Result<f64, EvalError> {
    let value = eval_node(expr)?;
    if !value.is_finite() {
        tracing::debug!("rejected non-finite result: {}", value);
        return Err(EvalError::NonFiniteResult);
    }
    Ok(value)
}

enum Frame<'a> {
    Visit(&'a Expr),
    Negate,
    Apply(BinOp),
}

/// Post-order walk over the tree with an explicit stack, so that the depth
/// of the tree never reaches the call stack.
fn eval_node(expr: &Expr) -> Result<f64, EvalError> {
    let mut frames = vec![Frame::Visit(expr)];
    let mut values: Vec<f64> = vec![];
    while let Some(frame) = frames.pop() {
        match frame {
            Frame::Visit(Expr::Literal(n)) => values.push(*n),
            Frame::Visit(Expr::UnaryMinus(operand)) => {
                frames.extend([Frame::Negate, Frame::Visit(operand)]);
            }
            Frame::Visit(Expr::BinaryOp { op, lhs, rhs }) => {
                frames.extend([Frame::Apply(*op), Frame::Visit(rhs), Frame::Visit(lhs)]);
            }
            Frame::Negate => {
                if let Some(value) = values.last_mut() {
                    *value = -*value;
                }
            }
            Frame::Apply(op) => {
                let rhs = values.pop().unwrap_or(f64::NAN);
                let lhs = values.pop().unwrap_or(f64::NAN);
                values.push(apply(op, lhs, rhs)?);
            }
        }
    }
    Ok(values.pop().unwrap_or(f64::NAN))
}

/// Apply a binary operator to two operands.
///
/// `%` is the truncating remainder: the sign of the result follows the
/// dividend, as in `a - b * trunc(a / b)`.
pub fn apply(op: BinOp, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    match op {
        BinOp::Add => Ok(lhs + rhs),
        BinOp::Sub => Ok(lhs - rhs),
        BinOp::Mul => Ok(lhs * rhs),
        BinOp::Div | BinOp::Rem if rhs == 0.0 => Err(EvalError::DivisionByZero),
        BinOp::Div => Ok(lhs / rhs),
        BinOp::Rem => Ok(lhs % rhs),
    }
}
