//! A safe arithmetic expression evaluator for calculators.
//!
//! The accepted language consists of decimal numbers, the binary operators
//! `+ - * / %`, unary minus and parentheses. There are no identifiers,
//! calls or assignments, so evaluating user input cannot reach anything but
//! floating-point arithmetic.
//!
//! ```
//! assert_eq!(reckon::evaluate("2+3*4"), Ok(14.0));
//! assert!(reckon::evaluate("5/0").is_err());
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod eval;
pub mod history;
pub mod lexer;
pub mod memory;
pub mod parser;
pub mod scientific;
pub mod session;
pub mod syntax;

pub use crate::{
    config::Config,
    error::{Error, ErrorKind, EvalError, LexError, ParseError},
    parser::parse,
};

/// Evaluate an arithmetic expression.
///
/// The result is always a finite number. Calls share no state with each other.
pub fn evaluate(input: &str) -> Result<f64, Error> {
    evaluate_with_config(input, &Config::new())
}

pub fn evaluate_with_config(input: &str, config: &Config) -> Result<f64, Error> {
    let span = tracing::trace_span!("evaluate");
    let _entered = span.enter();

    let expr = parser::parse_with_config(input, config).map_err(|err| {
        tracing::debug!("rejected input {:?}: {}", input, err);
        err
    })?;
    let value = eval::eval(&expr)?;
    tracing::trace!("{} => {}", expr, value);
    Ok(value)
}
