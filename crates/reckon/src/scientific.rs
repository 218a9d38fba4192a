//! Single-argument scientific functions.
//!
//! These are applied to an already computed value by the caller and are not
//! part of the expression grammar.

use crate::error::EvalError;
use std::{fmt, str::FromStr};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine of an angle in radians.
    Sin,
    /// Cosine of an angle in radians.
    Cos,
    /// Tangent of an angle in radians.
    Tan,
    Sqrt,
    /// Base-10 logarithm.
    Log,
}

impl Function {
    pub const ALL: [Function; 5] = [Self::Sin, Self::Cos, Self::Tan, Self::Sqrt, Self::Log];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
        }
    }

    pub fn apply(self, operand: f64) -> Result<f64, EvalError> {
        let value = match self {
            Self::Sin => operand.sin(),
            Self::Cos => operand.cos(),
            Self::Tan => operand.tan(),
            Self::Sqrt => operand.sqrt(),
            Self::Log => operand.log10(),
        };
        if !value.is_finite() {
            tracing::debug!("{}({}) is not finite", self, operand);
            return Err(EvalError::NonFiniteResult);
        }
        Ok(value)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown function: {name}")]
pub struct UnknownFunction {
    pub name: String,
}

impl FromStr for Function {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "√" {
            return Ok(Self::Sqrt);
        }
        Self::ALL
            .into_iter()
            .find(|func| func.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFunction { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply() {
        assert_eq!(Function::Sin.apply(0.0), Ok(0.0));
        assert_eq!(Function::Cos.apply(0.0), Ok(1.0));
        assert_eq!(Function::Sqrt.apply(16.0), Ok(4.0));
        let log = Function::Log.apply(1000.0).unwrap();
        assert!((log - 3.0).abs() < 1e-12);
        let tan = Function::Tan.apply(std::f64::consts::FRAC_PI_4).unwrap();
        assert!((tan - 1.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_results() {
        assert_eq!(Function::Sqrt.apply(-1.0), Err(EvalError::NonFiniteResult));
        assert_eq!(Function::Log.apply(0.0), Err(EvalError::NonFiniteResult));
        assert_eq!(Function::Log.apply(-5.0), Err(EvalError::NonFiniteResult));
    }

    #[test]
    fn parse_names() {
        assert_eq!("sin".parse::<Function>(), Ok(Function::Sin));
        assert_eq!("COS".parse::<Function>(), Ok(Function::Cos));
        assert_eq!("√".parse::<Function>(), Ok(Function::Sqrt));
        assert_eq!(
            "exp".parse::<Function>(),
            Err(UnknownFunction {
                name: "exp".to_owned()
            })
        );
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        for func in Function::ALL {
            assert_eq!(func.to_string().parse::<Function>(), Ok(func));
        }
    }
}
