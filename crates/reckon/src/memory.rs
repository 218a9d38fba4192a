//! The memory register (`MC`, `MR`, `M+`, `M-`).

use crate::error::EvalError;

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Memory {
    value: f64,
}

impl Memory {
    pub const fn new() -> Self {
        Self { value: 0.0 }
    }

    /// `MC`
    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// `MR`
    pub fn recall(&self) -> f64 {
        self.value
    }

    /// `M+`
    pub fn add(&mut self, operand: f64) -> Result<f64, EvalError> {
        self.store(self.value + operand)
    }

    /// `M-`
    pub fn subtract(&mut self, operand: f64) -> Result<f64, EvalError> {
        self.store(self.value - operand)
    }

    fn store(&mut self, value: f64) -> Result<f64, EvalError> {
        if !value.is_finite() {
            return Err(EvalError::NonFiniteResult);
        }
        self.value = value;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_and_clear() {
        let mut memory = Memory::new();
        assert_eq!(memory.recall(), 0.0);

        assert_eq!(memory.add(5.0), Ok(5.0));
        assert_eq!(memory.add(2.5), Ok(7.5));
        assert_eq!(memory.subtract(10.0), Ok(-2.5));
        assert_eq!(memory.recall(), -2.5);

        memory.clear();
        assert_eq!(memory.recall(), 0.0);
    }

    #[test]
    fn overflow_leaves_register_unchanged() {
        let mut memory = Memory::new();
        memory.add(f64::MAX).unwrap();
        assert_eq!(memory.add(f64::MAX), Err(EvalError::NonFiniteResult));
        assert_eq!(memory.recall(), f64::MAX);

        assert_eq!(memory.add(f64::NAN), Err(EvalError::NonFiniteResult));
        assert_eq!(memory.recall(), f64::MAX);
    }
}
