//! Calculator session state.
//!
//! [`Calculator`] holds what a front-end shows between keystrokes: the
//! expression being typed, the display line, the live preview and the memory
//! register. Each action is a plain method call; completed calculations are
//! handed to a [`Recorder`].

use crate::{
    config::Config,
    display::format_number,
    error::Error,
    evaluate_with_config,
    history::{Category, Entry, Recorder},
    memory::Memory,
    scientific::Function,
};

/// The text shown after a failed action.
pub const ERROR_DISPLAY: &str = "Error";

#[derive(Debug, Clone)]
pub struct Calculator {
    config: Config,
    expression: String,
    display: String,
    preview: Option<String>,
    new_calculation: bool,
    memory: Memory,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            expression: String::new(),
            display: "0".to_owned(),
            preview: None,
            new_calculation: true,
            memory: Memory::new(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// The formatted value of the expression typed so far, if it evaluates.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_new_calculation(&self) -> bool {
        self.new_calculation
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Append typed text to the expression.
    ///
    /// The first input after a completed calculation starts a new expression.
    pub fn input(&mut self, text: &str) {
        if self.new_calculation {
            self.expression = text.to_owned();
            self.display = text.to_owned();
            self.new_calculation = false;
        } else {
            self.expression.push_str(text);
            if self.display == "0" {
                self.display = text.to_owned();
            } else {
                self.display.push_str(text);
            }
        }
        self.refresh_preview();
    }

    /// Evaluate the expression and record it on success.
    pub fn submit<R: Recorder>(&mut self, mut recorder: R) -> Result<f64, Error> {
        let span = tracing::debug_span!("submit", expression = %self.expression);
        let _entered = span.enter();

        self.new_calculation = true;
        self.preview = None;
        match evaluate_with_config(&self.expression, &self.config) {
            Ok(value) => {
                self.display = format_number(value);
                recorder.record(Entry {
                    expression: self.expression.clone(),
                    result: self.display.clone(),
                    category: Category::Standard,
                });
                Ok(value)
            }
            Err(err) => {
                tracing::debug!("submit failed: {}", err);
                self.display = ERROR_DISPLAY.to_owned();
                Err(err)
            }
        }
    }

    pub fn clear(&mut self) {
        self.expression.clear();
        self.display = "0".to_owned();
        self.preview = None;
        self.new_calculation = true;
    }

    /// Apply a scientific function to the displayed value and record it on
    /// success.
    pub fn apply<R: Recorder>(&mut self, func: Function, mut recorder: R) -> Result<f64, Error> {
        self.new_calculation = true;
        self.preview = None;
        let result = self
            .current_value()
            .and_then(|operand| Ok((operand, func.apply(operand)?)));
        match result {
            Ok((operand, value)) => {
                self.display = format_number(value);
                recorder.record(Entry {
                    expression: format!("{}({})", func, format_number(operand)),
                    result: self.display.clone(),
                    category: Category::Scientific,
                });
                Ok(value)
            }
            Err(err) => {
                tracing::debug!("{} failed: {}", func, err);
                self.display = ERROR_DISPLAY.to_owned();
                Err(err)
            }
        }
    }

    /// `MC`
    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }

    /// `MR`: replace the expression with the stored value.
    pub fn memory_recall(&mut self) -> f64 {
        let value = self.memory.recall();
        self.expression = value.to_string();
        self.display = format_number(value);
        self.new_calculation = false;
        self.refresh_preview();
        value
    }

    /// `M+`: add the displayed value to the register.
    pub fn memory_add(&mut self) -> Result<f64, Error> {
        let operand = self.current_value()?;
        Ok(self.memory.add(operand)?)
    }

    /// `M-`: subtract the displayed value from the register.
    pub fn memory_subtract(&mut self) -> Result<f64, Error> {
        let operand = self.current_value()?;
        Ok(self.memory.subtract(operand)?)
    }

    /// The numeric value of the display line.
    ///
    /// A formatted result is read back directly; anything else is evaluated
    /// as an expression.
    pub fn current_value(&self) -> Result<f64, Error> {
        match self.display.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => evaluate_with_config(&self.display, &self.config),
        }
    }

    fn refresh_preview(&mut self) {
        self.preview = evaluate_with_config(&self.expression, &self.config)
            .ok()
            .map(format_number);
    }
}
