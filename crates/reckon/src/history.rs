//! The interface to the calculation history.

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Standard,
    Scientific,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Scientific => "scientific",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A completed calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub expression: String,
    /// The formatted result, as displayed.
    pub result: String,
    pub category: Category,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} = {}", self.category, self.expression, self.result)
    }
}

/// A sink for completed calculations.
///
/// Storage and presentation of the history are up to the implementor.
pub trait Recorder {
    fn record(&mut self, entry: Entry);
}

impl Recorder for Vec<Entry> {
    fn record(&mut self, entry: Entry) {
        self.push(entry);
    }
}

impl<R: ?Sized + Recorder> Recorder for &mut R {
    fn record(&mut self, entry: Entry) {
        (**self).record(entry)
    }
}
