use thiserror::Error;

/// An error that occurs when the configured input size limit is exceeded.
#[derive(Error, Debug, PartialEq, Eq, Copy, Clone)]
#[error("Size limit of {max} bytes has been exceeded: {current_usage} bytes were fed.")]
pub struct BudgetExceededError {
    pub current_usage: usize,
    pub max: usize,
}

/// Counts input bytes against an optional upper bound.
///
/// Once the bound is crossed the budget stays exceeded for the rest of the
/// session, however the bytes keep being counted.
#[derive(Debug)]
pub struct ByteBudget {
    current_usage: usize,
    max: Option<usize>,
}

impl ByteBudget {
    pub fn new(max: Option<usize>) -> Self {
        ByteBudget {
            current_usage: 0,
            max,
        }
    }

    #[inline]
    pub fn current_usage(&self) -> usize {
        self.current_usage
    }

    #[inline]
    pub fn is_exceeded(&self) -> bool {
        self.max.is_some_and(|max| self.current_usage > max)
    }

    #[inline]
    pub fn consume(&mut self, byte_count: usize) -> Result<(), BudgetExceededError> {
        self.current_usage = self.current_usage.saturating_add(byte_count);

        match self.max {
            Some(max) if self.current_usage > max => Err(BudgetExceededError {
                current_usage: self.current_usage,
                max,
            }),
            _ => Ok(()),
        }
    }
}
