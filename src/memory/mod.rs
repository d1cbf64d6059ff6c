mod limiter;

pub use self::limiter::{BudgetExceededError, ByteBudget};
