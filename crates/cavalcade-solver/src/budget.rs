//! Wall-clock budgets for cooperative search cancellation.

use std::time::{Duration, Instant};

/// Wall-clock budget for a single search invocation.
///
/// The budget is the only cancellation mechanism the searches have. It is
/// checked cooperatively at each recursive entry, not preemptively, and an
/// aborted search cannot be resumed. A zero budget makes the very first check
/// fire, which gives deterministic timeout behavior in tests without any real
/// waiting.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use cavalcade_solver::SearchBudget;
///
/// let deadline = SearchBudget::new(Duration::ZERO).start();
/// assert!(deadline.expired());
///
/// let deadline = SearchBudget::DEFAULT.start();
/// assert!(!deadline.expired());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    budget: Duration,
}

impl SearchBudget {
    /// The default budget of five minutes.
    pub const DEFAULT: Self = Self::new(Duration::from_secs(300));

    /// Creates a budget of the given duration. Zero is allowed.
    #[must_use]
    pub const fn new(budget: Duration) -> Self {
        Self { budget }
    }

    /// Returns the budgeted duration.
    #[must_use]
    pub const fn duration(self) -> Duration {
        self.budget
    }

    /// Starts the clock for one search invocation.
    #[must_use]
    pub fn start(self) -> Deadline {
        Deadline {
            started: Instant::now(),
            budget: self.budget,
        }
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A running deadline: the instant a search started plus its budget.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    budget: Duration,
}

impl Deadline {
    /// Returns `true` once the budget has elapsed.
    ///
    /// Checked at each recursive entry; a deep chain between two checks may
    /// slightly overrun the budget.
    #[must_use]
    pub fn expired(self) -> bool {
        self.started.elapsed() >= self.budget
    }
}
