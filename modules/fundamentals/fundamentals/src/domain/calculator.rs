//! Domain service for integer operations

use fundamentals_sdk::{CalculatorApi, CalculatorError};
use tracing::debug;

/// Stateless service implementing [`CalculatorApi`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CalculatorService;

impl CalculatorService {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorApi for CalculatorService {
    fn add(&self, a: i64, b: i64) -> i64 {
        debug!(a, b, "performing addition");
        a.wrapping_add(b)
    }

    fn checked_add(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        debug!(a, b, "performing checked addition");
        a.checked_add(b).ok_or(CalculatorError::Overflow { a, b })
    }

    fn is_even(&self, n: i64) -> bool {
        debug!(n, "classifying parity");
        n % 2 == 0
    }
}
