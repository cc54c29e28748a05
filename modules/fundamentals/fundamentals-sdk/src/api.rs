//! Fundamentals API traits and types
//!
//! Contract traits for the calculator and string services.

/// Calculator API trait
///
/// Integer arithmetic and classification over `i64`.
pub trait CalculatorApi: Send + Sync {
    /// Add two numbers and return the sum.
    ///
    /// Overflow wraps around in two's complement and never panics.
    fn add(&self, a: i64, b: i64) -> i64;

    /// Add two numbers, reporting overflow instead of wrapping.
    ///
    /// # Errors
    /// Returns `CalculatorError::Overflow` if the sum does not fit in `i64`.
    fn checked_add(&self, a: i64, b: i64) -> Result<i64, CalculatorError>;

    /// Returns `true` if `n` is evenly divisible by 2. Zero is even.
    fn is_even(&self, n: i64) -> bool;
}

/// String API trait
///
/// Text operations where an absent input (`None`) is a normal value, not an error.
pub trait StringApi: Send + Sync {
    /// Reverse `text` by `char`.
    ///
    /// `None` propagates as `None`. Combining sequences are not kept together.
    fn reverse(&self, text: Option<&str>) -> Option<String>;

    /// Returns `true` if `text` is non-empty and equal to its own reversal.
    ///
    /// Absent and empty inputs are never palindromes. No case or whitespace
    /// normalization is applied.
    fn is_palindrome(&self, text: Option<&str>) -> bool;
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("integer overflow: {a} + {b} does not fit in i64")]
    Overflow { a: i64, b: i64 },
}
