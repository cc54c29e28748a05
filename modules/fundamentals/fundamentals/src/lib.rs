//! Fundamentals Module
//!
//! Two stateless domain services:
//!
//! - `domain/calculator.rs` - integer addition and parity
//! - `domain/strings.rs` - text reversal and palindrome detection
//!
//! Both implement the traits from `fundamentals-sdk`, so consumers can hold
//! them as `Arc<dyn CalculatorApi>` / `Arc<dyn StringApi>`.
//!
//! ```
//! use fundamentals::{CalculatorApi, CalculatorService, StringApi, StringService};
//!
//! let calculator = CalculatorService::new();
//! assert_eq!(calculator.add(-10, 5), -5);
//! assert!(calculator.is_even(0));
//!
//! let strings = StringService::new();
//! assert_eq!(strings.reverse(None), None);
//! assert!(strings.is_palindrome(Some("lol")));
//! assert!(!strings.is_palindrome(Some("")));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod domain;

pub use domain::{CalculatorService, StringService};
pub use fundamentals_sdk::{CalculatorApi, CalculatorError, StringApi};
