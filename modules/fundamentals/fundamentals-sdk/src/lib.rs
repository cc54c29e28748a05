//! Fundamentals SDK
//!
//! Contract crate for the fundamentals module:
//! - API traits (`CalculatorApi`, `StringApi`)
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use fundamentals_sdk::{CalculatorApi, StringApi};
//!
//! let calculator: Arc<dyn CalculatorApi> = Arc::new(fundamentals::CalculatorService::new());
//! assert_eq!(calculator.add(5, 10), 15);
//!
//! let strings: Arc<dyn StringApi> = Arc::new(fundamentals::StringService::new());
//! assert_eq!(strings.reverse(Some("hi")).as_deref(), Some("ih"));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAITS AND TYPES ===
mod api;
pub use api::{CalculatorApi, CalculatorError, StringApi};
