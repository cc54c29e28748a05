//! Domain layer for the fundamentals module

pub mod calculator;
pub mod strings;

pub use calculator::CalculatorService;
pub use strings::StringService;
