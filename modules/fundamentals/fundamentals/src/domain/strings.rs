//! Domain service for text operations
//!
//! Reversal works on `char` (Unicode scalar values). Grapheme clusters made of
//! several scalars, such as a letter followed by a combining accent, come out
//! reordered.

use fundamentals_sdk::StringApi;
use tracing::debug;

/// Stateless service implementing [`StringApi`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StringService;

impl StringService {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl StringApi for StringService {
    fn reverse(&self, text: Option<&str>) -> Option<String> {
        let text = text?;
        debug!(len = text.len(), "reversing text");
        Some(text.chars().rev().collect())
    }

    fn is_palindrome(&self, text: Option<&str>) -> bool {
        // Empty input is not a palindrome.
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            debug!("absent or empty text, not a palindrome");
            return false;
        };

        self.reverse(Some(text))
            .is_some_and(|reversed| reversed == text)
    }
}
