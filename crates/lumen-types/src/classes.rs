//! CSS class composition.

use std::fmt;

/// Ordered list of class tokens.
///
/// Tokens are kept in insertion order, empty tokens are dropped, and the
/// result is joined with a single space. Caller-supplied classes go through
/// [`ClassList::extend_raw`] last so they can override component styles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new(base: &str) -> Self {
        Self::default().with(base, true)
    }

    /// Add `token` when `enabled` holds.
    pub fn with(mut self, token: &str, enabled: bool) -> Self {
        let token = token.trim();
        if enabled && !token.is_empty() {
            self.tokens.push(token.to_string());
        }
        self
    }

    /// Append a whitespace separated class string as-is.
    pub fn extend_raw(mut self, classes: &str) -> Self {
        self.tokens.extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn build(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
