//! Parser configuration.

/// Options controlling [`parse_with`](crate::parse_with) and
/// [`format_with`](crate::format_with).
///
/// The defaults accept any input the grammar accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum accepted length in bytes, measured after normalization.
    ///
    /// Set this when parsing untrusted input. Default: None (no cap)
    pub max_length: Option<usize>,
}

impl ParseOptions {
    /// Creates options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum accepted length.
    #[must_use]
    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Removes the length cap.
    #[must_use]
    pub const fn without_max_length(mut self) -> Self {
        self.max_length = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_cap() {
        assert_eq!(ParseOptions::default().max_length, None);
    }

    #[test]
    fn builder_pattern() {
        let options = ParseOptions::new().with_max_length(256);
        assert_eq!(options.max_length, Some(256));
        assert_eq!(options.without_max_length().max_length, None);
    }
}
