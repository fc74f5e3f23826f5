//! Parser configuration for index limits and brace handling.
//!
//! [`FormatConfig`] controls the placeholder index ceiling and how braces
//! outside the `{n}` context are treated. The defaults (doubled-brace
//! escapes, indices up to 65535) suit almost every caller; the builder
//! exists for the rare template source that needs stricter validation.
//!
//! # Example
//!
//! ```
//! use fmtkit_core::{BracePolicy, FormatConfig};
//!
//! // Default limits (doubling escapes, max index 65535)
//! let config = FormatConfig::default();
//!
//! // Reject any brace that is not part of a `{n}` pair
//! let config = FormatConfig::new()
//!     .with_brace_policy(BracePolicy::Reject);
//!
//! // Clamp templates to a handful of arguments
//! let config = FormatConfig::new().with_max_index(7);
//! ```

/// How braces outside the `{n}` context are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BracePolicy {
    /// `{{` and `}}` are escapes for literal `{` and `}`.
    ///
    /// This is the lossless choice: any text can be expressed as a
    /// template by doubling its braces.
    #[default]
    Double,

    /// Braces are reserved for placeholders.
    ///
    /// Any `{` that does not open a valid `{n}` placeholder is a
    /// [`MalformedPlaceholder`](crate::Error::MalformedPlaceholder)
    /// error, and any `}` outside a placeholder is an
    /// [`UnmatchedClosingBrace`](crate::Error::UnmatchedClosingBrace)
    /// error. Literal braces cannot be expressed under this policy.
    Reject,
}

/// Configuration for template parsing.
///
/// # Default Values
///
/// | Setting | Default |
/// |---------|---------|
/// | `max_index` | 65535 |
/// | `brace_policy` | [`BracePolicy::Double`] |
///
/// The index ceiling keeps an absurd digit run like `{18446744073709551616}`
/// from being treated as a plausible argument reference; anything above the
/// ceiling is reported as a malformed placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Highest placeholder index accepted by the parser.
    ///
    /// Digit runs parsing above this value (or overflowing `usize`) fail
    /// with [`MalformedPlaceholder`](crate::Error::MalformedPlaceholder).
    pub max_index: usize,

    /// How braces outside the `{n}` context are handled.
    pub brace_policy: BracePolicy,
}

impl Default for FormatConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FormatConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        max_index: u16::MAX as usize,
        brace_policy: BracePolicy::Double,
    };

    /// Creates a new configuration with default values.
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the highest accepted placeholder index.
    #[inline]
    pub const fn with_max_index(mut self, max_index: usize) -> Self {
        self.max_index = max_index;
        self
    }

    /// Sets the brace handling policy.
    #[inline]
    pub const fn with_brace_policy(mut self, policy: BracePolicy) -> Self {
        self.brace_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = FormatConfig::default();
        assert_eq!(config.max_index, 65535);
        assert_eq!(config.brace_policy, BracePolicy::Double);
    }

    #[test]
    fn test_config_builder() {
        let config = FormatConfig::new()
            .with_max_index(9)
            .with_brace_policy(BracePolicy::Reject);

        assert_eq!(config.max_index, 9);
        assert_eq!(config.brace_policy, BracePolicy::Reject);
    }

    #[test]
    fn test_default_matches_const() {
        assert_eq!(FormatConfig::default(), FormatConfig::DEFAULT);
    }
}
