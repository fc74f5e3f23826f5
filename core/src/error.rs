//! Error types for template parsing and rendering.
//!
//! Every rejected input maps to exactly one of the three variants below.
//! Parsing and rendering fail fast on the first problem found during the
//! left-to-right scan; callers never receive a collection of errors or any
//! partial output.

use crate::span::Span;

/// Error produced while parsing or rendering a template.
///
/// All variants describe caller-input problems (a bad template or an
/// insufficient argument list); retrying without changing the input is
/// never meaningful.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Brace content was not one or more decimal digits followed by `}`,
    /// or a placeholder was left unterminated at the end of the template.
    ///
    /// Also covers digit runs above the configured index ceiling, since the
    /// digits no longer denote a usable placeholder index.
    #[error("malformed placeholder at bytes {span}: found {found}")]
    MalformedPlaceholder {
        /// Location from the opening `{` to the offending character.
        span: Span,
        /// What the scan found instead of a valid placeholder,
        /// e.g. `` `x` `` or `end of template`.
        found: String,
    },

    /// A `}` appeared without a corresponding unescaped `{`.
    #[error("unmatched `}}` at bytes {span}")]
    UnmatchedClosingBrace {
        /// Location of the stray `}`.
        span: Span,
    },

    /// A placeholder index at or past the end of the argument list.
    #[error("argument index {index} out of range: {available} argument(s) supplied")]
    ArgumentIndexOutOfRange {
        /// The index the template asked for.
        index: usize,
        /// How many arguments were supplied.
        available: usize,
        /// Location of the offending `{n}`.
        span: Span,
    },
}

impl Error {
    /// Byte range in the template this error points at.
    pub fn span(&self) -> Span {
        match self {
            Error::MalformedPlaceholder { span, .. }
            | Error::UnmatchedClosingBrace { span }
            | Error::ArgumentIndexOutOfRange { span, .. } => *span,
        }
    }
}
