use crate::span::Span;

/// One parsed piece of a template.
///
/// A template is a flat sequence of segments: runs of literal text
/// interleaved with `{n}` placeholders. Escaped braces are already
/// collapsed into the literal runs by the parser, so a `Literal` never
/// needs further interpretation when rendering.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Characters copied verbatim into the output.
    Literal(String),

    /// A positional argument reference parsed from `{n}`.
    Placeholder {
        /// Zero-based index into the argument list.
        index: usize,
        /// Location of the `{n}` construct, braces included.
        span: Span,
    },
}

impl Segment {
    /// Returns the placeholder index, or `None` for literals.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        match self {
            Segment::Placeholder { index, .. } => Some(*index),
            Segment::Literal(_) => None,
        }
    }
}
