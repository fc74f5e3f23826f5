//! Template parsing and rendering.
//!
//! A format string is parsed once into a [`Template`] (a flat sequence of
//! [`Segment`]s), which can then be rendered any number of times against
//! different argument lists. The one-shot [`format`] and [`format_with`]
//! helpers combine both steps for callers that do not reuse templates.

use core::fmt::{self, Write as _};
use core::iter::Peekable;
use core::str::CharIndices;

use crate::config::{BracePolicy, FormatConfig};
use crate::error::Error;
use crate::render::Render;
use crate::segment::Segment;
use crate::span::Span;

/// A parsed format template.
///
/// Parsing validates the placeholder grammar up front; the only error left
/// for render time is an argument index past the end of the supplied list,
/// since the argument list is not known while parsing.
///
/// # Example
///
/// ```
/// use fmtkit_core::{Template, args};
///
/// let tmpl = Template::parse("{0} scored {1}").unwrap();
/// assert_eq!(tmpl.required_args(), 2);
///
/// let a = tmpl.render(&args!["Ada", 95]).unwrap();
/// let b = tmpl.render(&args!["Grace", 97]).unwrap();
/// assert_eq!(a, "Ada scored 95");
/// assert_eq!(b, "Grace scored 97");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
    max_index: Option<usize>,
    policy: BracePolicy,
}

impl Template {
    /// Parses a template under the default [`FormatConfig`].
    pub fn parse(text: &str) -> Result<Self, Error> {
        Self::parse_with(text, FormatConfig::DEFAULT)
    }

    /// Parses a template under an explicit configuration.
    pub fn parse_with(text: &str, config: FormatConfig) -> Result<Self, Error> {
        Parser::new(text, config).run()
    }

    /// Iterates the parsed segments in template order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Highest placeholder index in the template, or `None` if the
    /// template contains no placeholders.
    #[inline]
    pub fn max_index(&self) -> Option<usize> {
        self.max_index
    }

    /// Minimum argument list length this template can render against.
    ///
    /// Unused trailing arguments are never an error, so any list at least
    /// this long renders successfully.
    #[inline]
    pub fn required_args(&self) -> usize {
        self.max_index.map_or(0, |max| max + 1)
    }

    /// Renders the template against an argument list.
    ///
    /// Literal segments are copied verbatim; each placeholder appends the
    /// rendered text of the referenced argument, in template order. An
    /// argument may be referenced zero, one, or many times. Fails with
    /// [`Error::ArgumentIndexOutOfRange`] on the first placeholder whose
    /// index is at or past `args.len()`; no partial output is returned.
    pub fn render(&self, args: &[&dyn Render]) -> Result<String, Error> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { index, span } => {
                    let Some(arg) = args.get(*index) else {
                        return Err(Error::ArgumentIndexOutOfRange {
                            index: *index,
                            available: args.len(),
                            span: *span,
                        });
                    };
                    arg.render_to(&mut out);
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Template {
    /// Reproduces the template source, re-escaping literal braces when the
    /// template was parsed under [`BracePolicy::Double`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => match self.policy {
                    BracePolicy::Double => {
                        for c in text.chars() {
                            match c {
                                '{' => f.write_str("{{")?,
                                '}' => f.write_str("}}")?,
                                c => f.write_char(c)?,
                            }
                        }
                    }
                    // Reject-policy literals cannot contain braces.
                    BracePolicy::Reject => f.write_str(text)?,
                },
                Segment::Placeholder { index, .. } => write!(f, "{{{index}}}")?,
            }
        }
        Ok(())
    }
}

/// Parses and renders in one call, under the default configuration.
///
/// Equivalent to `Template::parse(template)?.render(args)`.
///
/// # Example
///
/// ```
/// use fmtkit_core::{args, format};
///
/// let out = format("{0} any text {1} {0}", &args!["X", "Y"]).unwrap();
/// assert_eq!(out, "X any text Y X");
/// ```
pub fn format(template: &str, args: &[&dyn Render]) -> Result<String, Error> {
    Template::parse(template)?.render(args)
}

/// Parses and renders in one call, under an explicit configuration.
pub fn format_with(
    template: &str,
    args: &[&dyn Render],
    config: FormatConfig,
) -> Result<String, Error> {
    Template::parse_with(template, config)?.render(args)
}

/// Single left-to-right scan over the template text.
///
/// Literal characters accumulate into a pending run which is flushed
/// whenever a placeholder is produced, preserving segment order.
struct Parser<'a> {
    text: &'a str,
    cur: Peekable<CharIndices<'a>>,
    config: FormatConfig,
    segments: Vec<Segment>,
    literal: String,
    max_index: Option<usize>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, config: FormatConfig) -> Self {
        Self {
            text,
            cur: text.char_indices().peekable(),
            config,
            segments: Vec::new(),
            literal: String::new(),
            max_index: None,
        }
    }

    fn run(mut self) -> Result<Template, Error> {
        while let Some(&(pos, c)) = self.cur.peek() {
            match c {
                '{' => {
                    self.cur.next();
                    if self.config.brace_policy == BracePolicy::Double && self.consume('{') {
                        self.literal.push('{');
                    } else {
                        self.placeholder(pos)?;
                    }
                }
                '}' => {
                    self.cur.next();
                    if self.config.brace_policy == BracePolicy::Double && self.consume('}') {
                        self.literal.push('}');
                    } else {
                        return Err(Error::UnmatchedClosingBrace {
                            span: Span::new(pos, pos + 1),
                        });
                    }
                }
                _ => {
                    self.cur.next();
                    self.literal.push(c);
                }
            }
        }
        self.flush_literal();
        Ok(Template {
            segments: self.segments,
            max_index: self.max_index,
            policy: self.config.brace_policy,
        })
    }

    /// Parses the remainder of a placeholder whose `{` (at byte `open`)
    /// has already been consumed: one or more decimal digits, then `}`.
    fn placeholder(&mut self, open: usize) -> Result<(), Error> {
        let mut index: Option<usize> = None;
        loop {
            match self.cur.peek() {
                Some(&(_, c)) if c.is_ascii_digit() => {
                    self.cur.next();
                    let digit = (c as u8 - b'0') as usize;
                    // Saturate on overflow; the ceiling check below rejects
                    // the run either way.
                    index = Some(index.unwrap_or(0).saturating_mul(10).saturating_add(digit));
                }
                Some(&(pos, '}')) => {
                    let Some(index) = index else {
                        return Err(Error::MalformedPlaceholder {
                            span: Span::new(open, pos + 1),
                            found: "`}`".to_owned(),
                        });
                    };
                    self.cur.next();
                    if index > self.config.max_index {
                        return Err(Error::MalformedPlaceholder {
                            span: Span::new(open, pos + 1),
                            found: std::format!(
                                "index `{}` (exceeds maximum {})",
                                &self.text[open + 1..pos],
                                self.config.max_index
                            ),
                        });
                    }
                    self.flush_literal();
                    self.max_index = Some(self.max_index.map_or(index, |max| max.max(index)));
                    self.segments.push(Segment::Placeholder {
                        index,
                        span: Span::new(open, pos + 1),
                    });
                    return Ok(());
                }
                Some(&(pos, c)) => {
                    return Err(Error::MalformedPlaceholder {
                        span: Span::new(open, pos + c.len_utf8()),
                        found: std::format!("`{}`", c.escape_debug()),
                    });
                }
                None => {
                    return Err(Error::MalformedPlaceholder {
                        span: Span::new(open, self.text.len()),
                        found: "end of template".to_owned(),
                    });
                }
            }
        }
    }

    /// Consumes the next character if it equals `c`.
    fn consume(&mut self, c: char) -> bool {
        match self.cur.peek() {
            Some(&(_, next)) if next == c => {
                self.cur.next();
                true
            }
            _ => false,
        }
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.segments
                .push(Segment::Literal(core::mem::take(&mut self.literal)));
        }
    }
}
