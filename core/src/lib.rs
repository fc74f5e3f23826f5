//! Core types for fmtkit, a positional `{n}` format-template library.
//!
//! A template is a string mixing literal text with numeric placeholders:
//!
//! ```text
//! "{1}+{1} = {0}"
//! ```
//!
//! Formatting substitutes each `{n}` with the rendered text of the n-th
//! argument. Escaped braces (`{{` / `}}`) become literal braces under the
//! default [`BracePolicy::Double`]. Malformed templates and missing
//! arguments are reported as structured [`Error`] values; no partial
//! output is ever produced.
//!
//! # Example
//!
//! ```
//! use fmtkit_core::{args, format};
//!
//! let out = format("{1}+{1} = {0}", &args![2, "one"]).unwrap();
//! assert_eq!(out, "one+one = 2");
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization for [`Span`] and [`Segment`]

pub mod config;
mod error;
mod render;
mod segment;
mod span;
mod template;

pub use config::{BracePolicy, FormatConfig};
pub use error::Error;
pub use render::Render;
pub use segment::Segment;
pub use span::Span;
pub use template::{Template, format, format_with};
