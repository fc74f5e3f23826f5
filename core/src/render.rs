use core::fmt;

/// Capability to render a value as text.
///
/// This is the contract the formatter requires from every argument: a
/// deterministic, side-effect-free conversion to a textual representation.
/// The formatter treats the conversion as opaque and defines no formatting
/// rules of its own for numbers, dates, and so on.
///
/// `Render` is blanket-implemented for every `T: Display`, so any type
/// that can be written to a formatter qualifies without extra code:
///
/// ```
/// use fmtkit_core::Render;
///
/// assert_eq!(42_i32.rendered(), "42");
/// assert_eq!("one".rendered(), "one");
/// assert_eq!(true.rendered(), "true");
/// ```
pub trait Render {
    /// Append the textual form of this value to `out`.
    fn render_to(&self, out: &mut String);

    /// Render into a fresh string.
    fn rendered(&self) -> String {
        let mut out = String::new();
        self.render_to(&mut out);
        out
    }
}

impl<T: fmt::Display + ?Sized> Render for T {
    fn render_to(&self, out: &mut String) {
        use fmt::Write as _;
        // Writing into a String cannot fail unless the Display impl itself
        // returns an error, which violates the Display contract.
        let _ = write!(out, "{self}");
    }
}

/// Builds a `[&dyn Render; N]` argument array from a list of expressions.
///
/// Each expression is borrowed for the duration of the enclosing statement,
/// so use the macro inline in the call that consumes it:
///
/// ```
/// use fmtkit_core::{args, format};
///
/// let out = format("{1}+{1} = {0}", &args![2, "one"]).unwrap();
/// assert_eq!(out, "one+one = 2");
/// ```
#[macro_export]
macro_rules! args {
    () => {{
        let args: [&dyn $crate::Render; 0] = [];
        args
    }};
    ($($arg:expr),+ $(,)?) => {
        [$(&$arg as &dyn $crate::Render),+]
    };
}
