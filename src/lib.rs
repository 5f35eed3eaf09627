//! brace-fmt - positional brace templates with typed arguments
//!
//! This library provides a scanner, validator, and renderer for templates
//! such as `"{1} owes {0:08x}"`. Templates are checked against the number of
//! arguments before anything is rendered; arguments are rendered according to
//! their static type.
//!
//! # Example
//!
//! ```rust
//! use brace_fmt::format;
//!
//! let text = format("{1} {0}", &("world", "hello")).unwrap();
//! assert_eq!(text, "hello world");
//! ```

pub mod args;
pub mod error;
pub mod parser;
pub mod renderer;
pub mod template;

pub use args::{Arguments, Bindings};
pub use error::TemplateError;
pub use parser::{Layout, Specifier};
pub use renderer::{ConfigError, Output, Render, RenderOptions};
pub use template::{Template, TemplateCache};

use std::fmt;
use std::io;

use thiserror::Error;

/// Errors that can occur during a formatting call
#[derive(Debug, Error)]
pub enum FormatError {
    /// The template is malformed or does not fit the arguments
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Writing to the output sink failed
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// A value's renderer reported an error
    #[error("render error: {0}")]
    Fmt(#[from] fmt::Error),
}

impl FormatError {
    /// The template error, if that is what went wrong
    pub fn as_template_error(&self) -> Option<&TemplateError> {
        match self {
            FormatError::Template(e) => Some(e),
            _ => None,
        }
    }
}

/// Format a template with default options
///
/// The template is compiled for the argument list's arity, validated, and
/// rendered. Use [`Template`] or [`TemplateCache`] to compile once and reuse.
///
/// # Example
///
/// ```rust
/// use brace_fmt::{format, TemplateError};
///
/// assert_eq!(format("{:x}", &(260,)).unwrap(), "104");
/// assert_eq!(format("{:c} is {}", &('A', 'A')).unwrap(), "A is 65");
///
/// let err = format("Hello {", &(1,)).unwrap_err();
/// assert!(matches!(
///     err.as_template_error(),
///     Some(TemplateError::MissingClosingBrace { .. })
/// ));
/// ```
pub fn format<A: Arguments + ?Sized>(template: &str, args: &A) -> Result<String, FormatError> {
    format_with_options(template, args, &RenderOptions::default())
}

/// Format a template with custom options
///
/// ```rust
/// use brace_fmt::{format_with_options, RenderOptions};
///
/// let options = RenderOptions::new().with_float_precision(2);
/// let text = format_with_options("{}", &(0.5,), &options).unwrap();
/// assert_eq!(text, "0.50");
/// ```
pub fn format_with_options<A: Arguments + ?Sized>(
    template: &str,
    args: &A,
    options: &RenderOptions,
) -> Result<String, FormatError> {
    Template::compile(template, args.arity())?.format_with_options(args, options)
}

/// Write a formatted template to an io sink with default options
///
/// Fragments are written as they are rendered; no intermediate string is
/// built.
pub fn print<W, A>(sink: &mut W, template: &str, args: &A) -> Result<(), FormatError>
where
    W: io::Write + ?Sized,
    A: Arguments + ?Sized,
{
    print_with_options(sink, template, args, &RenderOptions::default())
}

/// Write a formatted template to an io sink with custom options
pub fn print_with_options<W, A>(
    sink: &mut W,
    template: &str,
    args: &A,
    options: &RenderOptions,
) -> Result<(), FormatError>
where
    W: io::Write + ?Sized,
    A: Arguments + ?Sized,
{
    Template::compile(template, args.arity())?.print_with_options(sink, args, options)
}

/// Format with a template compiled once per call site
///
/// The template must be a string literal. It is compiled and validated on
/// the first call and reused afterwards; a compile error is returned on every
/// call.
///
/// ```rust
/// use brace_fmt::formatted;
///
/// for i in 0..3 {
///     let line = formatted!("{}: {:04b}", i, i * 3).unwrap();
///     assert!(line.starts_with(&i.to_string()));
/// }
/// assert_eq!(formatted!("no arguments").unwrap(), "no arguments");
/// ```
#[macro_export]
macro_rules! formatted {
    ($template:literal $(, $arg:expr)* $(,)?) => {{
        static COMPILED: ::std::sync::OnceLock<
            ::std::result::Result<$crate::Template<'static>, $crate::TemplateError>,
        > = ::std::sync::OnceLock::new();
        let args = ($(&$arg,)*);
        match COMPILED.get_or_init(|| {
            $crate::Template::compile($template, $crate::Arguments::arity(&args))
        }) {
            ::std::result::Result::Ok(template) => template.format(&args),
            ::std::result::Result::Err(err) => {
                ::std::result::Result::Err($crate::FormatError::from(err.clone()))
            }
        }
    }};
}
