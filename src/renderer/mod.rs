//! Type-directed rendering of argument values
//!
//! Every argument type implements [`Render`]. The implementation is picked by
//! the argument's static type when the argument list is bound, and writes the
//! value through an [`Output`] that knows the active [`RenderOptions`].

pub mod config;
mod values;

use std::fmt;
use std::io;

pub use config::{ConfigError, RenderOptions};

use crate::parser::Specifier;

/// A value that can be substituted into a placeholder
///
/// # Example
///
/// ```rust
/// use std::fmt::{self, Write};
/// use brace_fmt::{format, Output, Render, Specifier};
///
/// struct Point {
///     x: f32,
///     y: f32,
/// }
///
/// impl Render for Point {
///     fn render(&self, out: &mut Output<'_>, _spec: &Specifier) -> fmt::Result {
///         let plain = Specifier::default();
///         out.write_char('(')?;
///         self.x.render(out, &plain)?;
///         out.write_str(", ")?;
///         self.y.render(out, &plain)?;
///         out.write_char(')')
///     }
/// }
///
/// let text = format("at {}", &(Point { x: 1.0, y: 2.0 },)).unwrap();
/// assert_eq!(text, "at (1.000000, 2.000000)");
/// ```
pub trait Render {
    fn render(&self, out: &mut Output<'_>, spec: &Specifier) -> fmt::Result;
}

/// Destination for rendered fragments
pub struct Output<'a> {
    sink: &'a mut dyn fmt::Write,
    options: &'a RenderOptions,
}

impl<'a> Output<'a> {
    pub fn new(sink: &'a mut dyn fmt::Write, options: &'a RenderOptions) -> Self {
        Self { sink, options }
    }

    pub fn options(&self) -> &RenderOptions {
        self.options
    }

    /// Write `text` left-padded with the fill to the specifier's width
    ///
    /// Longer text is never truncated. With a `0` fill a leading sign stays in
    /// front of the padding.
    pub fn write_padded(&mut self, text: &str, spec: &Specifier) -> fmt::Result {
        let pad = spec
            .width
            .map_or(0, |width| width.saturating_sub(text.chars().count()));
        if pad == 0 {
            return self.sink.write_str(text);
        }
        if spec.fill == '0' {
            if let Some(rest) = text.strip_prefix(|c: char| c == '-' || c == '+') {
                self.sink.write_str(&text[..text.len() - rest.len()])?;
                self.repeat('0', pad)?;
                return self.sink.write_str(rest);
            }
        }
        self.repeat(spec.fill, pad)?;
        self.sink.write_str(text)
    }

    /// Write base-converted digits as a fixed-width field
    ///
    /// With a width, exactly that many characters are written: the low-order
    /// digits when there are too many, otherwise the digits padded with the
    /// fill (zeros when the fill is the default).
    pub fn write_digits(&mut self, digits: &str, spec: &Specifier) -> fmt::Result {
        let Some(width) = spec.width else {
            return self.sink.write_str(digits);
        };
        let count = digits.chars().count();
        if count >= width {
            let skip = digits
                .char_indices()
                .nth(count - width)
                .map_or(digits.len(), |(i, _)| i);
            return self.sink.write_str(&digits[skip..]);
        }
        let fill = if spec.has_default_fill() { '0' } else { spec.fill };
        self.repeat(fill, width - count)?;
        self.sink.write_str(digits)
    }

    /// Write an address: the configured prefix followed by fixed-width hex digits
    pub fn write_address(&mut self, hex_digits: &str, spec: &Specifier) -> fmt::Result {
        self.sink.write_str(&self.options.pointer_prefix)?;
        self.write_digits(hex_digits, spec)
    }

    fn repeat(&mut self, c: char, count: usize) -> fmt::Result {
        for _ in 0..count {
            self.sink.write_char(c)?;
        }
        Ok(())
    }
}

impl fmt::Write for Output<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sink.write_str(s)
    }
}

/// Adapter letting the render pass write straight into an `io::Write`
///
/// The io error is kept because `fmt::Error` carries no payload.
pub(crate) struct IoWriter<'w, W: io::Write + ?Sized> {
    inner: &'w mut W,
    error: Option<io::Error>,
}

impl<'w, W: io::Write + ?Sized> IoWriter<'w, W> {
    pub(crate) fn new(inner: &'w mut W) -> Self {
        Self { inner, error: None }
    }

    pub(crate) fn into_error(self) -> Option<io::Error> {
        self.error
    }
}

impl<W: io::Write + ?Sized> fmt::Write for IoWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
