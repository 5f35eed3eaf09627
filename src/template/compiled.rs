//! A template scanned and validated for one arity

use std::fmt;
use std::io;

use tracing::debug;

use crate::args::Arguments;
use crate::error::TemplateError;
use crate::parser::{placeholders, scan, validate, Placeholder, Segment};
use crate::renderer::{IoWriter, Output, RenderOptions};
use crate::FormatError;

use super::engine::render_segments;

/// A validated template, reusable across formatting calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'t> {
    source: &'t str,
    segments: Vec<Segment>,
    arity: usize,
}

impl<'t> Template<'t> {
    /// Scan `source` and validate it against `arity` arguments
    pub fn compile(source: &'t str, arity: usize) -> Result<Self, TemplateError> {
        let segments = scan(source)?;
        validate(placeholders(&segments), arity)?;
        debug!(
            placeholders = placeholders(&segments).count(),
            arity, "compiled template"
        );
        Ok(Self {
            source,
            segments,
            arity,
        })
    }

    /// The template text
    pub fn source(&self) -> &'t str {
        self.source
    }

    /// Number of arguments the template was validated against
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        placeholders(&self.segments)
    }

    /// Render into any `fmt::Write` sink
    ///
    /// Fragments already written when an error occurs are not rolled back.
    pub fn render_to<A: Arguments + ?Sized>(
        &self,
        sink: &mut dyn fmt::Write,
        args: &A,
        options: &RenderOptions,
    ) -> Result<(), FormatError> {
        if args.arity() != self.arity {
            return Err(TemplateError::ArgumentCountMismatch {
                expected: self.arity,
                supplied: args.arity(),
            }
            .into());
        }
        let bindings = args.bind();
        let mut out = Output::new(sink, options);
        render_segments(self.source, &self.segments, &bindings, &mut out)
    }

    /// Render to a new string with default options
    pub fn format<A: Arguments + ?Sized>(&self, args: &A) -> Result<String, FormatError> {
        self.format_with_options(args, &RenderOptions::default())
    }

    pub fn format_with_options<A: Arguments + ?Sized>(
        &self,
        args: &A,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        let mut buf = String::with_capacity(self.source.len());
        self.render_to(&mut buf, args, options)?;
        Ok(buf)
    }

    /// Write the rendering straight to an io sink with default options
    pub fn print<W, A>(&self, sink: &mut W, args: &A) -> Result<(), FormatError>
    where
        W: io::Write + ?Sized,
        A: Arguments + ?Sized,
    {
        self.print_with_options(sink, args, &RenderOptions::default())
    }

    pub fn print_with_options<W, A>(
        &self,
        sink: &mut W,
        args: &A,
        options: &RenderOptions,
    ) -> Result<(), FormatError>
    where
        W: io::Write + ?Sized,
        A: Arguments + ?Sized,
    {
        let mut writer = IoWriter::new(sink);
        let result = self.render_to(&mut writer, args, options);
        match (result, writer.into_error()) {
            (Err(_), Some(err)) => Err(FormatError::Io(err)),
            (result, _) => result,
        }
    }
}
