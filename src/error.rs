//! Error types for template scanning and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

/// Errors found while compiling a template against an argument arity.
///
/// Offsets and spans are byte offsets into the whole template, not into the
/// placeholder that contains the problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{` was opened and never closed
    #[error("missing closing brace for placeholder at offset {offset}")]
    MissingClosingBrace { offset: usize },

    /// Non-digit in the position part of a placeholder
    #[error("invalid character '{found}' in positional argument at offset {offset}")]
    InvalidPositionChar { offset: usize, found: char },

    /// Non-digit where a width number was expected
    #[error("invalid character '{found}' in number at offset {offset}")]
    InvalidNumberChar { offset: usize, found: char },

    /// The format section starts with something that is neither fill nor width
    #[error("invalid character '{found}' after ':' at offset {offset}")]
    InvalidCharAfterColon { offset: usize, found: char },

    /// Unrecognized conversion character
    #[error("invalid layout specifier '{found}' at offset {offset}")]
    InvalidLayoutChar { offset: usize, found: char },

    /// A position does not fit in `usize`, or a width exceeds `u16::MAX`
    #[error("number at {span:?} is too large")]
    NumberOverflow { span: Span },

    /// Explicit and implicit positions used in the same template
    #[error("cannot mix explicit and implicit argument positions (placeholder at {span:?})")]
    MixedPositioning { span: Span },

    /// Fewer placeholders than arguments
    #[error("template has {placeholders} placeholder(s) for {arity} argument(s)")]
    ArityMismatch { arity: usize, placeholders: usize },

    /// A compiled template was given an argument list of another length
    #[error("template was compiled for {expected} argument(s) but {supplied} were supplied")]
    ArgumentCountMismatch { expected: usize, supplied: usize },

    /// A placeholder points past the end of the argument list
    #[error("argument position {position} is out of range for {arity} argument(s)")]
    PositionOutOfRange {
        position: usize,
        arity: usize,
        span: Span,
    },

    /// A position below the highest referenced one is never used
    #[error("argument position {position} is never used")]
    PositionGap { position: usize },
}

impl TemplateError {
    /// Get the template span the error points at, if it has one
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::MissingClosingBrace { offset } => Some(*offset..*offset + 1),
            Self::InvalidPositionChar { offset, found }
            | Self::InvalidNumberChar { offset, found }
            | Self::InvalidCharAfterColon { offset, found }
            | Self::InvalidLayoutChar { offset, found } => {
                Some(*offset..*offset + found.len_utf8())
            }
            Self::NumberOverflow { span }
            | Self::MixedPositioning { span }
            | Self::PositionOutOfRange { span, .. } => Some(span.clone()),
            Self::ArityMismatch { .. }
            | Self::ArgumentCountMismatch { .. }
            | Self::PositionGap { .. } => None,
        }
    }

    /// Move every offset forward by `base` bytes
    pub(crate) fn shifted(self, base: usize) -> Self {
        let shift = |span: Span| span.start + base..span.end + base;
        match self {
            Self::MissingClosingBrace { offset } => Self::MissingClosingBrace {
                offset: offset + base,
            },
            Self::InvalidPositionChar { offset, found } => Self::InvalidPositionChar {
                offset: offset + base,
                found,
            },
            Self::InvalidNumberChar { offset, found } => Self::InvalidNumberChar {
                offset: offset + base,
                found,
            },
            Self::InvalidCharAfterColon { offset, found } => Self::InvalidCharAfterColon {
                offset: offset + base,
                found,
            },
            Self::InvalidLayoutChar { offset, found } => Self::InvalidLayoutChar {
                offset: offset + base,
                found,
            },
            Self::NumberOverflow { span } => Self::NumberOverflow { span: shift(span) },
            Self::MixedPositioning { span } => Self::MixedPositioning { span: shift(span) },
            Self::PositionOutOfRange {
                position,
                arity,
                span,
            } => Self::PositionOutOfRange {
                position,
                arity,
                span: shift(span),
            },
            other @ (Self::ArityMismatch { .. }
            | Self::ArgumentCountMismatch { .. }
            | Self::PositionGap { .. }) => other,
        }
    }

    /// Format the error with template context using ariadne
    ///
    /// Errors without a span are labelled over the whole template.
    pub fn report(&self, source: &str, filename: &str) -> String {
        let message = self.to_string();
        let bytes = self.span().unwrap_or(0..source.len());

        // ariadne counts characters, not bytes
        let start = char_offset(source, bytes.start);
        let end = char_offset(source, bytes.end).max(start);

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, start)
            .with_message(&message)
            .with_label(
                Label::new((filename, start..end))
                    .with_message(self.hint())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8(buf).unwrap_or(message),
            Err(_) => message,
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Self::MissingClosingBrace { .. } => "this '{' is never closed",
            Self::InvalidPositionChar { .. } => "positions are decimal digits",
            Self::InvalidNumberChar { .. } => "expected a digit of the width",
            Self::InvalidCharAfterColon { .. } => "expected a fill letter, '0', or a width",
            Self::InvalidLayoutChar { .. } => "expected one of x o b f c p",
            Self::NumberOverflow { .. } => "number is too large",
            Self::MixedPositioning { .. } => "use either {} or {N} throughout",
            Self::ArityMismatch { .. } => "need at least one placeholder per argument",
            Self::ArgumentCountMismatch { .. } => "compile the template for this argument count",
            Self::PositionOutOfRange { .. } => "no argument at this position",
            Self::PositionGap { .. } => "every position up to the highest must be used",
        }
    }
}

fn char_offset(source: &str, byte: usize) -> usize {
    let byte = byte.min(source.len());
    source
        .char_indices()
        .take_while(|(i, _)| *i < byte)
        .count()
}
