//! Placeholder scanner: one pass over the template producing its segments

use tracing::trace;

use crate::error::{Span, TemplateError};

use super::lexer::{lex, Token};
use super::specifier::Specifier;

/// A placeholder occurrence with its parsed specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Byte range of the placeholder including both braces
    pub span: Span,
    pub spec: Specifier,
}

/// One piece of a scanned template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Byte range of text copied verbatim
    Literal(Span),
    Placeholder(Placeholder),
}

impl Segment {
    pub fn as_placeholder(&self) -> Option<&Placeholder> {
        match self {
            Segment::Placeholder(p) => Some(p),
            Segment::Literal(_) => None,
        }
    }
}

/// Scan a template into literal and placeholder segments
///
/// Placeholders without an explicit position get their zero-based occurrence
/// index, counted over every placeholder in the template.
pub fn scan(template: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut occurrence = 0;

    for (token, span) in lex(template) {
        match token {
            Ok(Token::Literal) => segments.push(Segment::Literal(span)),
            Ok(Token::Placeholder) => {
                let inner = span.start + 1..span.end - 1;
                let mut spec = Specifier::parse(&template[inner.clone()])
                    .map_err(|e| e.shifted(inner.start))?;
                if !spec.explicit_position {
                    spec.position = occurrence;
                }
                trace!(position = spec.position, span = ?span, "placeholder");
                segments.push(Segment::Placeholder(Placeholder { span, spec }));
                occurrence += 1;
            }
            Err(()) => {
                return Err(TemplateError::MissingClosingBrace { offset: span.start });
            }
        }
    }

    Ok(segments)
}

/// Iterate over the placeholders of a segment list
pub fn placeholders(segments: &[Segment]) -> impl Iterator<Item = &Placeholder> {
    segments.iter().filter_map(Segment::as_placeholder)
}
