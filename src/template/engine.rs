//! The render pass: one walk over a compiled segment list

use std::fmt::Write;

use crate::args::Bindings;
use crate::error::TemplateError;
use crate::parser::Segment;
use crate::renderer::Output;
use crate::FormatError;

/// Copy literal spans and substitute placeholders in template order
pub(crate) fn render_segments(
    source: &str,
    segments: &[Segment],
    bindings: &Bindings<'_>,
    out: &mut Output<'_>,
) -> Result<(), FormatError> {
    for segment in segments {
        match segment {
            Segment::Literal(span) => out.write_str(&source[span.clone()])?,
            Segment::Placeholder(placeholder) => {
                let position = placeholder.spec.position;
                let handle =
                    bindings
                        .get(position)
                        .ok_or_else(|| TemplateError::PositionOutOfRange {
                            position,
                            arity: bindings.len(),
                            span: placeholder.span.clone(),
                        })?;
                handle.render(out, &placeholder.spec)?;
            }
        }
    }
    Ok(())
}
