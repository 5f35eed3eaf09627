//! Checks that a template's placeholders fit an argument list of a given arity

use crate::error::TemplateError;

use super::scanner::Placeholder;

/// Validate placeholders against the number of arguments
///
/// A valid template uses one positioning style throughout, references only
/// positions below `arity`, leaves no position below the highest one unused,
/// and has at least `arity` placeholders. Positions may repeat, so arguments
/// above the highest referenced position can go unused.
pub fn validate<'a, I>(placeholders: I, arity: usize) -> Result<(), TemplateError>
where
    I: IntoIterator<Item = &'a Placeholder>,
{
    let placeholders: Vec<&Placeholder> = placeholders.into_iter().collect();

    if let Some(first) = placeholders.first() {
        let explicit = first.spec.explicit_position;
        if let Some(other) = placeholders
            .iter()
            .find(|p| p.spec.explicit_position != explicit)
        {
            return Err(TemplateError::MixedPositioning {
                span: other.span.clone(),
            });
        }
    }

    let mut used = vec![false; arity];
    for placeholder in &placeholders {
        let position = placeholder.spec.position;
        match used.get_mut(position) {
            Some(slot) => *slot = true,
            None => {
                return Err(TemplateError::PositionOutOfRange {
                    position,
                    arity,
                    span: placeholder.span.clone(),
                })
            }
        }
    }

    let referenced = placeholders
        .iter()
        .map(|p| p.spec.position + 1)
        .max()
        .unwrap_or(0);

    if let Some(position) = used[..referenced].iter().position(|u| !u) {
        return Err(TemplateError::PositionGap { position });
    }

    if placeholders.len() < arity {
        return Err(TemplateError::ArityMismatch {
            arity,
            placeholders: placeholders.len(),
        });
    }

    Ok(())
}
