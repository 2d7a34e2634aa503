use crate::error::EditError;
use crate::operations::query::ElementType;
use crate::topology::Shape;

/// An element sequence split around the element chosen for removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The element at the requested index.
    pub removed: Shape,
    /// Every other element, in sequence order.
    pub remaining: Vec<Shape>,
}

/// Splits `sequence` into the element at `index` and the rest.
///
/// # Errors
///
/// Returns [`EditError::NoElementsOfType`] for an empty sequence and
/// [`EditError::IndexOutOfRange`] when `index` is negative or past the end.
pub fn select(
    sequence: &[Shape],
    element_type: ElementType,
    index: i64,
) -> Result<Selection, EditError> {
    if sequence.is_empty() {
        return Err(EditError::NoElementsOfType(element_type));
    }
    let position = usize::try_from(index)
        .ok()
        .filter(|&i| i < sequence.len())
        .ok_or(EditError::IndexOutOfRange {
            element_type,
            index,
            total: sequence.len(),
        })?;

    let mut remaining = sequence.to_vec();
    let removed = remaining.remove(position);
    Ok(Selection { removed, remaining })
}
