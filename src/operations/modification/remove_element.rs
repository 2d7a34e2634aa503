use crate::document::{Document, DocumentObject, ObjectId};
use crate::error::{EditError, Result};
use crate::operations::query::{ElementType, Explore};
use crate::topology::Shape;

use super::{normalize, select, ElementInput, Reconstruct, ReconstructionOutcome, Strategy};

/// What happened to the object an element was removed from.
#[derive(Debug, Clone)]
pub enum RemovalOutcome {
    /// The object now references the rebuilt shape.
    Replaced { shape: Shape, strategy: Strategy },
    /// The last element was removed and the object deleted.
    ObjectDeleted(DocumentObject),
}

/// Removes one element of a document object's shape and rebuilds the rest.
///
/// The elements of the requested type are enumerated with [`Explore`], the
/// one at `index` is dropped and the remainder goes through [`Reconstruct`].
/// The object is then pointed at the new shape, or deleted when nothing
/// remains.
pub struct RemoveElement {
    object: ObjectId,
    element_type: ElementType,
    index: i64,
}

impl RemoveElement {
    /// Creates a new `RemoveElement` operation.
    #[must_use]
    pub fn new(object: ObjectId, element_type: ElementType, index: i64) -> Self {
        Self {
            object,
            element_type,
            index,
        }
    }

    /// Executes the removal on the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist, the shape has no
    /// elements of the type, the index is out of range, or reconstruction
    /// fails. The document is unchanged on error.
    pub fn execute(&self, doc: &mut Document) -> Result<RemovalOutcome> {
        let owner = doc.object(self.object)?;
        let name = owner.name().to_owned();
        let sequence = Explore::new(owner.shape(), self.element_type).execute(doc.store())?;
        let selection = select(&sequence, self.element_type, self.index)?;

        let inputs: Vec<ElementInput> = selection
            .remaining
            .iter()
            .map(|&shape| ElementInput::Raw(shape))
            .collect();
        let elements = normalize(&inputs, doc);

        match Reconstruct::new(self.element_type, elements).execute(doc.store_mut())? {
            ReconstructionOutcome::NothingRemains => {
                // The owner was found above and `doc` is held exclusively since,
                // so this removal cannot miss.
                let removed = doc.remove_object(self.object).map_err(|cause| {
                    EditError::UnrecoverableRemoval {
                        object: name.clone(),
                        cause: Box::new(cause),
                    }
                })?;
                tracing::info!("Removed the last {} of {name}, deleted the object", self.element_type);
                Ok(RemovalOutcome::ObjectDeleted(removed))
            }
            ReconstructionOutcome::Rebuilt { shape, strategy } => {
                doc.set_shape(self.object, shape)?;
                tracing::info!(
                    "Removed {} {} of {name}, replaced with {} ({strategy})",
                    self.element_type,
                    self.index,
                    shape.kind()
                );
                Ok(RemovalOutcome::Replaced { shape, strategy })
            }
        }
    }
}
