use crate::document::{Document, ObjectId};
use crate::topology::Shape;

/// An item handed to reconstruction: either a document object that carries
/// a shape, or a kernel element given directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementInput {
    Feature(ObjectId),
    Raw(Shape),
}

impl From<Shape> for ElementInput {
    fn from(shape: Shape) -> Self {
        Self::Raw(shape)
    }
}

impl From<ObjectId> for ElementInput {
    fn from(object: ObjectId) -> Self {
        Self::Feature(object)
    }
}

/// The shape an [`ElementInput`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// The shape of a live document object.
    WrappedFeature(Shape),
    /// A live kernel element.
    RawElement(Shape),
    /// A removed object or a shape no longer in the store.
    Unrecognized,
}

impl Projection {
    /// Resolves an input against the document.
    #[must_use]
    pub fn of(input: ElementInput, doc: &Document) -> Self {
        match input {
            ElementInput::Feature(id) => match doc.object(id) {
                Ok(object) if doc.store().contains(object.shape()) => {
                    Self::WrappedFeature(object.shape())
                }
                _ => Self::Unrecognized,
            },
            ElementInput::Raw(shape) if doc.store().contains(shape) => Self::RawElement(shape),
            ElementInput::Raw(_) => Self::Unrecognized,
        }
    }

    /// The underlying shape, if any.
    #[must_use]
    pub fn shape(self) -> Option<Shape> {
        match self {
            Self::WrappedFeature(shape) | Self::RawElement(shape) => Some(shape),
            Self::Unrecognized => None,
        }
    }
}

/// Projects every input to its shape, dropping the unrecognized ones.
#[must_use]
pub fn normalize(inputs: &[ElementInput], doc: &Document) -> Vec<Shape> {
    inputs
        .iter()
        .filter_map(|&input| {
            let shape = Projection::of(input, doc).shape();
            if shape.is_none() {
                tracing::debug!("Dropping unrecognized reconstruction input {input:?}");
            }
            shape
        })
        .collect()
}
