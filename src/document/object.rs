use crate::topology::Shape;

slotmap::new_key_type! {
    /// Unique identifier for an object in a [`Document`](super::Document).
    pub struct ObjectId;
}

/// A named document entry that owns a reference to a shape.
#[derive(Debug, Clone)]
pub struct DocumentObject {
    name: String,
    /// Free-form display label, initially equal to the name.
    pub label: String,
    shape: Shape,
    touched: bool,
}

impl DocumentObject {
    pub(crate) fn new(name: String, shape: Shape) -> Self {
        Self {
            label: name.clone(),
            name,
            shape,
            touched: true,
        }
    }

    /// The unique name of the object within its document.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shape currently referenced by the object.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Whether the shape changed since the last recompute.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub(crate) fn replace_shape(&mut self, shape: Shape) {
        self.shape = shape;
        self.touched = true;
    }

    pub(crate) fn untouch(&mut self) {
        self.touched = false;
    }
}
