use crate::error::{Result, TopologyError};
use crate::topology::{CompoundData, CompoundId, Shape, TopologyStore};

/// Creates a compound grouping arbitrary shapes.
///
/// Compounds impose no geometric constraint on their members; the only
/// failure is a member that no longer exists in the store.
pub struct MakeCompound {
    children: Vec<Shape>,
}

impl MakeCompound {
    /// Creates a new `MakeCompound` operation.
    #[must_use]
    pub fn new(children: Vec<Shape>) -> Self {
        Self { children }
    }

    /// Executes the operation, creating the compound in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if a child is not present in the store.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<CompoundId> {
        if let Some(missing) = self.children.iter().find(|c| !store.contains(**c)) {
            return Err(TopologyError::EntityNotFound(format!(
                "{} compound member",
                missing.kind()
            ))
            .into());
        }
        Ok(store.add_compound(CompoundData {
            children: self.children.clone(),
        }))
    }
}
