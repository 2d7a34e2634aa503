use std::collections::HashSet;

use crate::error::{OperationError, Result, TopologyError};
use crate::operations::query::edge_uses;
use crate::topology::{FaceId, ShellData, ShellId, TopologyStore};

/// Creates a shell from existing faces.
///
/// The faces are shared with whatever else references them. The shell is
/// closed when every edge is used by exactly two of its faces.
pub struct MakeShell {
    faces: Vec<FaceId>,
}

impl MakeShell {
    /// Creates a new `MakeShell` operation.
    #[must_use]
    pub fn new(faces: Vec<FaceId>) -> Self {
        Self { faces }
    }

    /// Executes the operation, creating the shell in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if no faces are given, a face is repeated or
    /// missing, or an edge is shared by more than two faces.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<ShellId> {
        if self.faces.is_empty() {
            return Err(OperationError::InvalidInput("a shell needs at least one face".into()).into());
        }
        let mut seen = HashSet::new();
        if !self.faces.iter().all(|f| seen.insert(*f)) {
            return Err(TopologyError::InvalidTopology("face repeated in shell".into()).into());
        }

        let uses = edge_uses(store, &self.faces)?;
        if uses.values().any(|u| u.len() > 2) {
            return Err(
                TopologyError::NonManifold("an edge is shared by more than two faces".into())
                    .into(),
            );
        }
        let is_closed = uses.values().all(|u| u.len() == 2);

        Ok(store.add_shell(ShellData {
            faces: self.faces.clone(),
            is_closed,
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;

    fn box_faces(store: &mut TopologyStore) -> Vec<FaceId> {
        let solid = MakeBox::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 3.0))
            .execute(store)
            .unwrap();
        let outer = store.solid(solid).unwrap().outer_shell;
        store.shell(outer).unwrap().faces.clone()
    }

    #[test]
    fn all_box_faces_close() {
        let mut store = TopologyStore::new();
        let faces = box_faces(&mut store);
        let shell = MakeShell::new(faces).execute(&mut store).unwrap();
        assert!(store.shell(shell).unwrap().is_closed);
    }

    #[test]
    fn five_box_faces_stay_open() {
        let mut store = TopologyStore::new();
        let faces = box_faces(&mut store);
        let shell = MakeShell::new(faces[1..].to_vec()).execute(&mut store).unwrap();
        let data = store.shell(shell).unwrap();
        assert_eq!(data.faces.len(), 5);
        assert!(!data.is_closed);
    }

    #[test]
    fn empty_or_repeated_faces_fail() {
        let mut store = TopologyStore::new();
        assert!(MakeShell::new(vec![]).execute(&mut store).is_err());
        let faces = box_faces(&mut store);
        assert!(MakeShell::new(vec![faces[0], faces[0]]).execute(&mut store).is_err());
    }
}
