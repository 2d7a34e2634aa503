mod group;
mod object;

pub use group::{Group, GroupId};
pub use object::{DocumentObject, ObjectId};

use slotmap::SlotMap;

use crate::error::{OperationError, Result, TopologyError};
use crate::operations::modification::{Defeature, DefeatureParams};
use crate::operations::query::{Aabb, BoundingBox, IsValid};
use crate::topology::{Shape, TopologyStore};

/// Result of [`Document::recompute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecomputeSummary {
    /// Objects whose touched flag was cleared.
    pub recomputed: Vec<ObjectId>,
    /// Objects whose shape fails the validity check.
    pub invalid: Vec<ObjectId>,
}

/// A modeling document: the topology arena, the named objects that
/// reference shapes in it and the groups organizing those objects.
///
/// Every editing operation takes the document explicitly, so there is no
/// notion of an active document.
#[derive(Debug)]
pub struct Document {
    name: String,
    store: TopologyStore,
    objects: SlotMap<ObjectId, DocumentObject>,
    order: Vec<ObjectId>,
    groups: SlotMap<GroupId, Group>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            store: TopologyStore::new(),
            objects: SlotMap::with_key(),
            order: Vec::new(),
            groups: SlotMap::with_key(),
        }
    }

    /// The document name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The topology arena holding every shape of the document.
    #[must_use]
    pub fn store(&self) -> &TopologyStore {
        &self.store
    }

    /// Mutable access to the topology arena, for building shapes.
    pub fn store_mut(&mut self) -> &mut TopologyStore {
        &mut self.store
    }

    /// Adds an object referencing `shape`.
    ///
    /// A name already in use by an object or group gets the first free
    /// numeric suffix: `Cylinder`, `Cylinder001`, `Cylinder002`.
    ///
    /// # Errors
    ///
    /// Returns an error if `shape` is not present in the store.
    pub fn add_object(&mut self, name: &str, shape: Shape) -> Result<ObjectId> {
        self.require_shape(shape)?;
        let name = self.unique_name(name);
        let id = self.objects.insert(DocumentObject::new(name, shape));
        self.order.push(id);
        Ok(id)
    }

    /// Removes an object and returns it. The shape stays in the store and
    /// the object leaves every group.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    pub fn remove_object(&mut self, id: ObjectId) -> Result<DocumentObject> {
        let object = self.objects.remove(id).ok_or_else(missing_object)?;
        self.order.retain(|&other| other != id);
        for group in self.groups.values_mut() {
            group.forget(id);
        }
        Ok(object)
    }

    /// Looks up an object.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    pub fn object(&self, id: ObjectId) -> Result<&DocumentObject> {
        Ok(self.objects.get(id).ok_or_else(missing_object)?)
    }

    /// Mutable access to an object, for relabeling.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist.
    pub fn object_mut(&mut self, id: ObjectId) -> Result<&mut DocumentObject> {
        Ok(self.objects.get_mut(id).ok_or_else(missing_object)?)
    }

    /// Finds an object by its unique name.
    #[must_use]
    pub fn object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.order
            .iter()
            .copied()
            .find(|&id| self.objects.get(id).is_some_and(|o| o.name() == name))
    }

    /// Iterates the objects in insertion order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &DocumentObject)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.objects.get(id).map(|o| (id, o)))
    }

    /// Number of objects in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the document has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Replaces the shape an object references and marks it touched.
    ///
    /// The previous shape is left in the store; it may still be shared by
    /// the new shape or by other objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the object or the shape does not exist.
    pub fn set_shape(&mut self, id: ObjectId, shape: Shape) -> Result<()> {
        self.require_shape(shape)?;
        self.objects
            .get_mut(id)
            .ok_or_else(missing_object)?
            .replace_shape(shape);
        Ok(())
    }

    /// Adds a group holding `members`, in order and without repeats.
    ///
    /// # Errors
    ///
    /// Returns an error if a member does not exist; no group is added then.
    pub fn add_group(&mut self, name: &str, members: &[ObjectId]) -> Result<GroupId> {
        for &member in members {
            self.object(member)?;
        }
        let mut group = Group::new(self.unique_name(name));
        for &member in members {
            group.add(member);
        }
        Ok(self.groups.insert(group))
    }

    /// Looks up a group.
    ///
    /// # Errors
    ///
    /// Returns an error if the group does not exist.
    pub fn group(&self, id: GroupId) -> Result<&Group> {
        Ok(self.groups.get(id).ok_or_else(missing_group)?)
    }

    /// Appends an object to a group. Adding a member again has no effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the group or the object does not exist.
    pub fn add_to_group(&mut self, group: GroupId, object: ObjectId) -> Result<()> {
        self.object(object)?;
        self.groups
            .get_mut(group)
            .ok_or_else(missing_group)?
            .add(object);
        Ok(())
    }

    /// Bounding box enclosing the shapes of every object.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is empty or a shape has no vertices.
    pub fn bounds(&self) -> Result<Aabb> {
        self.bounds_of(&self.order)
    }

    /// Bounding box enclosing the shapes of the given objects, such as the
    /// members of a group.
    ///
    /// # Errors
    ///
    /// Returns an error if `objects` is empty, an object does not exist or
    /// its shape has no vertices.
    pub fn bounds_of(&self, objects: &[ObjectId]) -> Result<Aabb> {
        let mut bounds: Option<Aabb> = None;
        for &id in objects {
            let aabb = BoundingBox::new(self.object(id)?.shape()).execute(&self.store)?;
            bounds = Some(bounds.map_or(aabb, |b| b.merge(&aabb)));
        }
        bounds.ok_or_else(|| OperationError::InvalidInput("no objects to bound".into()).into())
    }

    /// Clears the touched flags and re-checks the validity of every shape.
    pub fn recompute(&mut self) -> RecomputeSummary {
        let mut summary = RecomputeSummary::default();
        for &id in &self.order {
            let Some(object) = self.objects.get_mut(id) else {
                continue;
            };
            if object.is_touched() {
                object.untouch();
                summary.recomputed.push(id);
            }
            if !IsValid::new(object.shape()).execute(&self.store) {
                summary.invalid.push(id);
            }
        }
        if !summary.invalid.is_empty() {
            tracing::warn!(
                "{}: {} object(s) hold invalid shapes",
                self.name,
                summary.invalid.len()
            );
        }
        summary
    }

    /// Defeatures an object's shape in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the object does not exist or defeaturing fails;
    /// the object is left untouched in that case.
    pub fn defeature(&mut self, id: ObjectId, params: DefeatureParams) -> Result<Shape> {
        let shape = self.object(id)?.shape();
        let simplified = Defeature::new(shape, params).execute(&mut self.store)?;
        self.set_shape(id, simplified)?;
        tracing::info!(
            "Defeatured {}: {} -> {}",
            self.object(id)?.name(),
            shape.kind(),
            simplified.kind()
        );
        Ok(simplified)
    }

    fn require_shape(&self, shape: Shape) -> Result<()> {
        if self.store.contains(shape) {
            Ok(())
        } else {
            Err(TopologyError::EntityNotFound(shape.kind().to_string()).into())
        }
    }

    fn unique_name(&self, base: &str) -> String {
        let taken = |candidate: &str| {
            self.objects.values().any(|o| o.name() == candidate)
                || self.groups.values().any(|g| g.name() == candidate)
        };
        if !taken(base) {
            return base.to_owned();
        }
        (1..)
            .map(|n| format!("{base}{n:03}"))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| base.to_owned())
    }
}

fn missing_object() -> TopologyError {
    TopologyError::EntityNotFound("document object".into())
}

fn missing_group() -> TopologyError {
    TopologyError::EntityNotFound("document group".into())
}
