use super::ObjectId;

slotmap::new_key_type! {
    /// Unique identifier for a group in a [`Document`](super::Document).
    pub struct GroupId;
}

/// A named collection of document objects.
///
/// Groups only organize objects: they hold no shape, and an object may
/// belong to several groups.
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    members: Vec<ObjectId>,
}

impl Group {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            members: Vec::new(),
        }
    }

    /// The unique name of the group within its document.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member objects in the order they were added.
    #[must_use]
    pub fn members(&self) -> &[ObjectId] {
        &self.members
    }

    /// Whether `object` is a member.
    #[must_use]
    pub fn contains(&self, object: ObjectId) -> bool {
        self.members.contains(&object)
    }

    /// Appends `object` unless it is already a member.
    pub(crate) fn add(&mut self, object: ObjectId) {
        if !self.contains(object) {
            self.members.push(object);
        }
    }

    pub(crate) fn forget(&mut self, object: ObjectId) {
        self.members.retain(|&member| member != object);
    }
}
