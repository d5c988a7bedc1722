//! The user's practice stack: the ordered set of practices being tracked.

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{find_builtin, find_starter_stack, Catalog, Practice};
use crate::error::ValidationError;

/// One stacked practice.
///
/// Catalog practices are stored by id. Practices that exist only in the
/// stack (for example one generated by a coaching session) carry their
/// own metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StackEntry {
    Id(String),
    Embedded(Box<Practice>),
}

impl StackEntry {
    pub fn id(&self) -> &str {
        match self {
            StackEntry::Id(id) => id,
            StackEntry::Embedded(practice) => &practice.id,
        }
    }

    /// Metadata stored with the entry, if any.
    pub fn practice(&self) -> Option<&Practice> {
        match self {
            StackEntry::Id(_) => None,
            StackEntry::Embedded(practice) => Some(practice),
        }
    }
}

/// Ordered, duplicate-free list of stacked practices.
///
/// Serialized as an array whose items are either an id or a full practice
/// object. Objects for built-in practices, or with nothing more than an
/// `id`, are reduced to the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PracticeStack {
    entries: Vec<StackEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Id(String),
    Embedded(Box<Practice>),
    Bare { id: String },
}

impl<'de> Deserialize<'de> for PracticeStack {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stored = Vec::<StoredEntry>::deserialize(deserializer)?;
        let mut stack = PracticeStack::default();
        for entry in stored {
            let entry = match entry {
                StoredEntry::Id(id) | StoredEntry::Bare { id } => StackEntry::Id(id),
                StoredEntry::Embedded(practice) if find_builtin(&practice.id).is_some() => {
                    StackEntry::Id(practice.id)
                }
                StoredEntry::Embedded(practice) => StackEntry::Embedded(practice),
            };
            if !stack.contains(entry.id()) {
                stack.entries.push(entry);
            }
        }
        Ok(stack)
    }
}

impl PracticeStack {
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(StackEntry::id).collect()
    }

    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a practice that exists in the catalog.
    pub fn add<'a>(&mut self, catalog: &'a Catalog, id: &str) -> Result<&'a Practice, ValidationError> {
        let practice = catalog
            .find(id)
            .ok_or_else(|| ValidationError::UnknownPractice(id.to_string()))?;
        if self.contains(id) {
            return Err(ValidationError::DuplicatePractice(id.to_string()));
        }
        self.entries.push(StackEntry::Id(id.to_string()));
        Ok(practice)
    }

    /// Remove a practice. Its completion history is left alone.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id() != id);
        self.entries.len() != before
    }

    /// Add every member of a starter stack not already present, in order.
    ///
    /// Returns the ids that were added.
    pub fn apply_starter(&mut self, catalog: &Catalog, key: &str) -> Result<Vec<String>, ValidationError> {
        let starter = find_starter_stack(key)
            .ok_or_else(|| ValidationError::UnknownStarterStack(key.to_string()))?;
        let mut added = Vec::new();
        for id in starter.practices {
            if self.contains(&id) {
                continue;
            }
            self.add(catalog, &id)?;
            added.push(id);
        }
        Ok(added)
    }

    /// Each entry's id with its metadata: the catalog's first, then the
    /// entry's own. Ids known to neither have no metadata.
    pub fn resolved<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (&'a str, Option<&'a Practice>)> {
        self.entries
            .iter()
            .map(move |e| (e.id(), catalog.find(e.id()).or_else(|| e.practice())))
    }

    /// Stacked practices with known metadata.
    pub fn practices<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Practice> {
        self.resolved(catalog).filter_map(|(_, practice)| practice)
    }

    /// Total weekly time commitment in hours.
    pub fn time_commitment(&self, catalog: &Catalog) -> f64 {
        self.practices(catalog).map(|p| p.time_per_week).sum()
    }
}
