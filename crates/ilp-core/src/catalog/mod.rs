//! Practice catalog: built-in practices, starter stacks and user-created
//! practices.
//!
//! The catalog is read-only reference data for the host. The tracker never
//! consults it; item ids are opaque there.

mod practices;
mod starter;
mod types;

pub use practices::{find_builtin, get_builtin_practices};
pub use starter::{find_starter_stack, get_starter_stacks, StarterStack};
pub use types::{Difficulty, ModuleKey, Practice, Roi};

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// User-created practices, keyed by module.
///
/// Stored as `{ "body": [...], "mind": [...], ... }`. The map key is
/// authoritative for each practice's module.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CustomPractices {
    by_module: BTreeMap<ModuleKey, Vec<Practice>>,
}

impl CustomPractices {
    pub fn add(&mut self, mut practice: Practice) {
        practice.is_custom = true;
        self.by_module
            .entry(practice.module)
            .or_default()
            .push(practice);
    }

    /// Remove a custom practice by id. Returns the removed practice.
    pub fn remove(&mut self, id: &str) -> Option<Practice> {
        for practices in self.by_module.values_mut() {
            if let Some(pos) = practices.iter().position(|p| p.id == id) {
                return Some(practices.remove(pos));
            }
        }
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = &Practice> {
        self.by_module.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_module.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'de> Deserialize<'de> for CustomPractices {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut by_module = BTreeMap::<ModuleKey, Vec<Practice>>::deserialize(deserializer)?;
        for (module, practices) in by_module.iter_mut() {
            for practice in practices.iter_mut() {
                practice.module = *module;
                practice.is_custom = true;
            }
        }
        Ok(Self { by_module })
    }
}

/// Built-in practices merged with the user's custom ones.
#[derive(Debug, Clone)]
pub struct Catalog {
    practices: Vec<Practice>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            practices: get_builtin_practices(),
        }
    }

    /// Built-ins followed by custom practices, module by module.
    pub fn with_custom(custom: &CustomPractices) -> Self {
        let mut practices = Vec::new();
        let builtin = get_builtin_practices();
        for module in ModuleKey::ALL {
            practices.extend(builtin.iter().filter(|p| p.module == module).cloned());
            practices.extend(custom.iter().filter(|p| p.module == module).cloned());
        }
        Self { practices }
    }

    pub fn all(&self) -> &[Practice] {
        &self.practices
    }

    pub fn by_module(&self, module: ModuleKey) -> impl Iterator<Item = &Practice> {
        self.practices.iter().filter(move |p| p.module == module)
    }

    pub fn find(&self, id: &str) -> Option<&Practice> {
        self.practices.iter().find(|p| p.id == id)
    }

    pub fn module_of(&self, id: &str) -> Option<ModuleKey> {
        self.find(id).map(|p| p.module)
    }
}
