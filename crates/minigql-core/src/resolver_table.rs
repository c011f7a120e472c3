use crate::Arguments;
use crate::Resolved;
use crate::Resolver;
use crate::ResolverError;
use crate::Value;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// A table of resolvers keyed by field name.
///
/// Guarded by its own read/write lock: registrations take the write lock,
/// lookups take the read lock only long enough to clone the resolver's `Arc`,
/// so no lock is held while a resolver runs.
#[derive(Default)]
pub struct ResolverTable {
    resolvers: RwLock<HashMap<String, Resolver>>,
}

impl ResolverTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `resolver` for `field_name`, replacing any previous
    /// registration. Returns `true` if one was replaced.
    pub fn insert<F>(&self, field_name: impl Into<String>, resolver: F) -> bool
    where
        F: Fn(Option<&Value>, &Arguments) -> Result<Resolved, ResolverError>
            + Send
            + Sync
            + 'static,
    {
        self.resolvers
            .write()
            .insert(field_name.into(), Arc::new(resolver))
            .is_some()
    }

    pub fn get(&self, field_name: &str) -> Option<Resolver> {
        self.resolvers.read().get(field_name).cloned()
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.resolvers.read().contains_key(field_name)
    }

    /// Removes the resolver for `field_name`, returning whether there was one.
    pub fn remove(&self, field_name: &str) -> bool {
        self.resolvers.write().remove(field_name).is_some()
    }

    /// Registered field names, sorted.
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.resolvers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.resolvers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.read().is_empty()
    }
}

impl std::fmt::Debug for ResolverTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverTable")
            .field("field_names", &self.field_names())
            .finish()
    }
}
