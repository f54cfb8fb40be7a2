//! Insertion-ordered registry.
//!
//! Rules must run in the order extensions contributed them, so items are
//! kept in a `Vec` and looked up by scanning.

use std::sync::Arc;

use wcagfix_protocols::error::ExtensionError;

/// Items that can be stored in a registry.
pub trait Registerable: Send + Sync {
    /// Returns the unique identifier for this item.
    fn registry_id(&self) -> &str;
}

/// Registry of uniquely identified items in registration order.
pub struct OrderedRegistry<T: ?Sized + Registerable> {
    items: Vec<Arc<T>>,
}

impl<T: ?Sized + Registerable> OrderedRegistry<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item.
    ///
    /// Returns an error if an item with the same ID is already registered.
    pub fn register(&mut self, item: Arc<T>) -> Result<(), ExtensionError> {
        if self.contains(item.registry_id()) {
            return Err(ExtensionError::AlreadyRegistered(item.registry_id().to_string()));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.items.iter().find(|item| item.registry_id() == id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.registry_id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> + '_ {
        self.items.iter()
    }
}

impl<T: ?Sized + Registerable> Default for OrderedRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "base_tests.rs"]
mod tests;
