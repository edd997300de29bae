//! Id-keyed lookups for cross-entity joins
//!
//! Built once per load so rendering a row is a map lookup instead of a scan
//! over the parent list. Insertion order is kept for dropdowns.

use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::models::{Id, Named};

#[derive(Debug, Clone)]
pub struct Lookup<T> {
    items: Vec<T>,
    index: HashMap<Id, usize>,
}

impl<T> Default for Lookup<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Named> Lookup<T> {
    /// Index `items` by id. On duplicate ids the first occurrence wins.
    pub fn new(items: Vec<T>) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            index.entry(item.id()).or_insert(pos);
        }
        Self { items, index }
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    /// Display name for `id`, or `None` when missing or blank
    pub fn name_of(&self, id: Id) -> Option<&str> {
        self.get(id).map(|item| item.name()).filter(|n| !n.is_empty())
    }

    /// Display name for `id`, falling back to the raw id
    pub fn name_or_id(&self, id: Id) -> String {
        self.name_of(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }
}

impl<T> Lookup<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Serialize> Serialize for Lookup<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}
