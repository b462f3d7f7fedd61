// Keyed containers under the three capacity classes.
//
// `LockedTable` is the synchronized container (one lock per operation),
// `PlainMap` the unsynchronized one. Both map fixture keys to the shared
// buffer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::buffer::LockedBuffer;
use crate::fixtures::FixtureKey;

pub type Value = Arc<LockedBuffer>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityClass {
    Default,
    Tuned,
    Oversized,
}

impl CapacityClass {
    pub const ALL: [CapacityClass; 3] = [
        CapacityClass::Default,
        CapacityClass::Tuned,
        CapacityClass::Oversized,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    LockedTable,
    PlainMap,
}

impl ContainerKind {
    /// Initial capacity requested for `class`; `None` uses `new()`.
    pub fn initial_capacity(self, class: CapacityClass) -> Option<usize> {
        match (self, class) {
            (_, CapacityClass::Default) => None,
            (ContainerKind::LockedTable, CapacityClass::Tuned) => Some(101),
            (ContainerKind::LockedTable, CapacityClass::Oversized) => Some(1001),
            (ContainerKind::PlainMap, CapacityClass::Tuned) => Some(128),
            (ContainerKind::PlainMap, CapacityClass::Oversized) => Some(1024),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ContainerKind::LockedTable => "locked table",
            ContainerKind::PlainMap => "plain map",
        }
    }
}

fn new_map(capacity: Option<usize>) -> HashMap<FixtureKey, Value> {
    match capacity {
        Some(capacity) => HashMap::with_capacity(capacity),
        None => HashMap::new(),
    }
}

pub trait Store {
    const KIND: ContainerKind;

    fn with_capacity(capacity: Option<usize>) -> Self;

    fn put(&mut self, key: FixtureKey, value: Value);

    fn lookup(&self, key: &FixtureKey) -> Option<Value>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    fn for_class(class: CapacityClass) -> Self
    where
        Self: Sized,
    {
        Self::with_capacity(Self::KIND.initial_capacity(class))
    }
}

#[derive(Debug, Default)]
pub struct LockedTable {
    entries: Mutex<HashMap<FixtureKey, Value>>,
}

impl LockedTable {
    fn guard(&self) -> MutexGuard<'_, HashMap<FixtureKey, Value>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Store for LockedTable {
    const KIND: ContainerKind = ContainerKind::LockedTable;

    fn with_capacity(capacity: Option<usize>) -> Self {
        LockedTable {
            entries: Mutex::new(new_map(capacity)),
        }
    }

    // Always through the lock, never `get_mut`.
    fn put(&mut self, key: FixtureKey, value: Value) {
        self.guard().insert(key, value);
    }

    fn lookup(&self, key: &FixtureKey) -> Option<Value> {
        self.guard().get(key).cloned()
    }

    fn len(&self) -> usize {
        self.guard().len()
    }

    fn clear(&mut self) {
        self.guard().clear();
    }
}

#[derive(Debug, Default)]
pub struct PlainMap {
    entries: HashMap<FixtureKey, Value>,
}

impl Store for PlainMap {
    const KIND: ContainerKind = ContainerKind::PlainMap;

    fn with_capacity(capacity: Option<usize>) -> Self {
        PlainMap {
            entries: new_map(capacity),
        }
    }

    fn put(&mut self, key: FixtureKey, value: Value) {
        self.entries.insert(key, value);
    }

    fn lookup(&self, key: &FixtureKey) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// One long-lived container per capacity class.
#[derive(Debug)]
pub struct SharedStores<S> {
    default: S,
    tuned: S,
    oversized: S,
}

impl<S: Store> SharedStores<S> {
    pub fn new() -> Self {
        SharedStores {
            default: S::for_class(CapacityClass::Default),
            tuned: S::for_class(CapacityClass::Tuned),
            oversized: S::for_class(CapacityClass::Oversized),
        }
    }

    pub fn get(&self, class: CapacityClass) -> &S {
        match class {
            CapacityClass::Default => &self.default,
            CapacityClass::Tuned => &self.tuned,
            CapacityClass::Oversized => &self.oversized,
        }
    }

    pub fn get_mut(&mut self, class: CapacityClass) -> &mut S {
        match class {
            CapacityClass::Default => &mut self.default,
            CapacityClass::Tuned => &mut self.tuned,
            CapacityClass::Oversized => &mut self.oversized,
        }
    }
}

impl<S: Store> Default for SharedStores<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Fixtures;

    fn populate<S: Store>(class: CapacityClass, fixtures: &Fixtures) -> S {
        let mut store = S::for_class(class);
        for key in fixtures.keys() {
            store.put(*key, Arc::clone(fixtures.shared()));
        }
        store
    }

    #[test]
    fn capacity_table() {
        let table = ContainerKind::LockedTable;
        let map = ContainerKind::PlainMap;
        assert_eq!(table.initial_capacity(CapacityClass::Default), None);
        assert_eq!(table.initial_capacity(CapacityClass::Tuned), Some(101));
        assert_eq!(table.initial_capacity(CapacityClass::Oversized), Some(1001));
        assert_eq!(map.initial_capacity(CapacityClass::Default), None);
        assert_eq!(map.initial_capacity(CapacityClass::Tuned), Some(128));
        assert_eq!(map.initial_capacity(CapacityClass::Oversized), Some(1024));
    }

    #[test]
    fn capacity_class_does_not_change_contents() {
        let fixtures = Fixtures::new();
        for class in CapacityClass::ALL {
            let table: LockedTable = populate(class, &fixtures);
            let map: PlainMap = populate(class, &fixtures);
            assert_eq!(table.len(), 64, "{class:?}");
            assert_eq!(map.len(), 64, "{class:?}");
            for key in fixtures.keys() {
                assert_eq!(table.lookup(key).map(|v| v.len()), Some(64));
                assert_eq!(map.lookup(key).map(|v| v.len()), Some(64));
            }
        }
    }

    #[test]
    fn refill_after_clear_keeps_size() {
        let fixtures = Fixtures::new();
        let mut stores: SharedStores<PlainMap> = SharedStores::new();
        let store = stores.get_mut(CapacityClass::Tuned);
        for _ in 0..3 {
            store.clear();
            assert!(store.is_empty());
            for key in fixtures.keys() {
                store.put(*key, Arc::clone(fixtures.shared()));
            }
            assert_eq!(store.len(), 64);
        }
        assert!(stores.get(CapacityClass::Default).is_empty());
    }
}
