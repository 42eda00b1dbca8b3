//! Keyed in-memory collection with monotonic id assignment.

use std::collections::BTreeMap;

use crate::Id;

/// A row stored in a [`Table`].
pub trait Record: Clone {
    /// Entity name used in error messages and logs.
    const KIND: &'static str;

    fn id(&self) -> Id;
}

/// Records keyed by id, iterated in ascending id order.
///
/// Ids come from a high-water mark that only moves forward, so an id freed by
/// a removal is never handed out again.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: BTreeMap<Id, T>,
    last_id: Id,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Record> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next [`Table::insert_with`] call will assign.
    pub fn next_id(&self) -> Id {
        self.last_id + 1
    }

    /// Build a record from a freshly assigned id and store it.
    pub fn insert_with(&mut self, build: impl FnOnce(Id) -> T) -> &T {
        let id = self.next_id();
        self.last_id = id;
        self.rows.entry(id).or_insert(build(id))
    }

    /// Store a record under its own id, replacing any previous row with that id.
    pub fn insert(&mut self, record: T) -> Option<T> {
        let id = record.id();
        self.last_id = self.last_id.max(id);
        self.rows.insert(id, record)
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.rows.values().find(|row| pred(row))
    }

    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| pred(row)).cloned().collect()
    }

    pub fn remove(&mut self, id: Id) -> Option<T> {
        self.rows.remove(&id)
    }

    /// Remove every record matching `pred`; returns how many were removed.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(|_, row| !pred(row));
        before - self.rows.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
