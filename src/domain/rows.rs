//! Repeatable form rows
//!
//! Every repeatable section of a form (image URLs, tickets, steps, ...) is a
//! `RowList`: an arena keyed by a monotonic, never-reused `RowId`, with a
//! minimum row count (`FLOOR`) that removals cannot go below.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Session-scoped identifier of a row inside one `RowList`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(u32);

impl RowId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered rows with arena-style id allocation.
///
/// Ids are handed out in increasing order, so iterating the underlying
/// `BTreeMap` yields rows in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct RowList<T, const FLOOR: usize> {
    rows: BTreeMap<RowId, T>,
    next_id: u32,
}

impl<T, const FLOOR: usize> RowList<T, FLOOR> {
    /// Create an empty list. Only meaningful for sections with a floor of 0;
    /// use [`RowList::new`] or [`RowList::with_rows`] otherwise.
    fn empty() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Minimum number of rows this section keeps
    pub const fn floor(&self) -> usize {
        FLOOR
    }

    /// Append a row and return its id. The counter advances unconditionally.
    pub fn push(&mut self, value: T) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.insert(id, value);
        id
    }

    /// Remove a row by id.
    ///
    /// Returns `None` without touching the list when the id is unknown or the
    /// removal would drop the section below its floor.
    pub fn remove(&mut self, id: RowId) -> Option<T> {
        if self.rows.len() <= FLOOR {
            tracing::debug!("Row {} kept: section is at its floor of {}", id, FLOOR);
            return None;
        }
        let removed = self.rows.remove(&id);
        if removed.is_none() {
            tracing::debug!("Row {} not found, nothing removed", id);
        }
        removed
    }

    pub fn get(&self, id: RowId) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: RowId) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Id the next `push` will assign
    pub const fn next_id(&self) -> RowId {
        RowId(self.next_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = RowId> + '_ {
        self.rows.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RowId, &T)> {
        self.rows.iter().map(|(id, row)| (*id, row))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (RowId, &mut T)> {
        self.rows.iter_mut().map(|(id, row)| (*id, row))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }
}

impl<T: Default, const FLOOR: usize> RowList<T, FLOOR> {
    /// A list holding exactly `FLOOR` blank rows
    pub fn new() -> Self {
        Self::with_rows(FLOOR)
    }

    /// A list holding `count` blank rows (never fewer than `FLOOR`)
    pub fn with_rows(count: usize) -> Self {
        let mut list = Self::empty();
        for _ in 0..count.max(FLOOR) {
            list.push(T::default());
        }
        list
    }

    /// Build from values in order, padding with blank rows up to `FLOOR`
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let mut list = Self::empty();
        for value in values {
            list.push(value);
        }
        while list.len() < FLOOR {
            list.push(T::default());
        }
        list
    }

    /// Append a blank row
    pub fn add(&mut self) -> RowId {
        self.push(T::default())
    }
}

impl<T: Default, const FLOOR: usize> Default for RowList<T, FLOOR> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize, const FLOOR: usize> Serialize for RowList<T, FLOOR> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows.values())
    }
}

impl<'de, T, const FLOOR: usize> Deserialize<'de> for RowList<T, FLOOR>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::from_values(values))
    }
}
