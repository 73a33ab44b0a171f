//! Immutable record snapshots and the store that swaps them.
//!
//! A [`Catalog`] is built once from a loaded record list and never mutated.
//! [`CatalogStore`] holds the current snapshot behind an [`ArcSwap`]: readers
//! grab an `Arc<Catalog>` for the duration of a request, and a reload installs
//! a complete new snapshot in one atomic store. In-flight requests keep the
//! snapshot they started with.

use arc_swap::ArcSwap;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tracing::warn;

use crate::filtering::{apply, CompoundQuery, Page};
use crate::record::Record;

/// A record together with the ids of its neighbours in load order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordLookup<'a> {
    pub record: &'a Record,
    pub prev_id: Option<i64>,
    pub next_id: Option<i64>,
}

/// Read-only record set plus an id index.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<Record>,
    positions: HashMap<i64, usize>,
}

impl Catalog {
    /// Index `records` by id. When ids repeat, lookups resolve to the first
    /// occurrence.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        let mut positions = HashMap::with_capacity(records.len());
        let mut duplicates = 0usize;
        for (position, record) in records.iter().enumerate() {
            match positions.entry(record.id) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(_) => duplicates += 1,
            }
        }
        if duplicates > 0 {
            warn!(duplicates, "Record set contains duplicate ids; lookups use the first occurrence");
        }
        Self { records, positions }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run the filtering pipeline over this snapshot.
    #[must_use]
    pub fn query(&self, query: &CompoundQuery) -> Page<&Record> {
        apply(&self.records, query)
    }

    /// Find a record by id, with its load-order neighbours.
    #[must_use]
    pub fn lookup(&self, id: i64) -> Option<RecordLookup<'_>> {
        let position = *self.positions.get(&id)?;
        let prev_id = position
            .checked_sub(1)
            .and_then(|prev| self.records.get(prev))
            .map(|record| record.id);
        let next_id = self.records.get(position + 1).map(|record| record.id);
        Some(RecordLookup {
            record: &self.records[position],
            prev_id,
            next_id,
        })
    }
}

/// Holder of the current [`Catalog`] snapshot.
#[derive(Debug)]
pub struct CatalogStore {
    current: ArcSwap<Catalog>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: ArcSwap::from_pointee(catalog),
        }
    }

    /// The snapshot to use for one request.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.load_full()
    }

    /// Install `catalog` as the current snapshot and return the previous one.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        self.current.swap(Arc::new(catalog))
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(Catalog::empty())
    }
}
