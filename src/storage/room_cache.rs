use crate::storage::RoomStore;
use crate::types::{Amount, Year};
use dashmap::DashMap;

/// Memoized contribution room, one entry per year, for a single account.
///
/// Backed by a `DashMap` so years can be precomputed from several threads.
#[derive(Debug, Default)]
pub struct RoomCache {
    cache: DashMap<Year, Amount>
}

impl RoomCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new()
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&self) {
        self.cache.clear();
    }
}

impl RoomStore for RoomCache {
    fn load(&self, year: Year) -> Option<Amount> {
        self.cache.get(&year).map(|entry| *entry.value())
    }

    fn save(&self, year: Year, room: Amount) {
        self.cache.insert(year, room);
    }
}
