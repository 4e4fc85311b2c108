mod room_cache;

use crate::types::{Amount, Year};

pub use room_cache::RoomCache;

/// Where computed contribution room is remembered between queries.
pub trait RoomStore: Send + Sync {
    fn load(&self, year: Year) -> Option<Amount>;
    fn save(&self, year: Year, room: Amount);
}
