//! Identifier Generation
//!
//! Ids look like millisecond timestamps, which keeps them compatible with
//! snapshots written by earlier versions, but never repeat: each new id is
//! strictly greater than every id issued or observed before it.

use super::item::{ItemId, SubItemId};

/// Millisecond clock
pub type Clock = fn() -> u64;

/// Wall-clock milliseconds since the Unix epoch
pub fn system_clock() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

/// Monotonic id source shared by items and sub-items
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: u64,
    clock: Clock,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_clock(system_clock)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { last: 0, clock }
    }

    /// Record an id that already exists so it is never reissued
    pub fn observe(&mut self, raw: u64) {
        self.last = self.last.max(raw);
    }

    fn next_raw(&mut self) -> u64 {
        let next = (self.clock)().max(self.last.saturating_add(1));
        self.last = next;
        next
    }

    pub fn next_item_id(&mut self) -> ItemId {
        ItemId(self.next_raw())
    }

    pub fn next_sub_item_id(&mut self) -> SubItemId {
        SubItemId(self.next_raw())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
