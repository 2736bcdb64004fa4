use crate::error::Result;
use crate::node_arena::ArenaStats;

/// Read-only view of a set's shape, for counters and metrics.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct KeySetSnapshot {
    pub len: usize,
    pub bucket_count: usize,
    pub longest_chain: usize,
    pub arena: ArenaStats,
}

pub trait KeySetEngine {
    fn add(&mut self, key: &[u8]) -> Result<()>;

    fn exists(&self, key: &[u8]) -> bool;

    fn remove(&mut self, key: &[u8]) -> Result<()>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn snapshot(&self) -> KeySetSnapshot;
}
