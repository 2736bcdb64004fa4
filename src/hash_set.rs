//! Bucketed set of byte-string keys on top of a `NodeArena`.
//!
//! Each bucket holds the head of a collision chain. Keys land in bucket
//! `hash(key) % bucket_count`; the bucket table never resizes, only the arena
//! behind it may grow. A failed call leaves the set exactly as it was.

use crate::config::KeySetConfig;
use crate::core_api::{KeySetEngine, KeySetSnapshot};
use crate::error::{KeySetError, Result};
use crate::hash::HashFn;
use crate::iter::{collect_exact_size_keys, Keys};
use crate::node::ChainLink;
use crate::node_arena::{ArenaStats, NodeArena};
use crate::ArenaPolicy;

#[derive(Debug, Clone)]
pub struct HashSet {
    buckets: Vec<ChainLink>,
    arena: NodeArena,
    hash_fn: HashFn,
    count: usize,
}

impl HashSet {
    pub fn new(
        bucket_count: usize,
        arena_sizing: usize,
        fixed: bool,
        hash_fn: Option<HashFn>,
    ) -> Result<Self> {
        Self::from_config(&KeySetConfig::new(
            bucket_count,
            arena_sizing,
            ArenaPolicy::from_fixed(fixed),
            hash_fn,
        ))
    }

    pub fn from_config(config: &KeySetConfig) -> Result<Self> {
        let hash_fn = config.validate()?;
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(config.bucket_count)
            .map_err(|error| {
                KeySetError::InvalidConfig(format!(
                    "cannot allocate {} buckets: {error}",
                    config.bucket_count
                ))
            })?;
        buckets.resize(config.bucket_count, ChainLink::Empty);
        Ok(Self {
            buckets,
            arena: NodeArena::with_policy(config.arena_sizing, config.policy),
            hash_fn,
            count: 0,
        })
    }

    /// Inserts `key`. Adding a key that is already present succeeds without
    /// touching the set.
    pub fn add(&mut self, key: &[u8]) -> Result<()> {
        let bucket = self.bucket_index(key);
        let head = self.buckets[bucket];
        if self.arena.exists_in_chain(head, key) {
            return Ok(());
        }

        let new_head = self.arena.insert_at_head(head, key)?;
        self.buckets[bucket] = new_head.into();
        self.count += 1;
        Ok(())
    }

    pub fn exists(&self, key: &[u8]) -> bool {
        self.arena
            .exists_in_chain(self.buckets[self.bucket_index(key)], key)
    }

    pub fn remove(&mut self, key: &[u8]) -> Result<()> {
        let bucket = self.bucket_index(key);
        let (new_head, found) = self.arena.remove_from_chain(self.buckets[bucket], key);
        if !found {
            return Err(KeySetError::NotFound);
        }

        self.buckets[bucket] = new_head;
        self.count -= 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        self.buckets.fill(ChainLink::Empty);
        self.arena.clear();
        self.count = 0;
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn policy(&self) -> ArenaPolicy {
        self.arena.policy()
    }

    pub fn bucket_index(&self, key: &[u8]) -> usize {
        ((self.hash_fn)(key) % self.buckets.len() as u64) as usize
    }

    pub fn keys(&self) -> Keys<'_> {
        Keys::new(&self.arena, &self.buckets)
    }

    /// Owned copies of every key exactly `byte_size` bytes long;
    /// `usize::MAX` collects every key regardless of length.
    pub fn collect_keys(&self, byte_size: usize) -> Vec<Vec<u8>> {
        collect_exact_size_keys(self.keys(), byte_size)
    }

    pub fn longest_chain(&self) -> usize {
        self.buckets
            .iter()
            .map(|head| self.arena.chain_len(*head))
            .max()
            .unwrap_or(0)
    }

    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    pub fn snapshot(&self) -> KeySetSnapshot {
        KeySetSnapshot {
            len: self.count,
            bucket_count: self.buckets.len(),
            longest_chain: self.longest_chain(),
            arena: self.arena.stats(),
        }
    }
}

impl KeySetEngine for HashSet {
    fn add(&mut self, key: &[u8]) -> Result<()> {
        self.add(key)
    }

    fn exists(&self, key: &[u8]) -> bool {
        self.exists(key)
    }

    fn remove(&mut self, key: &[u8]) -> Result<()> {
        self.remove(key)
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn snapshot(&self) -> KeySetSnapshot {
        self.snapshot()
    }
}
