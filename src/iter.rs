use crate::node::{ChainLink, NodeId};
use crate::node_arena::NodeArena;

/// Walks one collision chain from its head, yielding slot ids.
#[derive(Debug, Clone)]
pub struct ChainIter<'a> {
    arena: &'a NodeArena,
    cursor: ChainLink,
}

impl<'a> ChainIter<'a> {
    pub fn new(arena: &'a NodeArena, head: ChainLink) -> Self {
        Self {
            arena,
            cursor: head,
        }
    }
}

impl Iterator for ChainIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor.node()?;
        self.cursor = self.arena.next_of(id);
        Some(id)
    }
}

/// Every live key of a set, bucket by bucket.
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    arena: &'a NodeArena,
    buckets: std::slice::Iter<'a, ChainLink>,
    chain: Option<ChainIter<'a>>,
}

impl<'a> Keys<'a> {
    pub fn new(arena: &'a NodeArena, buckets: &'a [ChainLink]) -> Self {
        Self {
            arena,
            buckets: buckets.iter(),
            chain: None,
        }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        loop {
            if let Some(id) = self.chain.as_mut().and_then(Iterator::next) {
                if let Some(key) = arena.key_at(id) {
                    return Some(key);
                }
                continue;
            }

            let head = *self.buckets.next()?;
            self.chain = Some(arena.chain(head));
        }
    }
}

pub fn collect_exact_size_keys<'a>(
    keys: impl Iterator<Item = &'a [u8]>,
    byte_size: usize,
) -> Vec<Vec<u8>> {
    let collect_all = byte_size == usize::MAX;
    keys.filter(|key| collect_all || key.len() == byte_size)
        .map(<[u8]>::to_vec)
        .collect()
}
