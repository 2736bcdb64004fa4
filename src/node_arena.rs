use crate::error::{KeySetError, Result};
use crate::iter::ChainIter;
use crate::node::{ChainLink, Node, NodeId};
use crate::ArenaPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaStats {
    pub capacity: usize,
    pub high_water_mark: usize,
    pub free_slots: usize,
    pub live_nodes: usize,
}

/// Capacity after one growth step: doubles, never by less than `unit`.
pub fn grow_capacity(capacity: usize, unit: usize) -> usize {
    capacity.saturating_add(capacity.max(unit).max(1))
}

/// Index-addressed slot storage for collision chains.
///
/// Slots below `high_water_mark` are either linked into exactly one chain or
/// sitting on the free list, never both. Slot indices stay valid across
/// growth; only `release` retires one.
#[derive(Debug, Clone)]
pub struct NodeArena {
    nodes: Vec<Node>,
    free_list: Vec<NodeId>,
    capacity: usize,
    sizing_unit: usize,
    policy: ArenaPolicy,
}

impl NodeArena {
    /// `sizing_unit` is a slot count only; backing storage grows with use.
    pub fn with_policy(sizing_unit: usize, policy: ArenaPolicy) -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
            capacity: sizing_unit,
            sizing_unit,
            policy,
        }
    }

    pub fn policy(&self) -> ArenaPolicy {
        self.policy
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn high_water_mark(&self) -> usize {
        self.nodes.len()
    }

    pub fn live_nodes(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            capacity: self.capacity,
            high_water_mark: self.high_water_mark(),
            free_slots: self.free_list.len(),
            live_nodes: self.live_nodes(),
        }
    }

    /// Hands out a slot linked to `initial_next`, preferring recycled slots.
    pub(crate) fn allocate(&mut self, initial_next: ChainLink) -> Result<NodeId> {
        let id = match self.free_list.pop() {
            Some(id) => id,
            None => {
                if self.nodes.len() >= self.capacity {
                    self.grow()?;
                }
                let id = NodeId::new(self.nodes.len());
                self.nodes.push(Node::empty());
                id
            }
        };

        let node = &mut self.nodes[id.index()];
        node.next = initial_next;
        node.in_use = true;
        Ok(id)
    }

    pub(crate) fn store_key(&mut self, id: NodeId, key: &[u8]) {
        let node = &mut self.nodes[id.index()];
        debug_assert!(node.in_use, "storing a key into a released slot");
        node.key.clear();
        node.key.extend_from_slice(key);
    }

    /// Stored key of a live slot; `None` once the slot is released.
    pub fn key_at(&self, id: NodeId) -> Option<&[u8]> {
        self.nodes
            .get(id.index())
            .filter(|node| node.in_use)
            .map(|node| node.key.as_slice())
    }

    pub fn next_of(&self, id: NodeId) -> ChainLink {
        self.nodes
            .get(id.index())
            .map(|node| node.next)
            .unwrap_or_default()
    }

    pub fn compare(&self, key: &[u8], id: NodeId) -> bool {
        self.key_at(id) == Some(key)
    }

    pub fn chain(&self, head: ChainLink) -> ChainIter<'_> {
        ChainIter::new(self, head)
    }

    pub fn chain_len(&self, head: ChainLink) -> usize {
        self.chain(head).count()
    }

    pub fn find_in_chain(&self, head: ChainLink, key: &[u8]) -> Option<NodeId> {
        self.chain(head).find(|id| self.compare(key, *id))
    }

    pub fn exists_in_chain(&self, head: ChainLink, key: &[u8]) -> bool {
        self.find_in_chain(head, key).is_some()
    }

    /// Pushes `key` in front of `head`; the returned slot is the new head.
    /// On failure nothing is allocated and `head` is still the chain head.
    pub fn insert_at_head(&mut self, head: ChainLink, key: &[u8]) -> Result<NodeId> {
        let id = self.allocate(head)?;
        self.store_key(id, key);
        Ok(id)
    }

    /// Unlinks the node holding `key` and recycles its slot.
    ///
    /// Returns the chain head after removal and whether a node was found;
    /// when nothing matches the chain is untouched and `head` comes back.
    pub fn remove_from_chain(&mut self, head: ChainLink, key: &[u8]) -> (ChainLink, bool) {
        let mut previous: Option<NodeId> = None;
        let mut cursor = head;

        while let ChainLink::Node(id) = cursor {
            let next = self.next_of(id);
            if self.compare(key, id) {
                let new_head = match previous {
                    None => next,
                    Some(previous) => {
                        self.nodes[previous.index()].next = next;
                        head
                    }
                };
                self.release(id);
                return (new_head, true);
            }

            previous = Some(id);
            cursor = next;
        }

        (head, false)
    }

    /// Drops every node. Capacity, including any growth, is kept.
    pub fn clear(&mut self) {
        log::trace!(
            "clearing node arena: {} live nodes, capacity {}",
            self.live_nodes(),
            self.capacity
        );
        self.nodes.clear();
        self.free_list.clear();
    }

    fn release(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.index()];
        debug_assert!(node.in_use, "slot {} released twice", id.index());
        node.in_use = false;
        node.next = ChainLink::Empty;
        node.key.clear();
        self.free_list.push(id);
    }

    fn grow(&mut self) -> Result<()> {
        if self.policy.is_fixed() {
            return Err(KeySetError::PoolExhausted {
                capacity: self.capacity,
            });
        }

        let grown = grow_capacity(self.capacity, self.sizing_unit);
        log::debug!(
            "growing node arena from {} to {} slots",
            self.capacity,
            grown
        );
        self.capacity = grown;
        Ok(())
    }
}
