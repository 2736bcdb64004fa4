/// Stable index of a slot inside a `NodeArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChainLink {
    #[default]
    Empty,
    Node(NodeId),
}

impl ChainLink {
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn node(self) -> Option<NodeId> {
        match self {
            Self::Empty => None,
            Self::Node(id) => Some(id),
        }
    }
}

impl From<NodeId> for ChainLink {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub key: Vec<u8>,
    pub next: ChainLink,
    pub in_use: bool,
}

impl Node {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::{ChainLink, Node, NodeId};

    #[test]
    fn chain_link_exposes_node() {
        let link = ChainLink::from(NodeId::new(7));
        assert!(!link.is_empty());
        assert_eq!(link.node().map(NodeId::index), Some(7));
        assert_eq!(ChainLink::Empty.node(), None);
    }

    #[test]
    fn empty_node_is_unlinked_and_free() {
        let node = Node::empty();
        assert!(node.key.is_empty());
        assert!(node.next.is_empty());
        assert!(!node.in_use);
    }
}
