/*!
# Node Representation

We choose `Node = u32` as the dense matrix representation limits us to graphs far below `2^32` nodes anyway.
Nodes are plain indices `0..n`; there are no node objects.
*/

use std::{fmt::Debug, num::NonZero};

use bitvec::prelude::*;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>`. This instead uses the
/// `NonZero`-Wrapper to assign a constant value (often)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

/// As `Option<u64>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<u64>>`. This instead uses the
/// `NonZero`-Wrapper to assign a constant value (often)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalU64Impl<const N: u64>(NonZero<u64>);

/// Often, `u64::MAX` is safe to pick as the `None`-Value
pub type OptionalU64 = OptionalU64Impl<{ u64::MAX }>;

impl<const N: u64> OptionalU64Impl<N> {
    /// Returns `Some(OptionalU64Impl)` if `n != N` and `None` otherwise
    pub const fn new(n: u64) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalU64Impl(inner)),
            None => None,
        }
    }

    /// Gets the underlying u64-Value
    pub const fn get(&self) -> u64 {
        self.0.get() ^ N
    }
}

/// A fixed-size set of nodes `0..n` backed by a bitset.
///
/// All scratch state of the traversal and search algorithms (visited flags, frontier
/// membership, nodes on the current path) lives in one of these.
#[derive(Clone, PartialEq, Eq)]
pub struct NodeBitSet(BitVec);

impl NodeBitSet {
    /// Creates an empty set over the universe `0..n`
    pub fn new(n: NumNodes) -> Self {
        Self(bitvec![0; n as usize])
    }

    /// Creates a set over the universe `0..n` that contains every node
    pub fn new_all_set(n: NumNodes) -> Self {
        Self(bitvec![1; n as usize])
    }

    /// Creates a set over the universe `0..n` that contains exactly the given nodes
    pub fn new_with_bits_set<I>(n: NumNodes, bits: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut set = Self::new(n);
        set.set_bits(bits);
        set
    }

    /// Size of the universe
    pub fn number_of_bits(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Inserts `u` and returns *true* if it was already contained
    pub fn set_bit(&mut self, u: Node) -> bool {
        self.0.replace(u as usize, true)
    }

    /// Inserts all given nodes
    pub fn set_bits<I>(&mut self, bits: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for u in bits {
            self.set_bit(u);
        }
    }

    /// Removes `u` and returns *true* if it was contained before
    pub fn clear_bit(&mut self, u: Node) -> bool {
        self.0.replace(u as usize, false)
    }

    /// Returns *true* if `u` is contained
    pub fn get_bit(&self, u: Node) -> bool {
        self.0[u as usize]
    }

    /// Removes all nodes
    pub fn clear_all(&mut self) {
        self.0.fill(false);
    }

    /// Number of contained nodes
    pub fn cardinality(&self) -> NumNodes {
        self.0.count_ones() as NumNodes
    }

    /// Returns *true* if every node of the universe is contained
    pub fn are_all_set(&self) -> bool {
        self.0.all()
    }

    /// Iterates over all contained nodes in ascending order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter_ones().map(|u| u as Node)
    }
}

impl Debug for NodeBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter_set_bits()).finish()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn optional_node() {
        assert_eq!(OptionalNode::new(INVALID_NODE), None);
        assert_eq!(OptionalNode::new(0).map(|u| u.get()), Some(0));
        assert_eq!(OptionalNode::new(17).map(|u| u.get()), Some(17));
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );
    }

    #[test]
    fn bitset_ops() {
        let mut set = NodeBitSet::new(10);
        assert_eq!(set.cardinality(), 0);

        assert!(!set.set_bit(3));
        assert!(set.set_bit(3));
        assert!(set.get_bit(3));
        assert!(!set.get_bit(4));

        set.set_bits([1, 7, 9]);
        assert_eq!(set.iter_set_bits().collect_vec(), vec![1, 3, 7, 9]);
        assert_eq!(set.cardinality(), 4);

        assert!(set.clear_bit(7));
        assert!(!set.clear_bit(7));
        assert_eq!(set.cardinality(), 3);

        set.clear_all();
        assert_eq!(set.cardinality(), 0);
        assert_eq!(set.number_of_bits(), 10);

        let full = NodeBitSet::new_all_set(5);
        assert!(full.are_all_set());
        assert!(!NodeBitSet::new_with_bits_set(5, [0, 1, 2, 3]).are_all_set());
    }
}
