use crate::cs::compression::huffman::{FrequencyTable, Symbol};
use crate::cs::compression::Result;
use crate::cs::error::Error;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Represents a node in the Huffman prefix tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixNode {
    /// A leaf node contains a symbol and its weight.
    Leaf { symbol: Symbol, weight: u64 },
    /// An internal node with "zero" and "one" children and their combined weight.
    Internal {
        weight: u64,
        zero: Box<PrefixNode>,
        one: Box<PrefixNode>,
    },
}

impl PrefixNode {
    /// Returns the weight of the node.
    pub fn weight(&self) -> u64 {
        match self {
            PrefixNode::Leaf { weight, .. } => *weight,
            PrefixNode::Internal { weight, .. } => *weight,
        }
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            PrefixNode::Leaf { .. } => 1,
            PrefixNode::Internal { zero, one, .. } => zero.leaf_count() + one.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            PrefixNode::Leaf { .. } => 0,
            PrefixNode::Internal { zero, one, .. } => 1 + zero.depth().max(one.depth()),
        }
    }

    fn merge(zero: Box<PrefixNode>, one: Box<PrefixNode>) -> Result<Box<PrefixNode>> {
        let weight = zero.weight().checked_add(one.weight()).ok_or_else(|| {
            Error::InvalidInput("Combined symbol weights overflow u64".to_string())
        })?;
        Ok(Box::new(PrefixNode::Internal { weight, zero, one }))
    }
}

/// A heap entry. The lowest weight has highest priority; among equal weights the
/// entry pushed first wins.
#[derive(Debug)]
struct NodeWrapper {
    node: Box<PrefixNode>,
    seq: usize,
}

impl PartialEq for NodeWrapper {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeWrapper {}

impl Ord for NodeWrapper {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse: BinaryHeap is a max-heap.
        other
            .node
            .weight()
            .cmp(&self.node.weight())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeWrapper {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for a frequency table.
///
/// Leaves enter the queue in ascending symbol order and every merged node enters
/// after all nodes already queued, so equal weights resolve in insertion order.
/// The first node extracted becomes the "zero" child, the second the "one" child.
///
/// A table with a single symbol still produces an internal root: the symbol hangs
/// off the zero branch and a zero-weight [`Symbol::NotASymbol`] leaf pads the one
/// branch, giving the lone symbol the code `0`.
///
/// Returns `Error::InvalidInput` for an empty table or when the weights sum past
/// `u64::MAX`.
pub fn build_prefix_tree(table: &FrequencyTable) -> Result<Box<PrefixNode>> {
    let mut heap = BinaryHeap::with_capacity(table.len());
    let mut seq = 0;
    for (&symbol, &weight) in table {
        heap.push(NodeWrapper {
            node: Box::new(PrefixNode::Leaf { symbol, weight }),
            seq,
        });
        seq += 1;
    }

    if heap.is_empty() {
        return Err(Error::InvalidInput(
            "Cannot build a prefix tree from an empty frequency table".to_string(),
        ));
    }
    if heap.len() == 1 {
        if let Some(NodeWrapper { node, .. }) = heap.pop() {
            let padding = Box::new(PrefixNode::Leaf {
                symbol: Symbol::NotASymbol,
                weight: 0,
            });
            return PrefixNode::merge(node, padding);
        }
    }

    // Combine nodes until only one tree remains.
    while heap.len() > 1 {
        if let (Some(zero), Some(one)) = (heap.pop(), heap.pop()) {
            log::trace!("merging weights {} + {}", zero.node.weight(), one.node.weight());
            heap.push(NodeWrapper {
                node: PrefixNode::merge(zero.node, one.node)?,
                seq,
            });
            seq += 1;
        }
    }

    heap.pop().map(|wrapper| wrapper.node).ok_or_else(|| {
        Error::InvalidInput("Prefix tree construction left no root".to_string())
    })
}
