//! Internal node implementation for the radix tree.
//!
//! This module contains the internal `Node` type that forms the backbone of the
//! radix tree. Nodes are owned exclusively by their parent's child list; the
//! root is not a node at all but the tree's own child list.
//!
//! Every key is matched as if the terminal marker `Unit::End` were appended to
//! it. The marker is never stored as a byte: it is implied at the end of every
//! `Leaf` label, so no byte value is reserved and any byte sequence is a key.

use std::mem;

use log::trace;

/// A single unit of key material: one key byte, or the terminal marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    Byte(u8),
    End,
}

impl Unit {
    /// The first unit of `bytes` + marker: the first byte, or `Unit::End` when
    /// `bytes` is empty.
    pub fn leading(bytes: &[u8]) -> Unit {
        bytes.first().map_or(Unit::End, |&b| Unit::Byte(b))
    }
}

/// Internal node type for the radix tree.
///
/// A `Leaf` terminates exactly one stored key; its label is followed by the
/// implied terminal marker. A `Branch` is a pure branch point with a non-empty
/// label and at least two children.
#[derive(Debug, Clone)]
pub(crate) enum Node<V> {
    Leaf { label: Vec<u8>, value: V },
    Branch { label: Vec<u8>, children: Vec<Node<V>> },
}

impl<V> Node<V> {
    /// Creates a new leaf with the given label and value
    pub fn leaf(label: Vec<u8>, value: V) -> Self {
        Node::Leaf { label, value }
    }

    /// The edge label from the parent, without the terminal marker.
    pub fn label(&self) -> &[u8] {
        match self {
            Node::Leaf { label, .. } | Node::Branch { label, .. } => label,
        }
    }

    fn label_mut(&mut self) -> &mut Vec<u8> {
        match self {
            Node::Leaf { label, .. } | Node::Branch { label, .. } => label,
        }
    }

    /// Returns whether this node terminates a stored key
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The first unit of this node's label. An empty leaf label is the marker.
    pub fn leading_unit(&self) -> Unit {
        Unit::leading(self.label())
    }

    /// Whether this node's full label, marker included for leaves, is a prefix
    /// of `rest` followed by the marker. `common` is the byte-level
    /// common prefix length of `rest` and the label.
    pub fn is_prefix_of(&self, rest: &[u8], common: usize) -> bool {
        match self {
            Node::Leaf { label, .. } => common == label.len() && common == rest.len(),
            Node::Branch { label, .. } => common == label.len(),
        }
    }

    /// Consumes the node, returning its value if it is a leaf.
    pub fn into_value(self) -> Option<V> {
        match self {
            Node::Leaf { value, .. } => Some(value),
            Node::Branch { .. } => None,
        }
    }

    /// The children of a branch, `None` for a leaf.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node<V>>> {
        match self {
            Node::Branch { children, .. } => Some(children),
            Node::Leaf { .. } => None,
        }
    }

    /// Number of leaves in this subtree
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match node {
                Node::Leaf { .. } => count += 1,
                Node::Branch { children, .. } => stack.extend(children),
            }
        }

        count
    }

    /// Splits this node's edge after `common` bytes.
    ///
    /// The node is replaced by a branch labelled with the common prefix whose
    /// children are the original node, with its label shortened, and a new leaf
    /// holding `rest[common..]` and `value`. `common` must be non-zero and
    /// strictly inside the match, so the two children differ in leading unit.
    pub fn split(&mut self, common: usize, rest: &[u8], value: V) {
        debug_assert!(common > 0 && common <= self.label().len() && common <= rest.len());

        let prefix = rest[..common].to_vec();
        let leaf = Node::leaf(rest[common..].to_vec(), value);

        // Empty placeholder until the new branch is assembled.
        let mut existing = mem::replace(
            self,
            Node::Branch {
                label: Vec::new(),
                children: Vec::new(),
            },
        );
        existing.label_mut().drain(..common);

        trace!(
            "split edge after {} bytes: {} byte(s) left on the existing child, {} on the new leaf",
            common,
            existing.label().len(),
            leaf.label().len()
        );

        *self = Node::Branch {
            label: prefix,
            children: vec![existing, leaf],
        };
    }

    /// Merges a branch that has a single remaining child into that child.
    ///
    /// The branch's label is prefixed onto the child's label and the child
    /// takes the branch's place. Nodes with any other shape are left alone.
    pub fn collapse(&mut self) {
        let (label, only) = match self {
            Node::Branch { label, children } if children.len() == 1 => match children.pop() {
                Some(only) => (mem::take(label), only),
                None => return,
            },
            _ => return,
        };

        let mut merged = only;
        let suffix = mem::replace(merged.label_mut(), label);
        merged.label_mut().extend_from_slice(&suffix);

        trace!("collapsed branch into its only child, label now {} byte(s)", merged.label().len());

        *self = merged;
    }
}
