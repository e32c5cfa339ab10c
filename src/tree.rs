//! The main tree implementation.
//!
//! This module contains the `RadixTree` type, which provides the primary API for
//! working with the compressed prefix tree.

use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::mem;

use log::debug;

use crate::key_converter::{BytesKeyConverter, KeyToBytes, StrKeyConverter};
use crate::node::{Node, Unit};
use crate::util::prefix_match;
use crate::InvariantError;

/// A radix tree keyed by raw bytes.
pub type BytesRadixTree<V> = RadixTree<[u8], V, BytesKeyConverter<[u8]>>;

/// A radix tree keyed by anything that implements `AsRef<str>`, usually `str`.
pub type StringRadixTree<K, V> = RadixTree<K, V, StrKeyConverter<K>>;

/// A mutable compressed prefix tree.
///
/// This Radix Tree (also known as a Patricia Trie) stores key-value pairs along
/// labelled edges, merging chains of single-child nodes so that every branch
/// point below the root has at least two children.
///
/// Keys are turned into bytes by the `KC` converter. Every key is matched as
/// if it ended in a terminal marker that no byte can equal, so a key and a
/// longer key it prefixes always end at different leaves.
pub struct RadixTree<K: ?Sized, V, KC = BytesKeyConverter<K>> {
    /// Children of the root; the root itself has an empty label and no value
    pub(crate) root: Vec<Node<V>>,

    /// The number of keys stored in the tree
    size: usize,

    _converter: PhantomData<fn(&K) -> KC>,
}

impl<K: ?Sized, V, KC> RadixTree<K, V, KC> {
    /// Creates a new, empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::StringRadixTree;
    ///
    /// let tree = StringRadixTree::<str, i32>::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        RadixTree {
            root: Vec::new(),
            size: 0,
            _converter: PhantomData,
        }
    }

    /// Returns the number of keys stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::StringRadixTree;
    ///
    /// let mut tree = StringRadixTree::<str, i32>::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert("hello", 42);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        if self.size > 0 {
            debug!("clearing radix tree holding {} key(s)", self.size);
        }
        self.root.clear();
        self.size = 0;
    }

    /// Checks the structural invariants of the tree.
    ///
    /// Verifies that no two siblings share a leading unit, that every branch
    /// below the root has a non-empty label and at least two children, and
    /// that `len()` matches the number of leaves.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::StringRadixTree;
    ///
    /// let mut tree = StringRadixTree::<str, i32>::new();
    /// tree.insert("test", 1);
    /// tree.insert("team", 2);
    /// tree.remove("test");
    ///
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), InvariantError> {
        check_children(&self.root)?;

        let counted: usize = self.root.iter().map(Node::subtree_size).sum();
        if counted != self.size {
            return Err(InvariantError::LenMismatch {
                recorded: self.size,
                counted,
            });
        }

        Ok(())
    }
}

impl<K, V, KC> RadixTree<K, V, KC>
where
    K: ?Sized,
    KC: KeyToBytes<K>,
{
    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::StringRadixTree;
    ///
    /// let mut tree = StringRadixTree::<str, i32>::new();
    /// tree.insert("hello", 42);
    ///
    /// assert_eq!(tree.get("hello"), Some(&42));
    /// assert_eq!(tree.get("hell"), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let key_bytes = KC::convert(key);

        // Navigate from the root
        let mut children = &self.root[..];
        let mut remaining = &key_bytes[..];

        loop {
            let child = &children[find_child(children, remaining)?];

            let common_len = prefix_match(remaining, 0, child.label());
            if !child.is_prefix_of(remaining, common_len) {
                return None;
            }

            match child {
                Node::Leaf { value, .. } => return Some(value),
                Node::Branch { children: next, .. } => {
                    children = next.as_slice();
                    remaining = &remaining[common_len..];
                }
            }
        }
    }

    /// Retrieves a mutable reference to the value stored for the given key.
    ///
    /// The shape of the tree is never changed.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let key_bytes = KC::convert(key);
        lookup_mut(&mut self.root, &key_bytes)
    }

    /// Returns `true` if the tree contains a value for the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::BytesRadixTree;
    ///
    /// let mut tree = BytesRadixTree::new();
    /// tree.insert(b"abc", ());
    ///
    /// assert!(tree.contains_key(b"abc"));
    /// assert!(!tree.contains_key(b"ab"));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a key-value pair into the tree.
    ///
    /// If the key already exists, its value is replaced and the previous value
    /// is returned; the shape of the tree does not change.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::StringRadixTree;
    ///
    /// let mut tree = StringRadixTree::<str, i32>::new();
    /// assert_eq!(tree.insert("abc", 1), None);
    /// assert_eq!(tree.insert("abcd", 2), None);
    /// assert_eq!(tree.insert("abc", 3), Some(1));
    ///
    /// assert_eq!(tree.get("abc"), Some(&3));
    /// assert_eq!(tree.get("abcd"), Some(&2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: &K, value: V) -> Option<V> {
        let key_bytes = KC::convert(key);

        let replaced = insert_into(&mut self.root, &key_bytes, value);
        if replaced.is_none() {
            self.size += 1;
        }

        replaced
    }

    /// Removes a key from the tree, returning its value if it was present.
    ///
    /// Removing an absent key leaves the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_mutable::StringRadixTree;
    ///
    /// let mut tree = StringRadixTree::<str, i32>::new();
    /// tree.insert("hello", 42);
    ///
    /// assert_eq!(tree.remove("hello"), Some(42));
    /// assert_eq!(tree.remove("hello"), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let key_bytes = KC::convert(key);

        let removed = remove_from(&mut self.root, &key_bytes);
        if removed.is_some() {
            self.size -= 1;
        }

        removed
    }
}

/// Index of the child whose label starts with the leading unit of `remaining`.
fn find_child<V>(children: &[Node<V>], remaining: &[u8]) -> Option<usize> {
    let unit = Unit::leading(remaining);
    children.iter().position(|child| child.leading_unit() == unit)
}

fn lookup_mut<'a, V>(root: &'a mut Vec<Node<V>>, key: &[u8]) -> Option<&'a mut V> {
    let mut children = root;
    let mut remaining = key;

    loop {
        let idx = find_child(children, remaining)?;

        let common_len = prefix_match(remaining, 0, children[idx].label());
        if !children[idx].is_prefix_of(remaining, common_len) {
            return None;
        }

        match &mut children[idx] {
            Node::Leaf { value, .. } => return Some(value),
            Node::Branch { children: next, .. } => {
                children = next;
                remaining = &remaining[common_len..];
            }
        }
    }
}

// Descends from `root` and returns the replaced value when the key was
// already present.
fn insert_into<V>(root: &mut Vec<Node<V>>, key: &[u8], value: V) -> Option<V> {
    let mut children = root;
    let mut remaining = key;

    loop {
        let idx = match find_child(children, remaining) {
            Some(idx) => idx,
            None => {
                // No child shares the leading unit: attach the whole suffix as a leaf
                children.push(Node::leaf(remaining.to_vec(), value));
                return None;
            }
        };

        let common_len = prefix_match(remaining, 0, children[idx].label());

        if !children[idx].is_prefix_of(remaining, common_len) {
            // The edge diverges partway through, split it in its slot
            children[idx].split(common_len, remaining, value);
            return None;
        }

        match &mut children[idx] {
            Node::Leaf { value: old, .. } => return Some(mem::replace(old, value)),
            Node::Branch { children: next, .. } => {
                children = next;
                remaining = &remaining[common_len..];
            }
        }
    }
}

/// Child indices from the root down to the leaf storing `key`.
fn locate<V>(root: &[Node<V>], key: &[u8]) -> Option<Vec<usize>> {
    let mut path = Vec::new();
    let mut children = root;
    let mut remaining = key;

    loop {
        let idx = find_child(children, remaining)?;
        let child = &children[idx];

        let common_len = prefix_match(remaining, 0, child.label());
        if !child.is_prefix_of(remaining, common_len) {
            return None;
        }
        path.push(idx);

        match child {
            Node::Leaf { .. } => return Some(path),
            Node::Branch { children: next, .. } => {
                children = next.as_slice();
                remaining = &remaining[common_len..];
            }
        }
    }
}

// Removes the leaf for `key`, then collapses its parent in the slot that holds
// it. Collapsing swaps one child for another, so the grandparent keeps its
// child count and nothing above needs to be revisited. A leaf directly under
// the root leaves nothing to collapse.
fn remove_from<V>(root: &mut Vec<Node<V>>, key: &[u8]) -> Option<V> {
    let path = locate(root.as_slice(), key)?;
    let (&leaf_idx, ancestors) = path.split_last()?;

    let (&parent_idx, above) = match ancestors.split_last() {
        Some(split) => split,
        None => return root.swap_remove(leaf_idx).into_value(),
    };

    let mut children = root;
    for &idx in above {
        children = children[idx].children_mut()?;
    }

    let removed = children[parent_idx].children_mut()?.swap_remove(leaf_idx).into_value();
    children[parent_idx].collapse();

    removed
}

// Walks the tree with an explicit stack. Each entry is a child list, the
// prefix length of its parent, and the parent's label.
fn check_children<V>(root: &[Node<V>]) -> Result<(), InvariantError> {
    let mut prefix: Vec<u8> = Vec::new();
    let mut stack: Vec<(&[Node<V>], usize, &[u8])> = Vec::new();
    stack.push((root, 0, &b""[..]));

    while let Some((children, depth, parent_label)) = stack.pop() {
        prefix.truncate(depth);
        prefix.extend_from_slice(parent_label);

        for (i, child) in children.iter().enumerate() {
            let unit = child.leading_unit();
            if children[..i].iter().any(|sibling| sibling.leading_unit() == unit) {
                return Err(InvariantError::DuplicateLeadingUnit {
                    prefix: prefix.clone(),
                });
            }

            if let Node::Branch {
                label,
                children: grandchildren,
            } = child
            {
                if label.is_empty() {
                    return Err(InvariantError::EmptyBranchLabel {
                        prefix: prefix.clone(),
                    });
                }
                if grandchildren.len() < 2 {
                    return Err(InvariantError::UnderfullBranch {
                        prefix: [&prefix[..], &label[..]].concat(),
                        children: grandchildren.len(),
                    });
                }

                stack.push((grandchildren.as_slice(), prefix.len(), label.as_slice()));
            }
        }
    }

    Ok(())
}

// Default implementation
impl<K: ?Sized, V, KC> Default for RadixTree<K, V, KC> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ?Sized, V: Clone, KC> Clone for RadixTree<K, V, KC> {
    fn clone(&self) -> Self {
        RadixTree {
            root: self.root.clone(),
            size: self.size,
            _converter: PhantomData,
        }
    }
}

impl<K: ?Sized, V: fmt::Debug, KC> fmt::Debug for RadixTree<K, V, KC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadixTree")
            .field("len", &self.size)
            .field("root", &self.root)
            .finish()
    }
}

impl<'a, K, V, KC> Extend<(&'a K, V)> for RadixTree<K, V, KC>
where
    K: ?Sized + 'a,
    KC: KeyToBytes<K>,
{
    fn extend<I: IntoIterator<Item = (&'a K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, KC> FromIterator<(&'a K, V)> for RadixTree<K, V, KC>
where
    K: ?Sized + 'a,
    KC: KeyToBytes<K>,
{
    fn from_iter<I: IntoIterator<Item = (&'a K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
