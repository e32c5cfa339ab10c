//! # Radix Tree
//!
//! A mutable radix tree (compressed prefix tree) keyed by byte or string sequences.
//!
//! This crate provides a radix tree (also known as a patricia trie) that stores each
//! key along labelled edges. Chains of single-child nodes are merged, so memory and
//! comparison work grow with the total amount of distinct key material rather than
//! with the number of keys times their length.
//!
//! ## Features
//!
//! - **In-place updates**: insert, lookup and removal work on a single owned tree
//! - **Edge compression**: partial matches split edges, removals collapse them again
//! - **Any byte is a key byte**: keys are terminated by an out-of-band marker, so
//!   `"abc"` and `"abcd"` always end at different leaves
//! - **Pluggable keys**: the `KeyToBytes` converter decides how a key becomes bytes
//!
//! ## Example
//!
//! ```rust
//! use radix_mutable::StringRadixTree;
//!
//! // Create a new tree
//! let mut tree = StringRadixTree::<str, u32>::new();
//!
//! // Insert some values
//! tree.insert("test", 1);
//! tree.insert("team", 2);
//!
//! // Lookup values
//! assert_eq!(tree.get("test"), Some(&1));
//! assert_eq!(tree.get("te"), None);
//!
//! // Remove them again
//! assert_eq!(tree.remove("team"), Some(2));
//! assert_eq!(tree.len(), 1);
//! ```

mod key_converter;
mod node;
mod tree;
mod util;

// Re-export public types
pub use crate::key_converter::{BytesKeyConverter, KeyToBytes, StrKeyConverter};
pub use crate::tree::{BytesRadixTree, RadixTree, StringRadixTree};

/// A broken structural invariant, reported by [`RadixTree::validate`].
///
/// `prefix` holds the key bytes from the root down to the offending node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    /// Two siblings start with the same unit
    #[error("two children below {prefix:?} share a leading unit")]
    DuplicateLeadingUnit { prefix: Vec<u8> },

    /// A branch below the root has an empty edge label
    #[error("branch at {prefix:?} has an empty edge label")]
    EmptyBranchLabel { prefix: Vec<u8> },

    /// A branch below the root has fewer than two children
    #[error("branch at {prefix:?} has {children} child(ren), expected at least 2")]
    UnderfullBranch { prefix: Vec<u8>, children: usize },

    /// The recorded length does not match the number of leaves
    #[error("tree records {recorded} key(s) but holds {counted} leaves")]
    LenMismatch { recorded: usize, counted: usize },
}
