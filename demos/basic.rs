//! Examples of using the radix tree
use radix_mutable::{BytesRadixTree, RadixTree, StrKeyConverter, StringRadixTree};

fn main() {
    // Create a new tree with string keys
    let mut tree = StringRadixTree::<str, i32>::new();

    // Insert some values
    tree.insert("hello", 1);
    tree.insert("help", 2);
    tree.insert("world", 3);

    // Check values
    assert_eq!(tree.get("hello"), Some(&1));
    assert_eq!(tree.get("help"), Some(&2));
    assert_eq!(tree.get("hel"), None);

    // Overwrite in place
    assert_eq!(tree.insert("hello", 10), Some(1));
    assert_eq!(tree.len(), 3);

    // Remove a key, the "hel" branch collapses back into "hello"
    assert_eq!(tree.remove("help"), Some(2));
    assert_eq!(tree.get("hello"), Some(&10));
    println!("{:#?}", tree);

    // Alternatively, use the explicit type parameters
    let mut owned = RadixTree::<String, u32, StrKeyConverter<String>>::new();
    owned.insert(&"test".to_string(), 42);
    assert_eq!(owned.get(&"test".to_string()), Some(&42));

    // Raw byte keys may contain any byte, including what looks like a terminator
    let mut bytes = BytesRadixTree::new();
    bytes.insert(b"abc", 1);
    bytes.insert(b"abc$", 2);
    bytes.insert(b"abc\0", 3);
    assert_eq!(bytes.get(b"abc"), Some(&1));
    assert_eq!(bytes.get(b"abc$"), Some(&2));
    assert_eq!(bytes.get(b"abc\0"), Some(&3));
}
