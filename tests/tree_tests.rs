use once_cell::sync::Lazy;
use radix_mutable::{BytesRadixTree, StringRadixTree};

static WORDS: Lazy<Vec<String>> = Lazy::new(|| {
    let stems = ["rom", "roman", "romane", "romanus", "romulus", "rubens", "ruber", "rubicon", "rubicundus"];
    let mut words: Vec<String> = stems.iter().map(|s| s.to_string()).collect();
    words.extend((0..200).map(|i| format!("user/{:03}/profile", i)));
    words.extend((0..50).map(|i| format!("user/{:03}", i)));
    words.push(String::new());
    words
});

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_empty_tree_contract() {
    init();
    let mut tree = StringRadixTree::<str, i32>::new();

    assert_eq!(tree.get(""), None);
    assert_eq!(tree.get("anything"), None);
    assert_eq!(tree.remove("anything"), None);
    assert_eq!(tree.remove(""), None);
    assert!(tree.is_empty());
    assert!(tree.validate().is_ok());
}

#[test]
fn test_split_scenario() {
    init();
    let mut tree = StringRadixTree::<str, i32>::new();
    tree.insert("test", 1);
    tree.insert("team", 2);

    assert_eq!(tree.get("test"), Some(&1));
    assert_eq!(tree.get("team"), Some(&2));
    assert_eq!(tree.get("te"), None);
    assert_eq!(tree.get("t"), None);
    assert!(tree.validate().is_ok());
}

#[test]
fn test_prefix_disambiguation() {
    init();
    let mut tree = StringRadixTree::<str, i32>::new();
    tree.insert("abc", 1);
    tree.insert("abcd", 2);

    assert_eq!(tree.get("abc"), Some(&1));
    assert_eq!(tree.get("abcd"), Some(&2));
    assert_eq!(tree.get("ab"), None);
    assert_eq!(tree.get("abcde"), None);
}

#[test]
fn test_update_semantics() {
    init();
    let mut tree = StringRadixTree::<str, &str>::new();
    tree.insert("key", "v1");
    tree.insert("key", "v2");

    assert_eq!(tree.get("key"), Some(&"v2"));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_delete_removes_exactly_one_key() {
    init();
    let mut tree = StringRadixTree::<str, i32>::new();
    tree.insert("alpha", 1);
    tree.insert("alphabet", 2);

    tree.remove("alpha");

    assert_eq!(tree.get("alpha"), None);
    assert_eq!(tree.get("alphabet"), Some(&2));
    assert_eq!(tree.len(), 1);
    assert!(tree.validate().is_ok());
}

#[test]
fn test_found_is_explicit_for_default_values() {
    init();
    let mut tree = StringRadixTree::<str, Option<u8>>::new();
    tree.insert("none", None);
    tree.insert("zero", Some(0));

    assert_eq!(tree.get("none"), Some(&None));
    assert_eq!(tree.get("zero"), Some(&Some(0)));
    assert_eq!(tree.get("missing"), None);
}

#[test]
fn test_word_corpus_round_trip() {
    init();
    let mut tree = StringRadixTree::<str, usize>::new();
    for (i, word) in WORDS.iter().enumerate() {
        tree.insert(word.as_str(), i);
    }

    assert_eq!(tree.len(), WORDS.len());
    assert!(tree.validate().is_ok());
    for (i, word) in WORDS.iter().enumerate() {
        assert_eq!(tree.get(word.as_str()), Some(&i), "lookup of {:?}", word);
    }
}

#[test]
fn test_word_corpus_drain() {
    init();
    let mut tree: StringRadixTree<str, usize> =
        WORDS.iter().enumerate().map(|(i, w)| (w.as_str(), i)).collect();

    // Remove every other word, then the rest, checking the shape each time
    for (i, word) in WORDS.iter().enumerate().step_by(2) {
        assert_eq!(tree.remove(word.as_str()), Some(i));
        assert!(tree.validate().is_ok(), "after removing {:?}", word);
    }
    for (i, word) in WORDS.iter().enumerate() {
        let expected = if i % 2 == 0 { None } else { Some(&i) };
        assert_eq!(tree.get(word.as_str()), expected);
    }
    for word in WORDS.iter().skip(1).step_by(2) {
        assert!(tree.remove(word.as_str()).is_some());
        assert!(tree.validate().is_ok(), "after removing {:?}", word);
    }

    assert!(tree.is_empty());
}

#[test]
fn test_byte_keys_with_zero_and_high_bytes() {
    init();
    let keys: [&[u8]; 6] = [b"", b"\0", b"\0\0", b"\xff", b"\xff\0", b"$"];
    let mut tree = BytesRadixTree::new();
    for (i, key) in keys.iter().enumerate() {
        tree.insert(key, i);
    }

    assert!(tree.validate().is_ok());
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(tree.get(key), Some(&i));
    }

    tree.remove(b"\0");
    assert_eq!(tree.get(b"\0"), None);
    assert_eq!(tree.get(b"\0\0"), Some(&2));
    assert!(tree.validate().is_ok());
}

#[test]
fn test_deep_chain_validate_and_drain() {
    init();
    // "", "a", "aa", ... nests one branch per key
    let depth = 3000;
    let mut tree = BytesRadixTree::new();
    for i in 0..depth {
        tree.insert(&vec![b'a'; i], i);
    }

    assert_eq!(tree.len(), depth);
    assert!(tree.validate().is_ok());
    assert_eq!(tree.get(&vec![b'a'; depth - 1]), Some(&(depth - 1)));
    assert_eq!(tree.get(&vec![b'a'; depth]), None);

    if let Some(value) = tree.get_mut(&vec![b'a'; depth / 2]) {
        *value = 0;
    }
    assert_eq!(tree.get(&vec![b'a'; depth / 2]), Some(&0));

    for i in (0..depth).step_by(2) {
        assert!(tree.remove(&vec![b'a'; i]).is_some());
    }
    assert!(tree.validate().is_ok());

    for i in (1..depth).step_by(2).rev() {
        assert!(tree.remove(&vec![b'a'; i]).is_some());
    }
    assert!(tree.is_empty());
    assert!(tree.validate().is_ok());
}
