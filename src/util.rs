/// Finds the length of the common prefix between a key and a node's edge label.
///
/// Returns the number of bytes that match starting from the given offset.
pub fn prefix_match(key: &[u8], start_idx: usize, label: &[u8]) -> usize {
    let key = key.get(start_idx..).unwrap_or(&[]);

    key.iter()
        .zip(label)
        .take_while(|(a, b)| a == b)
        .count()
}
