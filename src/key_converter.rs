//! Defines traits and structs for converting tree keys into byte sequences.
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// A trait for types that can convert a key of type `K` into a byte slice.
///
/// `K` may be unsized, so a tree can be keyed directly by `str` or `[u8]`.
pub trait KeyToBytes<K: ?Sized> {
    /// Converts the given key into a `Cow<[u8]>`.
    /// `Cow` allows for borrowing if the key can provide a direct slice,
    /// or owning (e.g., via `Vec<u8>`) if a conversion is necessary.
    fn convert(key: &K) -> Cow<'_, [u8]>;
}

/// A key converter for keys that implement `AsRef<str>`.
/// Examples: `str`, `String`, `&'static str`.
pub struct StrKeyConverter<K: ?Sized>(PhantomData<fn(&K)>);

impl<K: ?Sized> StrKeyConverter<K> {
    /// Creates a new string key converter
    pub fn new() -> Self {
        StrKeyConverter(PhantomData)
    }
}

impl<K: ?Sized> Default for StrKeyConverter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ?Sized> fmt::Debug for StrKeyConverter<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StrKeyConverter")
    }
}

impl<K: ?Sized + AsRef<str>> KeyToBytes<K> for StrKeyConverter<K> {
    fn convert(key: &K) -> Cow<'_, [u8]> {
        Cow::Borrowed(key.as_ref().as_bytes())
    }
}

/// A key converter for keys that implement `AsRef<[u8]>`.
/// Examples: `[u8]`, `Vec<u8>`, `str`, `String`.
pub struct BytesKeyConverter<K: ?Sized>(PhantomData<fn(&K)>);

impl<K: ?Sized> BytesKeyConverter<K> {
    /// Creates a new bytes key converter
    pub fn new() -> Self {
        BytesKeyConverter(PhantomData)
    }
}

impl<K: ?Sized> Default for BytesKeyConverter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ?Sized> fmt::Debug for BytesKeyConverter<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BytesKeyConverter")
    }
}

impl<K: ?Sized + AsRef<[u8]>> KeyToBytes<K> for BytesKeyConverter<K> {
    fn convert(key: &K) -> Cow<'_, [u8]> {
        Cow::Borrowed(key.as_ref())
    }
}
