use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt::Debug;
use core::fmt::Display;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::iter::FusedIterator;
use core::ops::Index;

use crate::chain::Chain;
use crate::chain::ChainIter;
use crate::chain::ChainIterMut;
use crate::chain::Node;
use crate::config::DEFAULT_INITIAL_CAPACITY;
use crate::config::DEFAULT_LOAD_FACTOR;
use crate::config::TableConfig;
use crate::error::Error;
use crate::error::Result;
use crate::hasher::DefaultHashBuilder;

/// A hash table using separate chaining.
///
/// `HashTable<K, V, S>` keeps an array of buckets; each bucket owns a
/// singly-linked chain of the entries whose key hashes to it (modulo the
/// bucket count). Before every insert the table checks whether
/// `len / capacity` exceeds its load factor and, if so, doubles the bucket
/// array and relinks every entry into its new bucket.
///
/// The hasher builder `S` is fixed for the table's lifetime, so a key always
/// lands in the same bucket for a given capacity.
///
/// ## Performance Characteristics
///
/// - **Lookup / insert / remove**: expected O(1), O(chain length) worst case.
/// - **Resize**: O(len), run synchronously inside the triggering insert.
/// - **Memory**: one boxed node per entry plus one pointer per bucket. The
///   bucket array never shrinks.
///
/// ## Example
///
/// ```rust
/// use chain_hash::Error;
/// use chain_hash::HashTable;
///
/// let mut table = HashTable::new();
/// table.insert("apple".to_string(), 3);
/// table.insert("banana".to_string(), 2);
///
/// assert_eq!(table.search("apple"), Ok(&3));
/// assert!(table.contains("banana"));
///
/// assert_eq!(table.remove("apple"), Ok(3));
/// assert_eq!(table.search("apple"), Err(Error::KeyNotFound));
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone)]
pub struct HashTable<K, V, S = DefaultHashBuilder> {
    buckets: Vec<Chain<K, V>>,
    populated: usize,
    load_factor: f64,
    hash_builder: S,
}

impl<K, V, S> Debug for HashTable<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Renders the entries as `[(key, value), ...]`, walking buckets in index
/// order and each chain from its head.
impl<K, V, S> Display for HashTable<K, V, S>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({key}, {value})")?;
        }
        f.write_str("]")
    }
}

impl<K, V> HashTable<K, V, DefaultHashBuilder> {
    /// Creates an empty table with 8 buckets and a load factor of 0.7.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashTable;
    /// #
    /// let table: HashTable<String, i32> = HashTable::new();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 8);
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty table with `capacity` buckets and the default load
    /// factor.
    ///
    /// A capacity of zero is raised to one; use [`with_config`] to reject it
    /// instead.
    ///
    /// [`with_config`]: HashTable::with_config
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashTable;
    /// #
    /// let table: HashTable<u64, u64> = HashTable::with_capacity(100);
    /// assert_eq!(table.capacity(), 100);
    ///
    /// let table: HashTable<u64, u64> = HashTable::with_capacity(0);
    /// assert_eq!(table.capacity(), 1);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates an empty table from a validated [`TableConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] for zero buckets and
    /// [`Error::InvalidLoadFactor`] for a load factor outside `(0, 1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::Error;
    /// # use chain_hash::HashTable;
    /// # use chain_hash::TableConfig;
    /// #
    /// let config = TableConfig::default().with_initial_capacity(4);
    /// let table: HashTable<&str, i32> = HashTable::with_config(config)?;
    /// assert_eq!(table.capacity(), 4);
    ///
    /// let bad = TableConfig::default().with_load_factor(0.0);
    /// assert!(HashTable::<&str, i32>::with_config(bad).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_config(config: TableConfig) -> Result<Self> {
        Self::with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V> Default for HashTable<K, V, DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Creates an empty table with default sizing that hashes keys with
    /// `hash_builder`.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_INITIAL_CAPACITY, hash_builder)
    }

    /// Creates an empty table with `capacity` buckets (at least one) that
    /// hashes keys with `hash_builder`.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::from_parts(capacity.max(1), DEFAULT_LOAD_FACTOR, hash_builder)
    }

    /// Creates an empty table from a validated [`TableConfig`] that hashes
    /// keys with `hash_builder`.
    ///
    /// # Errors
    ///
    /// Same as [`HashTable::with_config`].
    pub fn with_config_and_hasher(config: TableConfig, hash_builder: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(
            config.initial_capacity,
            config.load_factor,
            hash_builder,
        ))
    }

    fn from_parts(capacity: usize, load_factor: f64, hash_builder: S) -> Self {
        debug_assert!(capacity > 0);
        log::trace!("creating table with {capacity} buckets, load factor {load_factor}");

        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Chain::new);
        Self {
            buckets,
            populated: 0,
            load_factor,
            hash_builder,
        }
    }

    /// Returns the number of entries in the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// assert_eq!(table.len(), 0);
    /// table.insert(1, "a");
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no entries.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the current number of buckets.
    ///
    /// The bucket count starts at the configured initial capacity and only
    /// ever doubles.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the resize threshold the table was built with.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns a reference to the table's hasher builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Removes every entry, keeping the current bucket count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashTable;
    /// #
    /// let mut table = HashTable::with_capacity(4);
    /// for i in 0..10 {
    ///     table.insert(i, i);
    /// }
    /// let capacity = table.capacity();
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.populated = 0;
    }

    /// Returns an iterator over `(&K, &V)` pairs.
    ///
    /// Buckets are visited in index order and each chain from its head; the
    /// resulting order depends on hashing and is not stable across resizes.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.populated,
        }
    }

    /// Returns an iterator over `(&K, &mut V)` pairs.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            chain: None,
            remaining: self.populated,
        }
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over mutable references to the values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.insert("a", 1);
    /// table.insert("b", 2);
    ///
    /// for value in table.values_mut() {
    ///     *value *= 10;
    /// }
    /// assert_eq!(table.search("b"), Ok(&20));
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    /// Returns the number of buckets holding each chain length.
    ///
    /// Index `n` of the result counts the buckets whose chain holds exactly
    /// `n` entries; the vector is as long as the longest chain plus one.
    ///
    /// Only available with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> Vec<usize> {
        let mut hist = Vec::new();
        for chain in &self.buckets {
            let len = chain.len();
            if hist.len() <= len {
                hist.resize(len + 1, 0);
            }
            hist[len] += 1;
        }
        hist
    }

    /// Returns chain-length and utilization statistics for debugging.
    ///
    /// Only available with the `stats` feature.
    #[cfg(any(test, feature = "stats"))]
    pub fn stats(&self) -> TableStats {
        let hist = self.chain_histogram();
        let empty_buckets = hist.first().copied().unwrap_or(0);
        let occupied_buckets = self.buckets.len() - empty_buckets;

        TableStats {
            len: self.populated,
            capacity: self.buckets.len(),
            occupied_buckets,
            longest_chain: hist.len().saturating_sub(1),
            load: self.populated as f64 / self.buckets.len() as f64,
            mean_chain_length: if occupied_buckets == 0 {
                0.0
            } else {
                self.populated as f64 / occupied_buckets as f64
            },
        }
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        (self.hash_builder.hash_one(key) % self.buckets.len() as u64) as usize
    }

    #[inline]
    fn exceeds_load_factor(&self) -> bool {
        self.populated as f64 / self.buckets.len() as f64 > self.load_factor
    }

    /// Inserts a key-value pair.
    ///
    /// If the table is over its load factor (measured before this insert), the
    /// bucket array is doubled first. An existing entry for `key` has its
    /// value replaced in place and the old value is returned; otherwise a new
    /// entry is placed at the head of its bucket's chain and `None` is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// assert_eq!(table.insert("banana", 2), None);
    /// assert_eq!(table.insert("banana", 4), Some(2));
    /// assert_eq!(table.search("banana"), Ok(&4));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.exceeds_load_factor() {
            self.resize_rehash();
        }

        let index = self.bucket_index(&key);
        let chain = &mut self.buckets[index];
        if let Some(existing) = chain.find_mut(&key) {
            return Some(core::mem::replace(existing, value));
        }

        chain.push_front(Node::new(key, value));
        self.populated += 1;
        None
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::Error;
    /// # use chain_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.insert("cherry".to_string(), 5);
    ///
    /// assert_eq!(table.search("cherry"), Ok(&5));
    /// assert_eq!(table.search("durian"), Err(Error::KeyNotFound));
    /// ```
    pub fn search<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn search_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a reference to the value stored for `key`, or `None`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index].find(key).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value stored for `key`, or `None`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index].find_mut(key)
    }

    /// Returns `true` if the table holds an entry for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.insert("apple", 3);
    /// assert!(table.contains("apple"));
    /// assert!(!table.contains("durian"));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// Exactly one entry is unlinked, wherever it sits in its chain, and the
    /// length drops by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent; the table is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::Error;
    /// # use chain_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.insert(42, "answer");
    ///
    /// assert_eq!(table.remove(&42), Ok("answer"));
    /// assert!(table.is_empty());
    /// assert_eq!(table.remove(&42), Err(Error::KeyNotFound));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry for `key` and returns the stored key and value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Result<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        match self.buckets[index].remove(key) {
            Some(node) => {
                self.populated -= 1;
                Ok(node.into_pair())
            }
            None => {
                log::trace!("remove missed in bucket {index}");
                Err(Error::KeyNotFound)
            }
        }
    }

    #[cold]
    #[inline(never)]
    fn resize_rehash(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity * 2;
        log::debug!(
            "resizing table from {old_capacity} to {new_capacity} buckets ({} entries)",
            self.populated
        );

        let mut buckets = Vec::with_capacity(new_capacity);
        buckets.resize_with(new_capacity, Chain::new);
        let old_buckets = core::mem::replace(&mut self.buckets, buckets);

        // Nodes are relinked, not reallocated. Keys were already distinct, so
        // no equality check is needed on the way in.
        for mut chain in old_buckets {
            while let Some(node) = chain.pop_front() {
                let index = self.bucket_index(&node.key);
                debug_assert!(self.buckets[index].find(&node.key).is_none());
                self.buckets[index].push_front(node);
            }
        }
    }
}

impl<K, V, S> PartialEq for HashTable<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}

impl<K, V, S> Eq for HashTable<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, Q, V, S> Index<&Q> for HashTable<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// Returns the value stored for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is absent. Use [`HashTable::search`] to handle that
    /// case.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in HashTable"),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::with_hasher(S::default());
        table.extend(iter);
        table
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashTable<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut HashTable<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> IntoIterator for HashTable<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            buckets: self.buckets.into_iter(),
            chain: Chain::new(),
            remaining: self.populated,
        }
    }
}

/// Chain-length and utilization statistics for a [`HashTable`].
///
/// Returned by [`HashTable::stats`]. Only available with the `stats`
/// feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    /// Number of entries.
    pub len: usize,
    /// Number of buckets.
    pub capacity: usize,
    /// Buckets whose chain is non-empty.
    pub occupied_buckets: usize,
    /// Length of the longest chain.
    pub longest_chain: usize,
    /// `len / capacity`.
    pub load: f64,
    /// Average chain length over non-empty buckets.
    pub mean_chain_length: f64,
}

/// An iterator over the entries of a [`HashTable`].
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, K, V> {
    buckets: core::slice::Iter<'a, Chain<K, V>>,
    chain: Option<ChainIter<'a, K, V>>,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            chain: self.chain.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(item);
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// A mutable iterator over the entries of a [`HashTable`].
///
/// This struct is created by the [`iter_mut`] method on [`HashTable`].
///
/// [`iter_mut`]: HashTable::iter_mut
pub struct IterMut<'a, K, V> {
    buckets: core::slice::IterMut<'a, Chain<K, V>>,
    chain: Option<ChainIterMut<'a, K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some(item);
            }
            self.chain = Some(self.buckets.next()?.iter_mut());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An owning iterator over the entries of a [`HashTable`].
pub struct IntoIter<K, V> {
    buckets: alloc::vec::IntoIter<Chain<K, V>>,
    chain: Chain<K, V>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.chain.pop_front() {
                self.remaining -= 1;
                return Some(node.into_pair());
            }
            self.chain = self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

/// An iterator over the keys of a [`HashTable`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`HashTable`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// A mutable iterator over the values of a [`HashTable`].
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}


#[cfg(all(test, feature = "std"))]
mod proptests {
    use std::collections::HashMap as StdHashMap;

    use proptest::collection;
    use proptest::prelude::*;

    use super::*;
    use crate::hasher::BuildDjb2;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8, u32),
        Remove(u8),
        Contains(u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (any::<u8>(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
            1 => any::<u8>().prop_map(Op::Remove),
            1 => any::<u8>().prop_map(Op::Contains),
        ]
    }

    proptest! {
        #[test]
        fn last_insert_wins(pairs in collection::vec((any::<u16>(), any::<i64>()), 0..400)) {
            let mut table = HashTable::new();
            let mut model = StdHashMap::new();
            for (k, v) in &pairs {
                table.insert(*k, *v);
                model.insert(*k, *v);
            }

            prop_assert_eq!(table.len(), model.len());
            for (k, v) in &model {
                prop_assert_eq!(table.search(k), Ok(v));
            }
        }

        #[test]
        fn matches_std_model(
            capacity in 1usize..16,
            load_factor in 0.1f64..=1.0,
            ops in collection::vec(op(), 0..300),
        ) {
            let config = TableConfig::default()
                .with_initial_capacity(capacity)
                .with_load_factor(load_factor);
            let mut table = HashTable::with_config_and_hasher(config, BuildDjb2::default()).unwrap();
            let mut model = StdHashMap::new();
            let mut capacity = table.capacity();

            for op in ops {
                match op {
                    Op::Insert(k, v) => {
                        prop_assert_eq!(table.insert(k, v), model.insert(k, v));
                    }
                    Op::Remove(k) => {
                        prop_assert_eq!(table.remove(&k).ok(), model.remove(&k));
                    }
                    Op::Contains(k) => {
                        let len = table.len();
                        prop_assert_eq!(table.contains(&k), model.contains_key(&k));
                        prop_assert_eq!(table.len(), len);
                    }
                }

                prop_assert!(table.capacity() >= capacity);
                capacity = table.capacity();
                prop_assert_eq!(table.len(), model.len());
                prop_assert_eq!(table.iter().count(), model.len());
            }

            for (index, chain) in table.buckets.iter().enumerate() {
                for (key, _) in chain.iter() {
                    prop_assert_eq!(table.bucket_index(key), index);
                }
            }
        }
    }
}
