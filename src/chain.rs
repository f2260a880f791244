use alloc::boxed::Box;
use core::borrow::Borrow;

type Link<K, V> = Option<Box<Node<K, V>>>;

/// One key-value pair plus the owned link to the next node of its chain.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    next: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            next: None,
        })
    }

    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// A singly-linked list of nodes hanging off one bucket.
///
/// New nodes go to the head. A node is owned by exactly one chain; moving it
/// between chains (as resizing does) relinks the box without reallocating.
pub(crate) struct Chain<K, V> {
    head: Link<K, V>,
}

impl<K, V> Chain<K, V> {
    pub(crate) const fn new() -> Self {
        Self { head: None }
    }

    /// Walks the chain. O(n).
    #[cfg(any(test, feature = "stats"))]
    pub(crate) fn len(&self) -> usize {
        self.iter().count()
    }

    pub(crate) fn push_front(&mut self, mut node: Box<Node<K, V>>) {
        node.next = self.head.take();
        self.head = Some(node);
    }

    pub(crate) fn pop_front(&mut self) -> Option<Box<Node<K, V>>> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            node
        })
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if node.key.borrow() == key {
                return Some(node);
            }
            current = node.next.as_deref();
        }
        None
    }

    pub(crate) fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if node.key.borrow() == key {
                return Some(&mut node.value);
            }
            current = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the first node whose key matches, splicing its successor into
    /// the predecessor's link (or the head).
    ///
    /// Stops at the first match; returns `None` without touching the chain
    /// when nothing matches.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<Box<Node<K, V>>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|node| node.key.borrow() != key)
        {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        Some(removed)
    }

    pub(crate) fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    pub(crate) fn iter(&self) -> ChainIter<'_, K, V> {
        ChainIter {
            next: self.head.as_deref(),
        }
    }

    pub(crate) fn iter_mut(&mut self) -> ChainIterMut<'_, K, V> {
        ChainIterMut {
            next: self.head.as_deref_mut(),
        }
    }
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink node by node so long chains don't recurse through `Box` drops.
impl<K, V> Drop for Chain<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Clone for Chain<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        let mut cloned = Self::new();
        let mut tail = &mut cloned.head;
        for (key, value) in self.iter() {
            let node = tail.insert(Node::new(key.clone(), value.clone()));
            tail = &mut node.next;
        }
        cloned
    }
}

pub(crate) struct ChainIter<'a, K, V> {
    next: Option<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for ChainIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            (&node.key, &node.value)
        })
    }
}

impl<K, V> Clone for ChainIter<'_, K, V> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

pub(crate) struct ChainIterMut<'a, K, V> {
    next: Option<&'a mut Node<K, V>>,
}

impl<'a, K, V> Iterator for ChainIterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            (&node.key, &mut node.value)
        })
    }
}
