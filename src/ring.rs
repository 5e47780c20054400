//! Circular doubly-linked deque with a single sentinel.
//!
//! This module provides [`SentinelRingDeque`], a deque whose links form a
//! ring closed by one sentinel link.
//!
//! # Overview
//!
//! ```text
//!        +--------------------------------------------+
//!        v                                            |
//!   sentinel <-> front <-> ... <-> back <-> (sentinel)
//! ```
//!
//! - front is `sentinel.next`, back is `sentinel.prev`
//! - the empty deque is the sentinel linked to itself
//! - O(1) `add_front`, `add_back`, `front`, `back`, `remove_front`, `remove_back`
//! - O(n) in-place `reverse`, without reallocating any link
//!
//! Because every real link has a real or sentinel neighbour on both sides,
//! no operation has to special-case the empty or single-element ring.
//!
//! # Examples
//!
//! ```rust
//! use sentinel_deque::ring::SentinelRingDeque;
//!
//! let mut deque = SentinelRingDeque::new();
//! deque.add_front(1);
//! deque.add_front(2);
//! deque.add_back(0);
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![2, 1, 0]);
//!
//! deque.reverse();
//! assert_eq!(deque.front(), Ok(&0));
//! assert_eq!(deque.back(), Ok(&2));
//!
//! assert_eq!(deque.remove_back(), Ok(2));
//! assert_eq!(deque.len(), 2);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::deque::Deque;
use crate::error::DequeError;
use crate::link::{ArenaStats, ChainIter, LinkArena, LinkIndex};

const CONTAINER: &str = "SentinelRingDeque";

/// A circular doubly-linked deque bounded by one sentinel.
///
/// # Examples
///
/// ```rust
/// use sentinel_deque::ring::SentinelRingDeque;
///
/// let mut deque = SentinelRingDeque::new();
/// for value in 0..1000 {
///     deque.add_front(value);
/// }
/// assert_eq!(deque.front(), Ok(&999));
/// assert_eq!(deque.back(), Ok(&0));
///
/// for _ in 0..500 {
///     deque.remove_back().unwrap();
/// }
/// assert_eq!(deque.back(), Ok(&500));
/// assert_eq!(deque.len(), 500);
/// ```
#[derive(Clone)]
pub struct SentinelRingDeque<T> {
    arena: LinkArena<T>,
    sentinel: LinkIndex,
    size: usize,
}

static_assertions::assert_impl_all!(SentinelRingDeque<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(SentinelRingDeque<std::rc::Rc<i32>>: Send, Sync);

impl<T> SentinelRingDeque<T> {
    /// Creates an empty deque whose sentinel is linked to itself.
    #[must_use]
    pub fn new() -> Self {
        Self::from_arena(LinkArena::new())
    }

    /// Creates an empty deque with room for `capacity` elements before the
    /// arena grows.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_arena(LinkArena::with_capacity(capacity.saturating_add(1)))
    }

    fn from_arena(mut arena: LinkArena<T>) -> Self {
        let sentinel = arena.allocate_sentinel();
        Self {
            arena,
            sentinel,
            size: 0,
        }
    }

    /// Returns the number of elements. The sentinel is never counted.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    fn first(&self) -> LinkIndex {
        self.arena.link(self.sentinel).next
    }

    #[inline]
    fn last(&self) -> LinkIndex {
        self.arena.link(self.sentinel).prev
    }

    /// Inserts `value` between the sentinel and the current front.
    pub fn add_front(&mut self, value: T) {
        let first = self.first();
        self.arena.insert_between(self.sentinel, first, value);
        self.size += 1;
    }

    /// Inserts `value` between the current back and the sentinel.
    pub fn add_back(&mut self, value: T) {
        let last = self.last();
        self.arena.insert_between(last, self.sentinel, value);
        self.size += 1;
    }

    /// Returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the deque is empty.
    pub fn front(&self) -> Result<&T, DequeError> {
        self.value_at(self.first(), "front")
    }

    /// Returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the deque is empty.
    pub fn back(&self) -> Result<&T, DequeError> {
        self.value_at(self.last(), "back")
    }

    /// Returns the front element mutably.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the deque is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, DequeError> {
        let first = self.first();
        self.value_at_mut(first, "front_mut")
    }

    /// Returns the back element mutably.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the deque is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, DequeError> {
        let last = self.last();
        self.value_at_mut(last, "back_mut")
    }

    fn value_at(&self, index: LinkIndex, operation: &'static str) -> Result<&T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::empty(CONTAINER, operation));
        }
        self.arena
            .link(index)
            .value
            .as_ref()
            .ok_or(DequeError::invalid_link(CONTAINER, operation, index.get()))
    }

    fn value_at_mut(
        &mut self,
        index: LinkIndex,
        operation: &'static str,
    ) -> Result<&mut T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::empty(CONTAINER, operation));
        }
        self.arena
            .link_mut(index)
            .value
            .as_mut()
            .ok_or(DequeError::invalid_link(CONTAINER, operation, index.get()))
    }

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the deque is empty; the deque
    /// is left unchanged.
    pub fn remove_front(&mut self) -> Result<T, DequeError> {
        let first = self.first();
        self.remove_link(first, "remove_front")
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the deque is empty; the deque
    /// is left unchanged.
    pub fn remove_back(&mut self) -> Result<T, DequeError> {
        let last = self.last();
        self.remove_link(last, "remove_back")
    }

    fn remove_link(&mut self, index: LinkIndex, operation: &'static str) -> Result<T, DequeError> {
        if self.is_empty() {
            return Err(DequeError::empty(CONTAINER, operation));
        }
        let value = self
            .arena
            .unlink(index)
            .ok_or(DequeError::invalid_link(CONTAINER, operation, index.get()))?;
        self.size -= 1;
        Ok(value)
    }

    /// Reverses the deque in place.
    ///
    /// Swaps `next` and `prev` of every link, starting with the sentinel and
    /// following the old `next` direction until the walk is back at the
    /// sentinel. The former front becomes the back and vice versa. An empty or
    /// single-element deque goes through the same loop and ends up unchanged.
    ///
    /// # Complexity
    ///
    /// O(n), no allocation.
    pub fn reverse(&mut self) {
        let mut current = self.sentinel;
        loop {
            current = self.arena.swap_direction(current);
            if current == self.sentinel {
                break;
            }
        }
    }

    /// Returns a front-to-back iterator over the elements.
    ///
    /// Every call starts a new traversal.
    #[must_use]
    pub fn iter(&self) -> ChainIter<'_, T> {
        ChainIter::new(&self.arena, self.first(), self.last(), self.size)
    }

    /// Renders the size and contents of the deque, front to back, and emits
    /// the listing as a debug event.
    ///
    /// ```rust
    /// use sentinel_deque::ring::SentinelRingDeque;
    ///
    /// let deque: SentinelRingDeque<i32> = [7, 8].into_iter().collect();
    /// assert_eq!(
    ///     deque.print(),
    ///     "List size: 2\nList contents:\nList[0]: 7\nList[1]: 8\n"
    /// );
    /// ```
    pub fn print(&self) -> String
    where
        T: fmt::Display,
    {
        let listing = self.to_string();
        tracing::debug!(container = CONTAINER, size = self.size, "{listing}");
        listing
    }

    /// Removes every element, keeping the sentinel.
    pub fn clear(&mut self) {
        let first = self.first();
        let released = self.arena.release_chain(first, self.sentinel);
        debug_assert_eq!(released, self.size);

        let sentinel = self.arena.link_mut(self.sentinel);
        sentinel.next = self.sentinel;
        sentinel.prev = self.sentinel;
        self.size = 0;
    }

    /// Returns the allocation counters of the underlying arena.
    #[must_use]
    pub const fn allocation_stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    /// Tears the deque down: releases every element link, then the sentinel.
    ///
    /// Returns the final allocation counters, which report no outstanding
    /// links.
    pub fn destroy(mut self) -> ArenaStats {
        let elements = self.size;
        self.clear();
        self.arena.release(self.sentinel);

        let stats = self.arena.stats();
        tracing::trace!(
            container = CONTAINER,
            elements,
            allocations = stats.allocations,
            releases = stats.releases,
            "destroyed"
        );
        stats
    }
}

impl<T> Default for SentinelRingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> for SentinelRingDeque<T> {
    fn add_front(&mut self, value: T) {
        self.add_front(value);
    }

    fn add_back(&mut self, value: T) {
        self.add_back(value);
    }

    fn front(&self) -> Result<&T, DequeError> {
        self.front()
    }

    fn back(&self) -> Result<&T, DequeError> {
        self.back()
    }

    fn remove_front(&mut self) -> Result<T, DequeError> {
        self.remove_front()
    }

    fn remove_back(&mut self) -> Result<T, DequeError> {
        self.remove_back()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq> PartialEq for SentinelRingDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SentinelRingDeque<T> {}

impl<T: Hash> Hash for SentinelRingDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SentinelRingDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SentinelRingDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().write_listing(formatter)
    }
}

impl<T> FromIterator<T> for SentinelRingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for SentinelRingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_back(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a SentinelRingDeque<T> {
    type Item = &'a T;
    type IntoIter = ChainIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for SentinelRingDeque<T> {
    type Item = T;
    type IntoIter = SentinelRingDequeIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SentinelRingDequeIntoIterator { deque: self }
    }
}

/// Owning iterator that drains a [`SentinelRingDeque`] front to back.
pub struct SentinelRingDequeIntoIterator<T> {
    deque: SentinelRingDeque<T>,
}

impl<T> Iterator for SentinelRingDequeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.remove_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for SentinelRingDequeIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.remove_back().ok()
    }
}

impl<T> ExactSizeIterator for SentinelRingDequeIntoIterator<T> {}
