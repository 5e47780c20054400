//! Linear doubly-linked list bounded by two sentinels.
//!
//! [`DualSentinelList`] keeps its elements between a fixed `head` and a fixed
//! `tail` link:
//!
//! ```text
//!   head <-> first <-> ... <-> last <-> tail
//! ```
//!
//! `head.prev` and `tail.next` are null-like: each refers back to its own
//! sentinel and is never followed. The list is empty exactly when
//! `head.next == tail`.
//!
//! Besides the deque operations the list offers a bag interface: `add`
//! pushes to the front, `contains` and `remove` scan front to back. Looking
//! for a value that is not there is not a misuse of the list, so `remove`
//! reports it with a warning and returns `None` instead of an error.
//!
//! # Examples
//!
//! ```rust
//! use sentinel_deque::list::DualSentinelList;
//!
//! let mut bag = DualSentinelList::new();
//! for value in 1..=5 {
//!     bag.add(value);
//! }
//! assert!(bag.contains(&3));
//! assert!(!bag.contains(&57));
//!
//! assert_eq!(bag.remove(&3), Some(3));
//! assert!(!bag.contains(&3));
//! assert_eq!(bag.len(), 4);
//!
//! assert_eq!(bag.remove(&99), None);
//! assert_eq!(bag.len(), 4);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::deque::{Bag, Deque};
use crate::error::DequeError;
use crate::link::{ArenaStats, ChainIter, LinkArena, LinkIndex};

const CONTAINER: &str = "DualSentinelList";

/// A doubly-linked list with fixed head and tail sentinels.
#[derive(Clone)]
pub struct DualSentinelList<T> {
    arena: LinkArena<T>,
    head: LinkIndex,
    tail: LinkIndex,
    size: usize,
}

static_assertions::assert_impl_all!(DualSentinelList<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(DualSentinelList<std::rc::Rc<i32>>: Send, Sync);

impl<T> DualSentinelList<T> {
    /// Creates an empty list with `head.next == tail`.
    #[must_use]
    pub fn new() -> Self {
        Self::from_arena(LinkArena::new())
    }

    /// Creates an empty list with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_arena(LinkArena::with_capacity(capacity.saturating_add(2)))
    }

    fn from_arena(mut arena: LinkArena<T>) -> Self {
        let head = arena.allocate_sentinel();
        let tail = arena.allocate_sentinel();
        arena.link_mut(head).next = tail;
        arena.link_mut(tail).prev = head;
        Self {
            arena,
            head,
            tail,
            size: 0,
        }
    }

    /// Returns the number of elements between the sentinels.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if `head.next == tail`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    fn first(&self) -> LinkIndex {
        self.arena.link(self.head).next
    }

    #[inline]
    fn last(&self) -> LinkIndex {
        self.arena.link(self.tail).prev
    }

    /// Inserts `value` between `head` and the current first element.
    pub fn add_front(&mut self, value: T) {
        let first = self.first();
        self.arena.insert_between(self.head, first, value);
        self.size += 1;
    }

    /// Inserts `value` between the current last element and `tail`.
    pub fn add_back(&mut self, value: T) {
        let last = self.last();
        self.arena.insert_between(last, self.tail, value);
        self.size += 1;
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the list is empty.
    pub fn front(&self) -> Result<&T, DequeError> {
        self.value_at(self.first(), "front")
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the list is empty.
    pub fn back(&self) -> Result<&T, DequeError> {
        self.value_at(self.last(), "back")
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

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the list is empty.
    pub fn remove_front(&mut self) -> Result<T, DequeError> {
        let first = self.first();
        self.remove_link(first, "remove_front")
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the list is empty.
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

    /// Pushes `value` to the front; the bag's LIFO insertion point.
    pub fn add(&mut self, value: T) {
        self.add_front(value);
    }

    /// Returns `true` if some element equals `value`. O(n).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(value).is_some()
    }

    /// Removes the first element equal to `value`, scanning front to back.
    ///
    /// When nothing matches, a warning is emitted, the list is left as it is
    /// and `None` is returned.
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let Some(index) = self.position(value) else {
            tracing::warn!(
                container = CONTAINER,
                size = self.size,
                "value not found in list, nothing removed"
            );
            return None;
        };
        let removed = self.arena.unlink(index)?;
        self.size -= 1;
        Some(removed)
    }

    fn position(&self, value: &T) -> Option<LinkIndex>
    where
        T: PartialEq,
    {
        let mut current = self.first();
        while current != self.tail {
            let link = self.arena.link(current);
            if link.value.as_ref() == Some(value) {
                return Some(current);
            }
            current = link.next;
        }
        None
    }

    /// Returns a front-to-back iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> ChainIter<'_, T> {
        ChainIter::new(&self.arena, self.first(), self.last(), self.size)
    }

    /// Renders the size and contents of the list and emits them as a debug
    /// event.
    pub fn print(&self) -> String
    where
        T: fmt::Display,
    {
        let listing = self.to_string();
        tracing::debug!(container = CONTAINER, size = self.size, "{listing}");
        listing
    }

    /// Removes every element, keeping both sentinels.
    pub fn clear(&mut self) {
        let first = self.first();
        let released = self.arena.release_chain(first, self.tail);
        debug_assert_eq!(released, self.size);

        self.arena.link_mut(self.head).next = self.tail;
        self.arena.link_mut(self.tail).prev = self.head;
        self.size = 0;
    }

    /// Returns the allocation counters of the underlying arena.
    #[must_use]
    pub const fn allocation_stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    /// Tears the list down: every element link, then `head` and `tail`.
    pub fn destroy(mut self) -> ArenaStats {
        let elements = self.size;
        self.clear();
        self.arena.release(self.head);
        self.arena.release(self.tail);

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

impl<T> Default for DualSentinelList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> for DualSentinelList<T> {
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

impl<T: PartialEq> Bag<T> for DualSentinelList<T> {
    fn add(&mut self, value: T) {
        self.add(value);
    }

    fn contains(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        self.remove(value)
    }
}

impl<T: PartialEq> PartialEq for DualSentinelList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DualSentinelList<T> {}

impl<T: Hash> Hash for DualSentinelList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DualSentinelList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DualSentinelList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().write_listing(formatter)
    }
}

impl<T> FromIterator<T> for DualSentinelList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DualSentinelList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_back(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a DualSentinelList<T> {
    type Item = &'a T;
    type IntoIter = ChainIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DualSentinelList<T> {
    type Item = T;
    type IntoIter = DualSentinelListIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        DualSentinelListIntoIterator { list: self }
    }
}

/// Owning iterator that drains a [`DualSentinelList`] front to back.
pub struct DualSentinelListIntoIterator<T> {
    list: DualSentinelList<T>,
}

impl<T> Iterator for DualSentinelListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for DualSentinelListIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_back().ok()
    }
}

impl<T> ExactSizeIterator for DualSentinelListIntoIterator<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn bag() -> DualSentinelList<i32> {
        let mut list = DualSentinelList::new();
        for value in 1..=5 {
            list.add(value);
        }
        list
    }

    fn collect(list: &DualSentinelList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    /// Walks forward from `head` and backward from `tail` and checks both
    /// walks agree with `size`.
    fn assert_bounded(list: &DualSentinelList<i32>) {
        assert_eq!(list.arena.link(list.head).prev, list.head);
        assert_eq!(list.arena.link(list.tail).next, list.tail);

        let mut forward = Vec::new();
        let mut current = list.first();
        while current != list.tail {
            forward.push(current);
            current = list.arena.link(current).next;
        }
        let mut backward = Vec::new();
        let mut current = list.last();
        while current != list.head {
            backward.push(current);
            current = list.arena.link(current).prev;
        }
        backward.reverse();

        assert_eq!(forward.len(), list.len());
        assert_eq!(forward, backward);
    }

    mod deque_interface {
        use super::*;

        #[rstest]
        fn test_new_list_links_head_to_tail() {
            let list: DualSentinelList<i32> = DualSentinelList::new();
            assert!(list.is_empty());
            assert_eq!(list.first(), list.tail);
            assert_eq!(list.last(), list.head);
            assert_bounded(&list);
        }

        #[rstest]
        fn test_add_front_and_add_back() {
            let mut list = DualSentinelList::new();
            list.add_back(2);
            list.add_front(1);
            list.add_back(3);
            assert_eq!(collect(&list), vec![1, 2, 3]);
            assert_eq!(list.front(), Ok(&1));
            assert_eq!(list.back(), Ok(&3));
            assert_bounded(&list);
        }

        #[rstest]
        fn test_remove_both_ends() {
            let mut list: DualSentinelList<i32> = (1..=4).collect();
            assert_eq!(list.remove_front(), Ok(1));
            assert_eq!(list.remove_back(), Ok(4));
            assert_eq!(collect(&list), vec![2, 3]);
            assert_bounded(&list);
        }

        #[rstest]
        fn test_empty_access_fails() {
            let mut list: DualSentinelList<i32> = DualSentinelList::new();
            assert_eq!(list.front(), Err(DequeError::empty(CONTAINER, "front")));
            assert_eq!(list.back(), Err(DequeError::empty(CONTAINER, "back")));
            assert_eq!(
                list.remove_front(),
                Err(DequeError::empty(CONTAINER, "remove_front"))
            );
            assert_eq!(
                list.remove_back(),
                Err(DequeError::empty(CONTAINER, "remove_back"))
            );
            assert_bounded(&list);
        }

        #[rstest]
        fn test_drain_returns_to_empty_state() {
            let mut list: DualSentinelList<i32> = (0..3).collect();
            while list.remove_back().is_ok() {}
            assert!(list.is_empty());
            assert_eq!(list.first(), list.tail);
            assert_bounded(&list);
        }
    }

    mod bag_interface {
        use super::*;

        #[rstest]
        fn test_add_is_lifo(bag: DualSentinelList<i32>) {
            assert_eq!(collect(&bag), vec![5, 4, 3, 2, 1]);
            assert_eq!(bag.front(), Ok(&5));
        }

        #[rstest]
        #[case(1, true)]
        #[case(3, true)]
        #[case(5, true)]
        #[case(57, false)]
        #[case(0, false)]
        fn test_contains(bag: DualSentinelList<i32>, #[case] value: i32, #[case] expected: bool) {
            assert_eq!(bag.contains(&value), expected);
        }

        #[rstest]
        fn test_contains_on_empty() {
            let list: DualSentinelList<i32> = DualSentinelList::new();
            assert!(!list.contains(&1));
        }

        #[rstest]
        fn test_remove_present_value(mut bag: DualSentinelList<i32>) {
            assert_eq!(bag.remove(&3), Some(3));
            assert!(!bag.contains(&3));
            assert_eq!(bag.len(), 4);
            assert_eq!(collect(&bag), vec![5, 4, 2, 1]);
            assert_bounded(&bag);
        }

        #[rstest]
        fn test_remove_takes_first_match() {
            let mut list: DualSentinelList<i32> = [1, 2, 1].into_iter().collect();
            let second_one = list.last();
            assert_eq!(list.remove(&1), Some(1));
            assert_eq!(collect(&list), vec![2, 1]);
            assert_eq!(list.last(), second_one);
        }

        #[rstest]
        fn test_remove_absent_value_is_noop(mut bag: DualSentinelList<i32>) {
            let before = bag.allocation_stats();
            assert_eq!(bag.remove(&99), None);
            assert_eq!(bag.len(), 5);
            assert_eq!(bag.allocation_stats(), before);
        }

        #[rstest]
        fn test_remove_on_empty_is_noop() {
            let mut list: DualSentinelList<i32> = DualSentinelList::new();
            assert_eq!(list.remove(&1), None);
            assert!(list.is_empty());
        }

        #[rstest]
        fn test_remove_boundary_elements(mut bag: DualSentinelList<i32>) {
            assert_eq!(bag.remove(&5), Some(5));
            assert_eq!(bag.remove(&1), Some(1));
            assert_eq!(bag.front(), Ok(&4));
            assert_eq!(bag.back(), Ok(&2));
            assert_bounded(&bag);
        }
    }

    mod teardown {
        use super::*;

        #[rstest]
        fn test_destroy_releases_both_sentinels(bag: DualSentinelList<i32>) {
            let stats = bag.destroy();
            assert_eq!(stats.allocations, 7);
            assert_eq!(stats.releases, 7);
        }

        #[rstest]
        fn test_clear_keeps_sentinels(mut bag: DualSentinelList<i32>) {
            bag.clear();
            assert!(bag.is_empty());
            assert_eq!(bag.allocation_stats().outstanding(), 2);
            assert_bounded(&bag);
        }

        #[rstest]
        fn test_print_listing(bag: DualSentinelList<i32>) {
            assert_eq!(
                bag.print(),
                "List size: 5\nList contents:\nList[0]: 5\nList[1]: 4\nList[2]: 3\nList[3]: 2\nList[4]: 1\n"
            );
        }
    }
}
