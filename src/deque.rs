//! Interfaces shared by the containers.
//!
//! [`Deque`] is implemented by both `SentinelRingDeque` and
//! `DualSentinelList`; [`Bag`] only by `DualSentinelList`. The inherent
//! methods of each container carry the same names, so importing the traits is
//! only needed for generic code.

use crate::error::DequeError;

/// Insertion, inspection and removal at both ends.
///
/// # Laws
///
/// For any deque `d` and value `v`:
///
/// - after `d.add_front(v)`, `d.front() == Ok(&v)`;
/// - after `d.add_back(v)`, `d.back() == Ok(&v)`;
/// - `d.len()` grows by one per add and shrinks by one per successful remove;
/// - `front`, `back`, `remove_front` and `remove_back` fail with
///   `EmptyCollection` exactly when `d.is_empty()`.
///
/// # Examples
///
/// ```rust
/// use sentinel_deque::Deque;
/// use sentinel_deque::list::DualSentinelList;
/// use sentinel_deque::ring::SentinelRingDeque;
///
/// fn drain_back<D: Deque<i32>>(mut deque: D) -> Vec<i32> {
///     let mut drained = Vec::new();
///     while let Ok(value) = deque.remove_back() {
///         drained.push(value);
///     }
///     drained
/// }
///
/// let ring: SentinelRingDeque<i32> = (1..=3).collect();
/// let list: DualSentinelList<i32> = (1..=3).collect();
/// assert_eq!(drain_back(ring), vec![3, 2, 1]);
/// assert_eq!(drain_back(list), vec![3, 2, 1]);
/// ```
pub trait Deque<T> {
    /// Inserts `value` before the current front.
    fn add_front(&mut self, value: T);

    /// Inserts `value` after the current back.
    fn add_back(&mut self, value: T);

    /// Returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the deque is empty.
    fn front(&self) -> Result<&T, DequeError>;

    /// Returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the deque is empty.
    fn back(&self) -> Result<&T, DequeError>;

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the deque is empty.
    fn remove_front(&mut self) -> Result<T, DequeError>;

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyCollection`] if the deque is empty.
    fn remove_back(&mut self) -> Result<T, DequeError>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unordered-container operations layered on a linked chain.
///
/// `add` is a LIFO insertion: the most recently added value is found first by
/// the front-to-back scans of `contains` and `remove`.
pub trait Bag<T: PartialEq> {
    /// Adds `value` to the bag.
    fn add(&mut self, value: T);

    /// Returns `true` if some element equals `value`.
    fn contains(&self, value: &T) -> bool;

    /// Removes the first element equal to `value`, scanning front to back.
    ///
    /// Returns `None` and leaves the bag untouched when no element matches.
    fn remove(&mut self, value: &T) -> Option<T>;
}
