//! Slot storage for links.
//!
//! Every link of a container, sentinels included, lives in one slot of a
//! [`LinkArena`]. Released slots are threaded onto a free list and handed out
//! again by the next allocation, so an empty → fill → drain cycle does not grow
//! the arena past its high-water mark.

use std::fmt;

/// Stable handle of an arena slot.
///
/// A handle stays valid until its link is released. After that the slot may be
/// reused by another link, so a released handle must not be kept around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct LinkIndex(usize);

impl LinkIndex {
    /// Returns the raw slot position.
    #[inline]
    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for LinkIndex {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// One doubly-linked node.
///
/// `value` is `None` exactly for sentinels.
#[derive(Debug, Clone)]
pub(crate) struct Link<T> {
    pub(crate) value: Option<T>,
    pub(crate) next: LinkIndex,
    pub(crate) prev: LinkIndex,
}

impl<T> Link<T> {
    #[inline]
    pub(crate) const fn is_sentinel(&self) -> bool {
        self.value.is_none()
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Link<T>),
    Vacant { next_free: Option<LinkIndex> },
}

/// Allocation counters of a [`LinkArena`].
///
/// Every allocated link is counted once in `allocations` and, once it is
/// released, once in `releases`. A container that has been torn down reports
/// zero [`outstanding`](Self::outstanding) links.
///
/// # Examples
///
/// ```rust
/// use sentinel_deque::ring::SentinelRingDeque;
///
/// let mut deque = SentinelRingDeque::new();
/// deque.add_back(1);
/// deque.add_back(2);
/// // two elements plus the sentinel
/// assert_eq!(deque.allocation_stats().outstanding(), 3);
///
/// let stats = deque.destroy();
/// assert_eq!(stats.allocations, 3);
/// assert_eq!(stats.outstanding(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ArenaStats {
    /// Number of links ever allocated.
    pub allocations: usize,
    /// Number of links released.
    pub releases: usize,
}

impl ArenaStats {
    /// Returns the number of links allocated and not yet released.
    #[inline]
    #[must_use]
    pub const fn outstanding(&self) -> usize {
        self.allocations.saturating_sub(self.releases)
    }
}

/// Slot storage for the links of one container.
#[derive(Debug, Clone)]
pub(crate) struct LinkArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<LinkIndex>,
    stats: ArenaStats,
}

impl<T> LinkArena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            stats: ArenaStats {
                allocations: 0,
                releases: 0,
            },
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    #[inline]
    pub(crate) const fn stats(&self) -> ArenaStats {
        self.stats
    }

    /// Stores `link` in a free slot, reusing released slots first.
    pub(crate) fn allocate(&mut self, link: Link<T>) -> LinkIndex {
        self.stats.allocations += 1;
        match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index.0];
                let Slot::Vacant { next_free } = slot else {
                    unreachable!("free list points at occupied slot {index}")
                };
                self.free_head = *next_free;
                *slot = Slot::Occupied(link);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(link));
                LinkIndex(self.slots.len() - 1)
            }
        }
    }

    /// Allocates a sentinel whose `next` and `prev` both refer to itself.
    pub(crate) fn allocate_sentinel(&mut self) -> LinkIndex {
        let placeholder = LinkIndex(usize::MAX);
        let index = self.allocate(Link {
            value: None,
            next: placeholder,
            prev: placeholder,
        });
        let sentinel = self.link_mut(index);
        sentinel.next = index;
        sentinel.prev = index;
        index
    }

    /// Releases the slot at `index`, returning its link.
    ///
    /// Returns `None` if the slot is already vacant or out of range; nothing is
    /// counted in that case.
    pub(crate) fn release(&mut self, index: LinkIndex) -> Option<Link<T>> {
        let slot = self.slots.get_mut(index.0)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }
        let Slot::Occupied(link) = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        ) else {
            unreachable!("slot {index} was checked to be occupied")
        };
        self.free_head = Some(index);
        self.stats.releases += 1;
        Some(link)
    }

    /// Checked access to a live link.
    #[inline]
    pub(crate) fn get(&self, index: LinkIndex) -> Option<&Link<T>> {
        match self.slots.get(index.0)? {
            Slot::Occupied(link) => Some(link),
            Slot::Vacant { .. } => None,
        }
    }

    /// Access to a link that the container's invariants keep alive.
    #[inline]
    pub(crate) fn link(&self, index: LinkIndex) -> &Link<T> {
        match &self.slots[index.0] {
            Slot::Occupied(link) => link,
            Slot::Vacant { .. } => unreachable!("link {index} was released while still chained"),
        }
    }

    #[inline]
    pub(crate) fn link_mut(&mut self, index: LinkIndex) -> &mut Link<T> {
        match &mut self.slots[index.0] {
            Slot::Occupied(link) => link,
            Slot::Vacant { .. } => unreachable!("link {index} was released while still chained"),
        }
    }
}

impl<T> Default for LinkArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
