//! Splice primitives shared by both containers.
//!
//! ```text
//!   before <-> after                      (before.next == after)
//!   before <-> new <-> after              insert_between(before, after, value)
//!   prev <-> link <-> next  =>  prev <-> next    unlink(link)
//! ```
//!
//! These are the only places where `next`/`prev` are rewritten on insertion
//! and removal.

use super::arena::{Link, LinkArena, LinkIndex};

impl<T> LinkArena<T> {
    /// Allocates a link holding `value` between two adjacent links.
    ///
    /// `before.next` must be `after` (and `after.prev` must be `before`).
    pub(crate) fn insert_between(
        &mut self,
        before: LinkIndex,
        after: LinkIndex,
        value: T,
    ) -> LinkIndex {
        debug_assert_eq!(self.link(before).next, after, "insert outside adjacent pair");
        debug_assert_eq!(self.link(after).prev, before, "insert outside adjacent pair");

        let inserted = self.allocate(Link {
            value: Some(value),
            next: after,
            prev: before,
        });
        self.link_mut(before).next = inserted;
        self.link_mut(after).prev = inserted;
        inserted
    }

    /// Detaches a real link from its neighbours and releases it.
    ///
    /// Returns `None` without touching anything when `index` is a sentinel or a
    /// vacant slot.
    pub(crate) fn unlink(&mut self, index: LinkIndex) -> Option<T> {
        let link = self.get(index)?;
        if link.is_sentinel() {
            return None;
        }
        let (prev, next) = (link.prev, link.next);

        self.link_mut(prev).next = next;
        self.link_mut(next).prev = prev;
        self.release(index).and_then(|link| link.value)
    }

    /// Swaps `next` and `prev` of one link.
    ///
    /// Returns the link that followed `index` before the swap, which is its
    /// `prev` afterwards.
    pub(crate) fn swap_direction(&mut self, index: LinkIndex) -> LinkIndex {
        let link = self.link_mut(index);
        std::mem::swap(&mut link.next, &mut link.prev);
        link.prev
    }

    /// Releases every link from `first` along `next` up to, not including,
    /// `stop`. Returns how many links were released.
    pub(crate) fn release_chain(&mut self, first: LinkIndex, stop: LinkIndex) -> usize {
        let mut released = 0;
        let mut current = first;
        while current != stop {
            let Some(link) = self.release(current) else {
                break;
            };
            released += 1;
            current = link.next;
        }
        released
    }
}
