use std::fmt;
use std::iter::FusedIterator;

use super::arena::{LinkArena, LinkIndex};

/// Borrowing iterator over the elements of a sentinel-bounded chain.
///
/// Created by `iter()` on either container. Each call starts a fresh walk, so
/// a container can be enumerated any number of times.
pub struct ChainIter<'a, T> {
    arena: &'a LinkArena<T>,
    front: LinkIndex,
    back: LinkIndex,
    remaining: usize,
}

impl<'a, T> ChainIter<'a, T> {
    /// `front` and `back` are the first and last real links; `remaining` is the
    /// number of real links between them, inclusive.
    pub(crate) const fn new(
        arena: &'a LinkArena<T>,
        front: LinkIndex,
        back: LinkIndex,
        remaining: usize,
    ) -> Self {
        Self {
            arena,
            front,
            back,
            remaining,
        }
    }

    /// Writes the size line and one `List[i]: value` line per element.
    ///
    /// A precision on `formatter` (as in `{:.2}`) is applied to every value.
    pub(crate) fn write_listing(self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        T: fmt::Display,
    {
        writeln!(formatter, "List size: {}", self.remaining)?;
        if self.remaining == 0 {
            return Ok(());
        }
        writeln!(formatter, "List contents:")?;
        let precision = formatter.precision();
        for (position, value) in self.enumerate() {
            match precision {
                Some(precision) => writeln!(formatter, "List[{position}]: {value:.precision$}")?,
                None => writeln!(formatter, "List[{position}]: {value}")?,
            }
        }
        Ok(())
    }
}

impl<T> Clone for ChainIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.arena.link(self.front);
        self.remaining -= 1;
        self.front = link.next;
        link.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for ChainIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let link = self.arena.link(self.back);
        self.remaining -= 1;
        self.back = link.prev;
        link.value.as_ref()
    }
}

impl<T> ExactSizeIterator for ChainIter<'_, T> {}

impl<T> FusedIterator for ChainIter<'_, T> {}
