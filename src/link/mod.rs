//! Doubly-linked nodes stored in an index arena.
//!
//! Both containers keep their links, sentinels included, in a private
//! `LinkArena` and address them by slot index instead of by pointer. The
//! cyclic `next`/`prev` structure of a sentinel ring therefore never turns into
//! an ownership cycle: the container owns the arena, the arena owns every
//! link.
//!
//! Insertion and removal go through two splice primitives only:
//!
//! - `insert_between(before, after, value)` allocates one link between two
//!   adjacent links;
//! - `unlink(link)` rewires the neighbours of a real link and releases it.
//!
//! The arena counts allocations and releases in [`ArenaStats`], which makes
//! the one-allocation-per-element discipline observable from the outside.

mod arena;
mod iter;
mod splice;

pub use arena::ArenaStats;
pub use iter::ChainIter;

pub(crate) use arena::{LinkArena, LinkIndex};
