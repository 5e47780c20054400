//! # sentinel-deque
//!
//! Doubly-linked deques whose boundaries are marked by sentinel links.
//!
//! ## Overview
//!
//! - **[`SentinelRingDeque`](ring::SentinelRingDeque)**: a circular chain closed
//!   by one sentinel, with in-place reversal.
//! - **[`DualSentinelList`](list::DualSentinelList)**: a linear chain between a
//!   fixed head and a fixed tail sentinel, with a bag interface (`add`,
//!   `contains`, `remove`) on top of the deque operations.
//!
//! Both containers store their links in an index arena (see [`link`]) and
//! mutate the chain only through the same two splice primitives, so no
//! traversal has to special-case an empty or single-element chain. Every
//! inserted element costs exactly one arena allocation and is released exactly
//! once, which [`ArenaStats`] makes observable.
//!
//! ## Errors
//!
//! Structural misuse, such as reading the front of an empty deque, returns a
//! [`DequeError`] and leaves the container unchanged. Removing a value that is
//! not in a [`DualSentinelList`](list::DualSentinelList) is not an error: it
//! is reported through [`tracing`] and the call returns `None`.
//!
//! ## Feature Flags
//!
//! - `ring`: [`SentinelRingDeque`](ring::SentinelRingDeque)
//! - `list`: [`DualSentinelList`](list::DualSentinelList)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sentinel_deque::prelude::*;
//!
//! let mut ring = SentinelRingDeque::new();
//! ring.add_front(1);
//! ring.add_front(2);
//! ring.add_front(3);
//! assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//!
//! let mut bag = DualSentinelList::new();
//! bag.add(1);
//! bag.add(2);
//! assert!(bag.contains(&1));
//! assert!(bag.remove(&7).is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the shared traits and the error type.
///
/// # Usage
///
/// ```rust
/// use sentinel_deque::prelude::*;
/// ```
pub mod prelude {
    pub use crate::deque::{Bag, Deque};
    pub use crate::error::{DequeError, ErrorKind};
    pub use crate::link::ArenaStats;

    #[cfg(feature = "list")]
    pub use crate::list::DualSentinelList;

    #[cfg(feature = "ring")]
    pub use crate::ring::SentinelRingDeque;
}

mod deque;
mod error;
pub mod link;

#[cfg(feature = "ring")]
pub mod ring;

#[cfg(feature = "list")]
pub mod list;

pub use deque::{Bag, Deque};
pub use error::{DequeError, ErrorKind};
pub use link::{ArenaStats, ChainIter};
