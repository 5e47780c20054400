//! Error type for container precondition violations.
//!
//! Structural misuse (reading or removing from an empty container) and
//! internal invariant breaches are reported as a [`DequeError`] naming the
//! container and operation where they were detected, so every violation site
//! has its own identity. Nothing is mutated when an operation fails.
//!
//! A missing value in the bag interface is *not* an error; see
//! `DualSentinelList::remove`.

use thiserror::Error;

/// Tag of a [`DequeError`], for matching without the call-site details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation needs at least one element.
    EmptyCollection,
    /// A link reached during the operation was a sentinel or already released.
    InvalidLink,
}

/// A fatal precondition violation.
///
/// # Examples
///
/// ```rust
/// use sentinel_deque::{ErrorKind, ring::SentinelRingDeque};
///
/// let mut deque: SentinelRingDeque<i32> = SentinelRingDeque::new();
/// let error = deque.remove_front().unwrap_err();
///
/// assert_eq!(error.kind(), ErrorKind::EmptyCollection);
/// assert_eq!(
///     error.to_string(),
///     "SentinelRingDeque::remove_front: collection is empty"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DequeError {
    /// Front/back access or removal on an empty container.
    #[error("{container}::{operation}: collection is empty")]
    EmptyCollection {
        /// Container type where the violation occurred.
        container: &'static str,
        /// Operation that was called.
        operation: &'static str,
    },
    /// The chain reached a sentinel or released slot where a real link was expected.
    #[error("{container}::{operation}: link #{index} is not a live element link")]
    InvalidLink {
        /// Container type where the violation occurred.
        container: &'static str,
        /// Operation that was called.
        operation: &'static str,
        /// Arena slot of the offending link.
        index: usize,
    },
}

impl DequeError {
    pub(crate) const fn empty(container: &'static str, operation: &'static str) -> Self {
        Self::EmptyCollection {
            container,
            operation,
        }
    }

    pub(crate) const fn invalid_link(
        container: &'static str,
        operation: &'static str,
        index: usize,
    ) -> Self {
        Self::InvalidLink {
            container,
            operation,
            index,
        }
    }

    /// Returns the tag of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCollection { .. } => ErrorKind::EmptyCollection,
            Self::InvalidLink { .. } => ErrorKind::InvalidLink,
        }
    }

    /// Returns the container type where the violation occurred.
    #[must_use]
    pub const fn container(&self) -> &'static str {
        match self {
            Self::EmptyCollection { container, .. } | Self::InvalidLink { container, .. } => {
                *container
            }
        }
    }

    /// Returns the operation that was called.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::EmptyCollection { operation, .. } | Self::InvalidLink { operation, .. } => {
                *operation
            }
        }
    }
}
