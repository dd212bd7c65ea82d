//! Error types for list operations.

use core::fmt;

/// Index outside the valid range for the operation.
///
/// Returned by [`List::set`](crate::List::set) and
/// [`List::remove_at`](crate::List::remove_at) when `index >= len`, and by
/// [`List::insert`](crate::List::insert) when `index > len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    /// The offending index.
    pub index: usize,
    /// List length at the time of the call.
    pub len: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds for list of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfBounds {}

/// Destination slice too small for a bulk copy.
///
/// Returned by [`List::copy_to`](crate::List::copy_to) when the destination
/// cannot hold every element starting at the given offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsufficientCapacity {
    /// Number of elements the copy needs to place.
    pub required: usize,
    /// Slots actually available past the offset.
    pub available: usize,
}

impl fmt::Display for InsufficientCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "destination holds {} elements past the offset, {} required",
            self.available, self.required
        )
    }
}

impl std::error::Error for InsufficientCapacity {}
