//! Monotonic identifier allocation
//!
//! Every [`GraphStore`](super::GraphStore) owns two allocators, one for nodes and
//! one for edges. They never share a counter, so the two id spaces are
//! independent of each other and of any other graph in the process.

use super::store::{GraphError, GraphResult};
use super::types::IdKind;

/// A strictly increasing sequence of `u64` identifiers
///
/// Identifiers are handed out starting at the base (0 by default) and are never
/// reused. Running past `u64::MAX` is fatal and surfaces as
/// [`GraphError::IdSpaceExhausted`].
#[derive(Debug, Clone)]
pub struct IdAllocator {
    kind: IdKind,
    /// Next value to hand out; `None` once the range is used up
    next: Option<u64>,
}

impl IdAllocator {
    /// Create an allocator starting at 0
    pub fn new(kind: IdKind) -> Self {
        Self::starting_at(kind, 0)
    }

    /// Create an allocator whose first identifier is `base`
    pub fn starting_at(kind: IdKind, base: u64) -> Self {
        IdAllocator {
            kind,
            next: Some(base),
        }
    }

    /// Hand out the next identifier
    pub fn next(&mut self) -> GraphResult<u64> {
        let id = self
            .next
            .ok_or(GraphError::IdSpaceExhausted { kind: self.kind })?;
        self.next = id.checked_add(1);
        Ok(id)
    }

    /// The identifier the next call to [`next`](Self::next) would return
    pub fn peek(&self) -> Option<u64> {
        self.next
    }
}
