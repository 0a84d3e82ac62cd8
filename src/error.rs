//! Error kinds shared by every public operation in the graph, result, and
//! engine types, plus a per-thread "last error" slot mirroring the
//! set-and-inspect-later convention common to C graph libraries.

use std::cell::Cell;

/// Every way a public operation in this crate can fail.
///
/// Mirrors the error-kind list used throughout the graph/SCC literature:
/// a handful of named conditions rather than a single opaque failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A required input reference was absent.
    #[error("null graph or result reference")]
    NullPointer,
    /// A vertex id was out of the valid `[0, num_vertices)` range.
    #[error("vertex id {0} out of range")]
    InvalidVertex(usize),
    /// The underlying allocator could not satisfy a request.
    #[error("allocation failure")]
    AllocationFailure,
    /// The operation requires `num_vertices > 0`.
    #[error("operation requires a non-empty graph")]
    GraphEmpty,
    /// A parameter was outside its documented domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
    /// Insertion of a directed edge that already exists.
    #[error("edge ({0} -> {1}) already exists")]
    EdgeExists(usize, usize),
    /// Removal or lookup of a directed edge that does not exist.
    #[error("edge ({0} -> {1}) not found")]
    EdgeNotFound(usize, usize),
}

pub type GraphResult<T> = Result<T, GraphError>;

thread_local! {
    static LAST_ERROR: Cell<Option<GraphError>> = const { Cell::new(None) };
}

/// Records `err` in the calling thread's last-error slot and returns it
/// unchanged, so fallible operations can be written as
/// `foo().map_err(record)` or `return Err(record(GraphError::...))`.
pub(crate) fn record(err: GraphError) -> GraphError {
    LAST_ERROR.with(|slot| slot.set(Some(err)));
    err
}

/// Returns the most recent error recorded on the calling thread, if any.
///
/// The slot is not cleared by this call; a caller that wants a fresh read
/// must call [`clear_error`] first.
pub fn last_error() -> Option<GraphError> {
    LAST_ERROR.with(|slot| slot.get())
}

/// Clears the calling thread's last-error slot.
pub fn clear_error() {
    LAST_ERROR.with(|slot| slot.set(None));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_starts_empty_and_records_on_failure() {
        clear_error();
        assert_eq!(last_error(), None);

        let _ = record(GraphError::GraphEmpty);
        assert_eq!(last_error(), Some(GraphError::GraphEmpty));

        clear_error();
        assert_eq!(last_error(), None);
    }

    #[test]
    fn slot_is_overwritten_by_the_next_error() {
        clear_error();
        let _ = record(GraphError::InvalidVertex(3));
        let _ = record(GraphError::EdgeExists(0, 1));
        assert_eq!(last_error(), Some(GraphError::EdgeExists(0, 1)));
        clear_error();
    }
}
