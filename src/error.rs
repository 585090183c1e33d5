//! Selector-specific error types.

use thiserror::Error;

/// Errors reported by the selector.
///
/// `Closed` is a sentinel, not a failure: it marks the end of the
/// interaction, the way end-of-stream marks the end of a read. Whether the
/// user accepted or cancelled is carried separately by the accepted-entry
/// field. Real error variants can join this enum without changing the
/// host-facing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The interaction has concluded.
    #[error("completion selection closed")]
    Closed,
}
