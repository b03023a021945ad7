//! Error types for the dispatch pump.

use rlt_types::ChangeAction;

/// Errors surfaced while draining a change chain.
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    /// A Reset notification reached the pump on the incremental path.
    ///
    /// The analyzer never produces Reset incrementally; only the explicit
    /// reset fallback may carry one. Seeing this means a producer broke the
    /// contract, and the drain is aborted rather than retried.
    #[error("reset notification on the incremental path")]
    UnexpectedReset,

    /// The handler rejected a notification.
    #[error("handler rejected {action:?}: {reason}")]
    Rejected {
        action: ChangeAction,
        reason: String,
    },
}

/// Convenience alias for dispatch results.
pub type UpdateResult<T> = Result<T, UpdateError>;
