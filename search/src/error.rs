//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Running out of frontier,
//! depth or budget is a normal outcome expressed by
//! [`crate::search::TerminationReasonV1`].

use thiserror::Error;

/// Typed failure for pre-flight search validation.
///
/// Returned before any node is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The policy cannot run any search at all.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
