/// Errors surfaced through the persistence contract.
///
/// The engine has no durability of its own; a failing store propagates to
/// the caller, which owns retry/backoff policy.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("pattern {id} not found in project {project_id}")]
    PatternNotFound { project_id: String, id: String },

    #[error("malformed record rejected by store: {details}")]
    MalformedRecord { details: String },
}
