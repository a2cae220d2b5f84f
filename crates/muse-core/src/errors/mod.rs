mod store_error;

pub use store_error::StoreError;

/// Top-level error type for the Muse engine.
#[derive(Debug, thiserror::Error)]
pub enum MuseError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the workspace.
pub type MuseResult<T> = Result<T, MuseError>;
