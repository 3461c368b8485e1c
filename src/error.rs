//! Error types.
//!
//! `DashboardError` covers everything that blocks a user action.
//! `StoreError` covers backend failures when writing the archive; read
//! failures never surface, they degrade to an empty archive.

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("login required")]
    NotLoggedIn,

    #[error("search quota exhausted")]
    QuotaExceeded,

    #[error("enter at least one keyword")]
    EmptyKeywordSet,

    #[error("snapshot {index} does not exist (archive holds {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("analysis cancelled by a newer request")]
    Cancelled,

    #[error("analysis failed: {0}")]
    TaskFailed(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode archive: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not determine data directory")]
    NoDataDir,
}
