use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Operation-level failures. Business outcomes of a clock submission
/// (denied, already complete, ...) are not errors; see [`crate::engine::Outcome`].
#[derive(Error, Debug)]
pub enum AppError {
    /// The local database is unreachable, locked or corrupt. The current
    /// operation is abandoned; nothing retries automatically.
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),

    /// A roster import file could not be applied. The whole import is
    /// abandoned; no rows were inserted.
    #[error("roster import failed: {0}")]
    Parse(String),

    /// The report destination could not be written, usually because the
    /// file is open in another program. Recoverable: close it and retry.
    #[error("could not write report: {0}")]
    Write(String),

    /// The target of an approval or lookup does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// No school has been registered on this station yet.
    #[error("station is not registered; complete setup first")]
    Unconfigured,
}
