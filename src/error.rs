use thiserror::Error;

/// Errors raised while setting up or driving a harness run.
///
/// Failed assertions and accounting mismatches are not errors; they are
/// counted and reported, and the run still completes with a grade.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("unknown test set \"{0}\" (see `gk list`)")]
    UnknownTestSet(String),

    #[error("unknown group \"{0}\" (see `gk list`)")]
    UnknownGroup(String),
}
