use crate::shared::infrastructure::activity_store::ActivityStoreError;
use thiserror::Error;

/// Failure of a command handler. `D` is the use case's own decide error.
#[derive(Debug, Error)]
pub enum ApplicationError<D> {
    #[error(transparent)]
    Store(#[from] ActivityStoreError),

    #[error("domain rejected: {0}")]
    Domain(D),
}
