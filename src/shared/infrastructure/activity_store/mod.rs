// Port for the activity directory.
//
// Responsibilities
// - Load activities by name.
// - Run a roster decision and store its outcome as one step, so concurrent
//   writers to the same activity are serialized.
//
// Boundaries
// - No business rules here. Deciding what a roster should look like belongs
//   to the use case decide functions.

pub mod in_memory;

use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn load(&self, name: &str) -> Result<Option<Activity>, ActivityStoreError>;

    /// Hands the current activity (or `None` for an unknown name) to `decide`
    /// and stores the accepted activity before any other writer runs. The
    /// inner result is the decision itself; a decision for an unknown name is
    /// returned but never stored.
    async fn update<D, F>(
        &self,
        name: &str,
        decide: F,
    ) -> Result<Result<Activity, D>, ActivityStoreError>
    where
        D: Send + 'static,
        F: FnOnce(Option<&Activity>) -> Result<Activity, D> + Send + 'static;
}
