// In memory implementation of the ActivityStore port and the activity queries.
//
// Purpose
// - Hold the seeded directory for the lifetime of the process.
//
// Responsibilities
// - Keep activities in seed order.
// - Decide and write under a single write guard, so no roster update is lost.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::shared::infrastructure::activity_store::{ActivityStore, ActivityStoreError};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryActivityStore {
    rows: RwLock<Vec<Activity>>,
    is_offline: bool,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store. When a name repeats, the later activity replaces the
    /// earlier one in place.
    pub fn with_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        let mut rows: Vec<Activity> = Vec::new();
        for activity in activities {
            match rows.iter_mut().find(|r| r.name == activity.name) {
                Some(existing) => *existing = activity,
                None => rows.push(activity),
            }
        }
        Self {
            rows: RwLock::new(rows),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), ActivityStoreError> {
        if self.is_offline {
            return Err(ActivityStoreError::Backend("Activity store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn load(&self, name: &str) -> Result<Option<Activity>, ActivityStoreError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard.iter().find(|r| r.name == name).cloned())
    }

    async fn update<D, F>(
        &self,
        name: &str,
        decide: F,
    ) -> Result<Result<Activity, D>, ActivityStoreError>
    where
        D: Send + 'static,
        F: FnOnce(Option<&Activity>) -> Result<Activity, D> + Send + 'static,
    {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let Some(slot) = guard.iter_mut().find(|r| r.name == name) else {
            return Ok(decide(None));
        };
        let decision = decide(Some(&*slot));
        if let Ok(next) = &decision {
            *slot = next.clone();
        }
        Ok(decision)
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityStore {
    async fn list_activities(&self) -> anyhow::Result<Vec<Activity>> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard.clone())
    }

    async fn get_activity(&self, name: &str) -> anyhow::Result<Option<Activity>> {
        Ok(self.load(name).await?)
    }
}
