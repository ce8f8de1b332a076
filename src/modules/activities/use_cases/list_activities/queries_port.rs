use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;

#[async_trait]
pub trait ActivityQueries {
    /// Every activity in the directory, in seed order.
    async fn list_activities(&self) -> anyhow::Result<Vec<Activity>>;

    async fn get_activity(&self, name: &str) -> anyhow::Result<Option<Activity>>;
}
