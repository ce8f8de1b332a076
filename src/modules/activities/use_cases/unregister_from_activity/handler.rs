use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::{
    UnregisterError, decide_unregister,
};
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::activity_store::ActivityStore;
use std::sync::Arc;

pub type UnregisterApplicationError = ApplicationError<UnregisterError>;

pub struct UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<Activity, UnregisterApplicationError> {
        let decided = command.clone();
        let activity = self
            .store
            .update(&command.activity_name, move |state| {
                decide_unregister(state, decided)
            })
            .await?
            .map_err(ApplicationError::Domain)?;
        tracing::info!(
            activity = %command.activity_name,
            email = %command.email,
            participants = activity.participants.len(),
            "participant unregistered"
        );
        Ok(activity)
    }
}
