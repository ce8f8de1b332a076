use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::{
    SignUpError, decide_sign_up,
};
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::activity_store::ActivityStore;
use std::sync::Arc;

pub type SignUpApplicationError = ApplicationError<SignUpError>;

pub struct SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: SignUpForActivity,
    ) -> Result<Activity, SignUpApplicationError> {
        let decided = command.clone();
        let activity = self
            .store
            .update(&command.activity_name, move |state| {
                decide_sign_up(state, decided)
            })
            .await?
            .map_err(ApplicationError::Domain)?;
        tracing::info!(
            activity = %command.activity_name,
            email = %command.email,
            participants = activity.participants.len(),
            "participant signed up"
        );
        Ok(activity)
    }
}
