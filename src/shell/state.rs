use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use crate::shared::infrastructure::activity_store::in_memory::InMemoryActivityStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpForActivityHandler<InMemoryActivityStore>>,
    pub unregister_handler: Arc<UnregisterFromActivityHandler<InMemoryActivityStore>>,
}

impl AppState {
    /// Wires every use case to the same store, so reads observe writes.
    pub fn in_memory(store: Arc<InMemoryActivityStore>) -> Self {
        Self {
            queries: store.clone(),
            sign_up_handler: Arc::new(SignUpForActivityHandler::new(store.clone())),
            unregister_handler: Arc::new(UnregisterFromActivityHandler::new(store)),
        }
    }
}
