use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use mergington_activities::shared::infrastructure::activity_store::in_memory::InMemoryActivityStore;
use mergington_activities::shell::config::Config;
use mergington_activities::shell::http::router;
use mergington_activities::shell::seed::{default_activities, load_activities};
use mergington_activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let activities = match &config.activities_file {
        Some(path) => load_activities(path)?,
        None => default_activities(),
    };
    tracing::info!(activities = activities.len(), "seeded activity directory");

    let store = Arc::new(InMemoryActivityStore::with_activities(activities));
    let app = router(AppState::in_memory(store));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Mergington activities: http://{}/", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
