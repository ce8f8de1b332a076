// Composition root for the activities service.
//
// Responsibilities
// - Read config from environment.
// - Seed the in-memory store.
// - Wire the store into use case handlers.
// - Expose the HTTP router to the binary and the integration tests.

pub mod config;
pub mod http;
pub mod seed;
pub mod state;
pub mod static_assets;
