pub mod config;
pub mod errors;
pub mod llm_client;
pub mod recommendation;
pub mod render;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
