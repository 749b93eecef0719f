pub mod config;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;

pub use config::{AppConfig, ConfigError, SeedUser, StoreBackend};
pub use routes::app_router;
pub use state::AppState;
