pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
