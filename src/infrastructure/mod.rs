pub mod config;
pub mod db;
pub mod messages;
pub mod repositories;
pub mod seed;
pub mod server;
pub mod state;

pub use state::AppState;
