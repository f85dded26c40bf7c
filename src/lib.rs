pub mod api;
pub mod api_docs;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod services;

// Short paths kept for the binary and the integration tests
pub use infrastructure::config;
pub use infrastructure::db;
pub use infrastructure::messages;
pub use infrastructure::seed;
pub use infrastructure::server;
