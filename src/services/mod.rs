//! Services Layer
//!
//! Business operations wrapping the repositories. Each public method runs
//! inside one explicit transaction scope (read-only or read-write) and
//! translates misses into localized domain errors.

pub mod transaction_service;
pub mod user_service;
pub mod wallet_service;

pub use transaction_service::TransactionService;
pub use user_service::UserService;
pub use wallet_service::WalletService;
