//! Application state containing the services and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::infrastructure::config::Config;
use crate::infrastructure::messages::MessageCatalog;
use crate::services::{TransactionService, UserService, WalletService};

/// Application state shared across all handlers.
///
/// Collaborators are wired here explicitly at process start; there is no
/// ambient registry.
#[derive(Clone)]
pub struct AppState {
    conn: DatabaseConnection,
    pub users: Arc<UserService>,
    pub wallets: Arc<WalletService>,
    pub transactions: Arc<TransactionService>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        let messages = Arc::new(MessageCatalog::for_locale(&config.locale));

        let users = Arc::new(UserService::new(
            db.clone(),
            messages.clone(),
            config.empty_results,
        ));
        let wallets = Arc::new(WalletService::new(
            db.clone(),
            messages.clone(),
            config.empty_results,
        ));
        let transactions = Arc::new(TransactionService::new(
            db.clone(),
            messages,
            config.empty_results,
        ));

        Self {
            conn: db,
            users,
            wallets,
            transactions,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.conn
    }
}
