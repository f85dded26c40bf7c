//! Wallet operations

use sea_orm::{DatabaseConnection, Set};
use std::sync::Arc;

use crate::domain::{DomainError, EmptyResultPolicy};
use crate::infrastructure::db;
use crate::infrastructure::messages::MessageCatalog;
use crate::infrastructure::repositories::{user_repository, wallet_repository};
use crate::models::common::{CommandResponse, DEFAULT_PAGE_SIZE, PageParams, Paged};
use crate::models::wallet::{self, WalletDto, WalletRequest};

pub struct WalletService {
    db: DatabaseConnection,
    messages: Arc<MessageCatalog>,
    empty_results: EmptyResultPolicy,
}

impl WalletService {
    pub fn new(
        db: DatabaseConnection,
        messages: Arc<MessageCatalog>,
        empty_results: EmptyResultPolicy,
    ) -> Self {
        Self {
            db,
            messages,
            empty_results,
        }
    }

    /// Fetch a single wallet by id.
    pub async fn find_by_id(&self, id: i32) -> Result<WalletDto, DomainError> {
        let txn = db::begin_read_only(&self.db).await?;
        let found = wallet_repository::find_by_id(&txn, id).await?;
        txn.commit().await?;

        found.map(WalletDto::from).ok_or_else(|| {
            DomainError::NotFound(
                self.messages
                    .format("error.wallet.not-found", &[&id.to_string()]),
            )
        })
    }

    /// Fetch a single wallet by its unique IBAN.
    pub async fn find_by_iban(&self, iban: &str) -> Result<WalletDto, DomainError> {
        let txn = db::begin_read_only(&self.db).await?;
        let found = wallet_repository::find_by_iban(&txn, iban).await?;
        txn.commit().await?;

        found.map(WalletDto::from).ok_or_else(|| {
            DomainError::NotFound(
                self.messages
                    .format("error.wallet.iban.not-found", &[iban]),
            )
        })
    }

    /// Fetch all wallets owned by the given user. An empty result set fails
    /// under the default policy.
    pub async fn find_all_by_user_id(&self, user_id: i32) -> Result<Vec<WalletDto>, DomainError> {
        let txn = db::begin_read_only(&self.db).await?;
        let wallets = wallet_repository::find_all_by_user_id(&txn, user_id).await?;
        txn.commit().await?;

        if wallets.is_empty() && self.empty_results.is_error() {
            return Err(DomainError::EmptyResult(
                self.messages.get("error.not-found.records"),
            ));
        }

        Ok(wallets.into_iter().map(WalletDto::from).collect())
    }

    /// Fetch one page of wallets.
    pub async fn find_all(&self, params: PageParams) -> Result<Paged<WalletDto>, DomainError> {
        let page = params.page.unwrap_or(0);
        let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 {
            return Err(DomainError::Validation(
                self.messages.get("error.invalid.page-size"),
            ));
        }

        let txn = db::begin_read_only(&self.db).await?;
        let (content, total_items, total_pages) =
            wallet_repository::find_all(&txn, page, size, params.sort.as_deref()).await?;
        txn.commit().await?;

        if content.is_empty() && self.empty_results.is_error() {
            return Err(DomainError::EmptyResult(
                self.messages.get("error.not-found.records"),
            ));
        }

        Ok(Paged {
            content: content.into_iter().map(WalletDto::from).collect(),
            page,
            size,
            total_items,
            total_pages,
        })
    }

    /// Create a new wallet for an existing user. IBAN uniqueness is the
    /// database constraint's job; a violation propagates as a database
    /// error.
    pub async fn create(&self, request: WalletRequest) -> Result<CommandResponse, DomainError> {
        let txn = db::begin_read_write(&self.db).await?;

        let owner = user_repository::find_by_id(&txn, request.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(
                    self.messages
                        .format("error.user.not-found", &[&request.user_id.to_string()]),
                )
            })?;

        let now = chrono::Utc::now().to_rfc3339();
        let new_wallet = wallet::ActiveModel {
            iban: Set(request.iban),
            name: Set(request.name),
            balance: Set(request.balance),
            currency: Set(request.currency),
            user_id: Set(owner.id),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let saved = wallet_repository::insert(&txn, new_wallet).await?;
        txn.commit().await?;

        tracing::info!(
            "{}",
            self.messages.format(
                "info.wallet.created",
                &[&saved.iban, &owner.id.to_string()],
            )
        );

        Ok(CommandResponse { id: saved.id })
    }
}
