//! Transaction operations

use sea_orm::{DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{DomainError, EmptyResultPolicy};
use crate::infrastructure::db;
use crate::infrastructure::messages::MessageCatalog;
use crate::infrastructure::repositories::{transaction_repository, wallet_repository};
use crate::models::common::{CommandResponse, DEFAULT_PAGE_SIZE, PageParams, Paged};
use crate::models::transaction::{self, TransactionDto, TransactionRequest};

pub struct TransactionService {
    db: DatabaseConnection,
    messages: Arc<MessageCatalog>,
    empty_results: EmptyResultPolicy,
}

impl TransactionService {
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

    /// Fetch a single transaction by id.
    pub async fn find_by_id(&self, id: i32) -> Result<TransactionDto, DomainError> {
        let txn = db::begin_read_only(&self.db).await?;
        let found = transaction_repository::find_by_id(&txn, id).await?;
        txn.commit().await?;

        found.map(TransactionDto::from).ok_or_else(|| {
            DomainError::NotFound(
                self.messages
                    .format("error.transaction.not-found", &[&id.to_string()]),
            )
        })
    }

    /// Fetch a single transaction by its unique reference number. The
    /// reference is parsed as a UUID before touching the database.
    pub async fn find_by_reference_number(
        &self,
        reference: &str,
    ) -> Result<TransactionDto, DomainError> {
        let reference = Uuid::parse_str(reference).map_err(|_| {
            DomainError::Validation(self.messages.format("error.invalid.reference", &[reference]))
        })?;
        let reference = reference.to_string();

        let txn = db::begin_read_only(&self.db).await?;
        let found = transaction_repository::find_by_reference_number(&txn, &reference).await?;
        txn.commit().await?;

        found.map(TransactionDto::from).ok_or_else(|| {
            DomainError::NotFound(
                self.messages
                    .format("error.transaction.reference.not-found", &[&reference]),
            )
        })
    }

    /// Fetch all transactions where the user owns the source or destination
    /// wallet. An empty result set fails under the default policy.
    pub async fn find_all_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<TransactionDto>, DomainError> {
        let txn = db::begin_read_only(&self.db).await?;
        let transactions = transaction_repository::find_all_by_user_id(&txn, user_id).await?;
        txn.commit().await?;

        if transactions.is_empty() && self.empty_results.is_error() {
            return Err(DomainError::EmptyResult(
                self.messages.get("error.not-found.records"),
            ));
        }

        Ok(transactions.into_iter().map(TransactionDto::from).collect())
    }

    /// Fetch one page of transactions. An empty page (including a page
    /// index past the end) fails under the default policy.
    pub async fn find_all(&self, params: PageParams) -> Result<Paged<TransactionDto>, DomainError> {
        let page = params.page.unwrap_or(0);
        let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 {
            return Err(DomainError::Validation(
                self.messages.get("error.invalid.page-size"),
            ));
        }

        let txn = db::begin_read_only(&self.db).await?;
        let (content, total_items, total_pages) =
            transaction_repository::find_all(&txn, page, size, params.sort.as_deref()).await?;
        txn.commit().await?;

        if content.is_empty() && self.empty_results.is_error() {
            return Err(DomainError::EmptyResult(
                self.messages.get("error.not-found.records"),
            ));
        }

        Ok(Paged {
            content: content.into_iter().map(TransactionDto::from).collect(),
            page,
            size,
            total_items,
            total_pages,
        })
    }

    /// Create a new transaction between two wallets addressed by IBAN.
    ///
    /// Both wallets must exist. Persists exactly one row, then emits one
    /// informational log line; logging is best-effort.
    pub async fn create(&self, request: TransactionRequest) -> Result<CommandResponse, DomainError> {
        if request.amount <= 0 {
            return Err(DomainError::Validation(
                self.messages.get("error.invalid.amount"),
            ));
        }

        let txn = db::begin_read_write(&self.db).await?;

        let from_wallet = wallet_repository::find_by_iban(&txn, &request.from_wallet_iban)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(
                    self.messages
                        .format("error.wallet.iban.not-found", &[&request.from_wallet_iban]),
                )
            })?;
        let to_wallet = wallet_repository::find_by_iban(&txn, &request.to_wallet_iban)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(
                    self.messages
                        .format("error.wallet.iban.not-found", &[&request.to_wallet_iban]),
                )
            })?;

        let new_transaction = transaction::ActiveModel {
            reference_number: Set(Uuid::new_v4().to_string()),
            from_wallet_id: Set(from_wallet.id),
            to_wallet_id: Set(to_wallet.id),
            amount: Set(request.amount),
            description: Set(request.description),
            created_at: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let saved = transaction_repository::insert(&txn, new_transaction).await?;
        txn.commit().await?;

        tracing::info!(
            "{}",
            self.messages.format(
                "info.transaction.created",
                &[&from_wallet.iban, &to_wallet.iban, &saved.amount.to_string()],
            )
        );

        Ok(CommandResponse { id: saved.id })
    }
}
