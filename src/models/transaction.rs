use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// UUID v4 assigned at creation, unique and immutable
    pub reference_number: String,
    pub from_wallet_id: i32,
    pub to_wallet_id: i32,
    /// Amount in minor units (e.g. cents)
    pub amount: i64,
    pub description: Option<String>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::wallet::Entity",
        from = "Column::FromWalletId",
        to = "super::wallet::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    FromWallet,
    #[sea_orm(
        belongs_to = "super::wallet::Entity",
        from = "Column::ToWalletId",
        to = "super::wallet::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    ToWallet,
}

impl ActiveModelBehavior for ActiveModel {}

// DTO for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionDto {
    pub id: Option<i32>,
    pub reference_number: String,
    pub from_wallet_id: i32,
    pub to_wallet_id: i32,
    pub amount: i64,
    pub description: Option<String>,
    pub created_at: String,
}

impl From<Model> for TransactionDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            reference_number: model.reference_number,
            from_wallet_id: model.from_wallet_id,
            to_wallet_id: model.to_wallet_id,
            amount: model.amount,
            description: model.description,
            created_at: model.created_at,
        }
    }
}

impl From<TransactionDto> for Model {
    fn from(dto: TransactionDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            reference_number: dto.reference_number,
            from_wallet_id: dto.from_wallet_id,
            to_wallet_id: dto.to_wallet_id,
            amount: dto.amount,
            description: dto.description,
            created_at: dto.created_at,
        }
    }
}

/// Request payload for creating a transaction.
///
/// Wallets are addressed by IBAN; both must exist when the transaction is
/// created.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TransactionRequest {
    pub from_wallet_iban: String,
    pub to_wallet_iban: String,
    pub amount: i64,
    pub description: Option<String>,
}
