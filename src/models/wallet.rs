use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub iban: String,
    pub name: String,
    /// Balance in minor units (e.g. cents)
    pub balance: i64,
    pub currency: String,
    pub user_id: i32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// DTO for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WalletDto {
    pub id: Option<i32>,
    pub iban: String,
    pub name: String,
    pub balance: i64,
    pub currency: String,
    pub user_id: i32,
}

impl From<Model> for WalletDto {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            iban: model.iban,
            name: model.name,
            balance: model.balance,
            currency: model.currency,
            user_id: model.user_id,
        }
    }
}

impl From<WalletDto> for Model {
    fn from(dto: WalletDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            iban: dto.iban,
            name: dto.name,
            balance: dto.balance,
            currency: dto.currency,
            user_id: dto.user_id,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

/// Request payload for creating a wallet
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct WalletRequest {
    pub iban: String,
    pub name: String,
    pub balance: i64,
    pub currency: String,
    pub user_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_round_trip_preserves_mapped_fields() {
        let original = Model {
            id: 3,
            iban: "TR330006100519786457841326".to_string(),
            name: "Main".to_string(),
            balance: 125_000,
            currency: "TRY".to_string(),
            user_id: 1,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            updated_at: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let back = Model::from(WalletDto::from(original.clone()));
        assert_eq!(back.id, original.id);
        assert_eq!(back.iban, original.iban);
        assert_eq!(back.name, original.name);
        assert_eq!(back.balance, original.balance);
        assert_eq!(back.currency, original.currency);
        assert_eq!(back.user_id, original.user_id);
    }
}
