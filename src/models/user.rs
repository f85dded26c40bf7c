use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wallet::Entity")]
    Wallet,
}

impl Related<super::wallet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wallet.def()
    }
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_role::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_role::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// DTO for API responses.
//
// `full_name` is derived, never persisted. There is deliberately no
// null-guard: an empty first or last name still yields the literal
// space-joined value ("" + " Doe" -> " Doe").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    /// Role type names, filled in by the service layer
    pub roles: Vec<String>,
}

impl From<Model> for UserDto {
    fn from(model: Model) -> Self {
        let full_name = format!("{} {}", model.first_name, model.last_name);
        Self {
            id: Some(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            full_name,
            roles: Vec::new(),
        }
    }
}

impl From<UserDto> for Model {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id.unwrap_or_default(),
            first_name: dto.first_name,
            last_name: dto.last_name,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

/// Request payload for creating a user
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserRequest {
    pub first_name: String,
    pub last_name: String,
    /// Role type names ('ROLE_USER', 'ROLE_ADMIN'); every entry must
    /// name an existing role row
    pub roles: Vec<String>,
}
