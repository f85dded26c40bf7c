//! User operations

use sea_orm::{DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::domain::{DomainError, EmptyResultPolicy};
use crate::infrastructure::db;
use crate::infrastructure::messages::MessageCatalog;
use crate::infrastructure::repositories::{role_repository, user_repository};
use crate::models::common::{CommandResponse, DEFAULT_PAGE_SIZE, PageParams, Paged};
use crate::models::role::RoleType;
use crate::models::user::{self, UserDto, UserRequest};
use crate::models::user_role;

pub struct UserService {
    db: DatabaseConnection,
    messages: Arc<MessageCatalog>,
    empty_results: EmptyResultPolicy,
}

impl UserService {
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

    /// Fetch a single user by id, with role names resolved.
    pub async fn find_by_id(&self, id: i32) -> Result<UserDto, DomainError> {
        let txn = db::begin_read_only(&self.db).await?;
        let user = user_repository::find_by_id(&txn, id).await?.ok_or_else(|| {
            DomainError::NotFound(
                self.messages
                    .format("error.user.not-found", &[&id.to_string()]),
            )
        })?;
        let roles = user_repository::find_roles(&txn, &user).await?;
        txn.commit().await?;

        let mut dto = UserDto::from(user);
        dto.roles = roles.into_iter().map(|r| r.r#type).collect();
        Ok(dto)
    }

    /// Fetch one page of users, with role names resolved per user.
    pub async fn find_all(&self, params: PageParams) -> Result<Paged<UserDto>, DomainError> {
        let page = params.page.unwrap_or(0);
        let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 {
            return Err(DomainError::Validation(
                self.messages.get("error.invalid.page-size"),
            ));
        }

        let txn = db::begin_read_only(&self.db).await?;
        let (users, total_items, total_pages) =
            user_repository::find_all(&txn, page, size, params.sort.as_deref()).await?;

        let mut content = Vec::with_capacity(users.len());
        for user in users {
            let roles = user_repository::find_roles(&txn, &user).await?;
            let mut dto = UserDto::from(user);
            dto.roles = roles.into_iter().map(|r| r.r#type).collect();
            content.push(dto);
        }
        txn.commit().await?;

        if content.is_empty() && self.empty_results.is_error() {
            return Err(DomainError::EmptyResult(
                self.messages.get("error.not-found.records"),
            ));
        }

        Ok(Paged {
            content,
            page,
            size,
            total_items,
            total_pages,
        })
    }

    /// Create a new user with the requested role set.
    ///
    /// Every requested role type must parse and name an existing role row;
    /// junction rows are written in the same read-write scope as the user.
    pub async fn create(&self, request: UserRequest) -> Result<CommandResponse, DomainError> {
        let mut types: Vec<RoleType> = Vec::new();
        for name in &request.roles {
            let role_type = RoleType::parse(name).ok_or_else(|| {
                DomainError::Validation(self.messages.format("error.invalid.role", &[name]))
            })?;
            if !types.contains(&role_type) {
                types.push(role_type);
            }
        }

        let txn = db::begin_read_write(&self.db).await?;

        let roles = role_repository::find_by_types(&txn, &types).await?;
        if roles.len() != types.len() {
            let found: Vec<&str> = roles.iter().map(|r| r.r#type.as_str()).collect();
            let missing = types
                .iter()
                .map(|t| t.as_str())
                .find(|t| !found.contains(t))
                .unwrap_or_default();
            return Err(DomainError::NotFound(
                self.messages.format("error.role.not-found", &[missing]),
            ));
        }

        let now = chrono::Utc::now().to_rfc3339();
        let new_user = user::ActiveModel {
            first_name: Set(request.first_name),
            last_name: Set(request.last_name),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };
        let saved = user_repository::insert(&txn, new_user).await?;

        for role in &roles {
            let link = user_role::ActiveModel {
                user_id: Set(saved.id),
                role_id: Set(role.id),
            };
            user_role::Entity::insert(link).exec(&txn).await?;
        }

        txn.commit().await?;

        let full_name = format!("{} {}", saved.first_name, saved.last_name);
        tracing::info!(
            "{}",
            self.messages.format("info.user.created", &[&full_name])
        );

        Ok(CommandResponse { id: saved.id })
    }
}
