use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait, QueryOrder,
};

use crate::models::role;
use crate::models::user::{self, Entity as User};

/// Row where id = `id`.
pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<user::Model>, DbErr> {
    User::find_by_id(id).one(conn).await
}

/// One page of all users, ordered by id, with total item and page counts.
pub async fn find_all<C: ConnectionTrait>(
    conn: &C,
    page: u64,
    size: u64,
    sort: Option<&str>,
) -> Result<(Vec<user::Model>, u64, u64), DbErr> {
    let mut query = User::find();

    match sort {
        Some("name_asc") => query = query.order_by_asc(user::Column::LastName),
        Some("name_desc") => query = query.order_by_desc(user::Column::LastName),
        Some("recent") => query = query.order_by_desc(user::Column::CreatedAt),
        _ => query = query.order_by_asc(user::Column::Id),
    }

    let paginator = query.paginate(conn, size);
    let total_items = paginator.num_items().await?;
    let total_pages = paginator.num_pages().await?;
    let content = paginator.fetch_page(page).await?;

    Ok((content, total_items, total_pages))
}

/// Role rows linked to the user through the user_roles junction.
pub async fn find_roles<C: ConnectionTrait>(
    conn: &C,
    user: &user::Model,
) -> Result<Vec<role::Model>, DbErr> {
    user.find_related(role::Entity).all(conn).await
}

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    model: user::ActiveModel,
) -> Result<user::Model, DbErr> {
    model.insert(conn).await
}
