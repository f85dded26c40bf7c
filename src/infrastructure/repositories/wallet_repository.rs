use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::models::wallet::{self, Entity as Wallet};

/// Row where id = `id`.
pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<wallet::Model>, DbErr> {
    Wallet::find_by_id(id).one(conn).await
}

/// Row where iban = `iban` (unique column).
pub async fn find_by_iban<C: ConnectionTrait>(
    conn: &C,
    iban: &str,
) -> Result<Option<wallet::Model>, DbErr> {
    Wallet::find()
        .filter(wallet::Column::Iban.eq(iban))
        .one(conn)
        .await
}

/// Rows where owning user id = `user_id`, ordered by id.
pub async fn find_all_by_user_id<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
) -> Result<Vec<wallet::Model>, DbErr> {
    Wallet::find()
        .filter(wallet::Column::UserId.eq(user_id))
        .order_by_asc(wallet::Column::Id)
        .all(conn)
        .await
}

/// One page of all wallets with total item and page counts.
pub async fn find_all<C: ConnectionTrait>(
    conn: &C,
    page: u64,
    size: u64,
    sort: Option<&str>,
) -> Result<(Vec<wallet::Model>, u64, u64), DbErr> {
    let mut query = Wallet::find();

    match sort {
        Some("iban_asc") => query = query.order_by_asc(wallet::Column::Iban),
        Some("balance_desc") => query = query.order_by_desc(wallet::Column::Balance),
        Some("recent") => query = query.order_by_desc(wallet::Column::CreatedAt),
        _ => query = query.order_by_asc(wallet::Column::Id),
    }

    let paginator = query.paginate(conn, size);
    let total_items = paginator.num_items().await?;
    let total_pages = paginator.num_pages().await?;
    let content = paginator.fetch_page(page).await?;

    Ok((content, total_items, total_pages))
}

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    model: wallet::ActiveModel,
) -> Result<wallet::Model, DbErr> {
    model.insert(conn).await
}
