use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::models::transaction::{self, Entity as Transaction};
use crate::models::wallet::{self, Entity as Wallet};

/// Row where id = `id`.
pub async fn find_by_id<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<Option<transaction::Model>, DbErr> {
    Transaction::find_by_id(id).one(conn).await
}

/// Row where reference_number = `reference` (unique column).
pub async fn find_by_reference_number<C: ConnectionTrait>(
    conn: &C,
    reference: &str,
) -> Result<Option<transaction::Model>, DbErr> {
    Transaction::find()
        .filter(transaction::Column::ReferenceNumber.eq(reference))
        .one(conn)
        .await
}

/// Rows whose source or destination wallet is owned by user `user_id`,
/// newest first. Resolved as the user's wallet ids first, then an OR filter
/// across both wallet roles.
pub async fn find_all_by_user_id<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
) -> Result<Vec<transaction::Model>, DbErr> {
    let wallet_ids: Vec<i32> = Wallet::find()
        .filter(wallet::Column::UserId.eq(user_id))
        .all(conn)
        .await?
        .into_iter()
        .map(|w| w.id)
        .collect();

    if wallet_ids.is_empty() {
        return Ok(Vec::new());
    }

    Transaction::find()
        .filter(
            Condition::any()
                .add(transaction::Column::FromWalletId.is_in(wallet_ids.clone()))
                .add(transaction::Column::ToWalletId.is_in(wallet_ids)),
        )
        .order_by_desc(transaction::Column::CreatedAt)
        .all(conn)
        .await
}

/// One page of all transactions with total item and page counts.
pub async fn find_all<C: ConnectionTrait>(
    conn: &C,
    page: u64,
    size: u64,
    sort: Option<&str>,
) -> Result<(Vec<transaction::Model>, u64, u64), DbErr> {
    let mut query = Transaction::find();

    match sort {
        Some("created_at_asc") => query = query.order_by_asc(transaction::Column::CreatedAt),
        Some("amount_asc") => query = query.order_by_asc(transaction::Column::Amount),
        Some("amount_desc") => query = query.order_by_desc(transaction::Column::Amount),
        _ => query = query.order_by_desc(transaction::Column::CreatedAt),
    }

    let paginator = query.paginate(conn, size);
    let total_items = paginator.num_items().await?;
    let total_pages = paginator.num_pages().await?;
    let content = paginator.fetch_page(page).await?;

    Ok((content, total_items, total_pages))
}

pub async fn insert<C: ConnectionTrait>(
    conn: &C,
    model: transaction::ActiveModel,
) -> Result<transaction::Model, DbErr> {
    model.insert(conn).await
}
