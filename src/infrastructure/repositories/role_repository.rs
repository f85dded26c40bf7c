use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::models::role::{self, Entity as Role, RoleType};

/// Rows where `type` is one of the given role types.
pub async fn find_by_types<C: ConnectionTrait>(
    conn: &C,
    types: &[RoleType],
) -> Result<Vec<role::Model>, DbErr> {
    let names: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
    Role::find()
        .filter(role::Column::Type.is_in(names))
        .all(conn)
        .await
}
