use sea_orm::{
    AccessMode, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction, DbBackend,
    DbErr, Statement, TransactionTrait,
};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

/// Open a read-only transaction scope for a service call.
pub async fn begin_read_only(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    begin_with_mode(db, AccessMode::ReadOnly).await
}

/// Open a read-write transaction scope for a service call.
pub async fn begin_read_write(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    begin_with_mode(db, AccessMode::ReadWrite).await
}

async fn begin_with_mode(
    db: &DatabaseConnection,
    mode: AccessMode,
) -> Result<DatabaseTransaction, DbErr> {
    match db.get_database_backend() {
        // SQLite has no SET TRANSACTION; a plain BEGIN is all it supports
        DbBackend::Sqlite => db.begin().await,
        _ => db.begin_with_config(None, Some(mode)).await,
    }
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Create users table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create roles table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS roles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create user_roles junction table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS user_roles (
            user_id INTEGER NOT NULL,
            role_id INTEGER NOT NULL,
            PRIMARY KEY (user_id, role_id),
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
            FOREIGN KEY (role_id) REFERENCES roles(id) ON DELETE CASCADE
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create wallets table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS wallets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            iban TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            balance INTEGER NOT NULL DEFAULT 0,
            currency TEXT NOT NULL,
            user_id INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
        );
        CREATE INDEX IF NOT EXISTS idx_wallets_user_id ON wallets(user_id);
        CREATE INDEX IF NOT EXISTS idx_wallets_iban ON wallets(iban);
        "#
        .to_owned(),
    ))
    .await?;

    // Create transactions table. Reference numbers are unique and immutable
    // once assigned; wallet FKs deliberately do not cascade.
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            reference_number TEXT NOT NULL UNIQUE,
            from_wallet_id INTEGER NOT NULL,
            to_wallet_id INTEGER NOT NULL,
            amount INTEGER NOT NULL,
            description TEXT,
            created_at TEXT NOT NULL,
            FOREIGN KEY (from_wallet_id) REFERENCES wallets(id),
            FOREIGN KEY (to_wallet_id) REFERENCES wallets(id)
        );
        CREATE INDEX IF NOT EXISTS idx_transactions_from_wallet_id ON transactions(from_wallet_id);
        CREATE INDEX IF NOT EXISTS idx_transactions_to_wallet_id ON transactions(to_wallet_id);
        "#
        .to_owned(),
    ))
    .await?;

    // Insert the role catalog if not present
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        INSERT OR IGNORE INTO roles (type, created_at, updated_at)
        VALUES ('ROLE_USER', datetime('now'), datetime('now')),
               ('ROLE_ADMIN', datetime('now'), datetime('now'))
        "#
        .to_owned(),
    ))
    .await?;

    Ok(())
}
