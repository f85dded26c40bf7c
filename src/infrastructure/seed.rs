use sea_orm::*;
use uuid::Uuid;

use crate::models::role::RoleType;
use crate::models::{role, transaction, user, user_role, wallet};

/// Seed a small demo dataset: two users with wallets and a handful of
/// transactions between them. A database that already has users is left
/// untouched.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    if user::Entity::find().count(db).await? > 0 {
        return Ok(());
    }

    let now = chrono::Utc::now().to_rfc3339();

    // 1. Create Users
    let jane = user::ActiveModel {
        first_name: Set("Jane".to_owned()),
        last_name: Set("Doe".to_owned()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let john = user::ActiveModel {
        first_name: Set("John".to_owned()),
        last_name: Set("Smith".to_owned()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    // 2. Link roles (the role catalog is inserted by migration)
    let user_role_row = role::Entity::find()
        .filter(role::Column::Type.eq(RoleType::User.as_str()))
        .one(db)
        .await?;
    let admin_role_row = role::Entity::find()
        .filter(role::Column::Type.eq(RoleType::Admin.as_str()))
        .one(db)
        .await?;

    if let Some(user_role_row) = &user_role_row {
        for user_id in [jane.id, john.id] {
            let link = user_role::ActiveModel {
                user_id: Set(user_id),
                role_id: Set(user_role_row.id),
            };
            user_role::Entity::insert(link).exec(db).await?;
        }
    }

    if let Some(admin_role_row) = &admin_role_row {
        let link = user_role::ActiveModel {
            user_id: Set(jane.id),
            role_id: Set(admin_role_row.id),
        };
        user_role::Entity::insert(link).exec(db).await?;
    }

    // 3. Create Wallets (balances in minor units)
    let demo_wallets = [
        (jane.id, "TR330006100519786457841326", "Main", 250_000_i64),
        (jane.id, "TR950006100519786457841327", "Savings", 1_200_000),
        (john.id, "TR640006100519786457841328", "Main", 80_000),
    ];

    let mut wallet_ids = Vec::new();
    for (user_id, iban, name, balance) in demo_wallets {
        let wallet = wallet::ActiveModel {
            iban: Set(iban.to_owned()),
            name: Set(name.to_owned()),
            balance: Set(balance),
            currency: Set("TRY".to_owned()),
            user_id: Set(user_id),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        };
        let saved = wallet.insert(db).await?;
        wallet_ids.push(saved.id);
    }

    // 4. Create Transactions
    if let [jane_main, jane_savings, john_main] = wallet_ids[..] {
        let demo_transactions = [
            (jane_main, john_main, 15_000_i64, Some("lunch split")),
            (john_main, jane_main, 4_250, None),
            (jane_main, jane_savings, 100_000, Some("monthly savings")),
        ];

        for (from, to, amount, description) in demo_transactions {
            transaction::ActiveModel {
                reference_number: Set(Uuid::new_v4().to_string()),
                from_wallet_id: Set(from),
                to_wallet_id: Set(to),
                amount: Set(amount),
                description: Set(description.map(str::to_owned)),
                created_at: Set(now.clone()),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    Ok(())
}
