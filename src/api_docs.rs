use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::user::list_users,
        api::user::get_user,
        api::user::create_user,
        api::wallet::list_wallets,
        api::wallet::get_wallet,
        api::wallet::get_wallet_by_iban,
        api::wallet::list_user_wallets,
        api::wallet::create_wallet,
        api::transaction::list_transactions,
        api::transaction::get_transaction,
        api::transaction::get_transaction_by_reference,
        api::transaction::list_user_transactions,
        api::transaction::create_transaction,
    ),
    components(
        schemas(
            crate::models::common::CommandResponse,
            crate::models::user::UserDto,
            crate::models::user::UserRequest,
            crate::models::wallet::WalletDto,
            crate::models::wallet::WalletRequest,
            crate::models::transaction::TransactionDto,
            crate::models::transaction::TransactionRequest,
        )
    ),
    tags(
        (name = "ewallet", description = "e-wallet API")
    )
)]
pub struct ApiDoc;
